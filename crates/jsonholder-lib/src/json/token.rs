use std::fmt;
use std::marker::PhantomData;

/// Names the shape a deserialization should produce, including compound
/// shapes such as `Vec<Bean>` or `HashMap<String, i32>`.
///
/// ```
/// use jsonholder_lib::{SerializationAdapter, TypeToken};
///
/// let adapter = SerializationAdapter::new();
/// let list = adapter
///     .deserialize_as(Some("[1, 2]"), TypeToken::<Vec<u8>>::of())
///     .unwrap();
/// assert_eq!(list, vec![1, 2]);
/// ```
pub struct TypeToken<T: ?Sized>(PhantomData<fn() -> T>);

impl<T: ?Sized> TypeToken<T> {
    pub const fn of() -> Self {
        TypeToken(PhantomData)
    }

    /// The Rust name of the described shape.
    pub fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

impl<T: ?Sized> Clone for TypeToken<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for TypeToken<T> {}

impl<T: ?Sized> Default for TypeToken<T> {
    fn default() -> Self {
        Self::of()
    }
}

impl<T: ?Sized> fmt::Debug for TypeToken<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeToken<{}>", self.type_name())
    }
}
