use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};

use crate::errors::{JsonHolderError, Result};

/// Indent width used when none is configured.
pub const DEFAULT_INDENT: usize = 2;

/// Largest indent width a pretty codec will use.
pub const MAX_INDENT: usize = 16;

/// The encode/decode pair every adapter operation bottoms out in.
///
/// Implementations must hold no mutable state: one instance is shared by
/// every caller of an adapter.
pub trait Codec: Send + Sync {
    /// Turn a value into JSON text.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String>;

    /// Parse JSON text into a value of type `T`.
    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    /// No insignificant whitespace.
    Compact,
    /// One member per line, nested levels indented by `indent` spaces.
    Pretty { indent: usize },
}

/// `serde_json` behind the `Codec` interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonCodec {
    style: Style,
}

impl JsonCodec {
    pub fn compact() -> Self {
        Self {
            style: Style::Compact,
        }
    }

    /// Pretty codec indenting by `indent` spaces, capped at `MAX_INDENT`.
    pub fn pretty(indent: usize) -> Self {
        Self {
            style: Style::Pretty {
                indent: indent.min(MAX_INDENT),
            },
        }
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::compact()
    }
}

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        match self.style {
            Style::Compact => write_with(value, CompactFormatter),
            Style::Pretty { indent } => {
                let indent = vec![b' '; indent];
                write_with(value, PrettyFormatter::with_indent(&indent))
            }
        }
    }

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T> {
        serde_json::from_str(text).map_err(JsonHolderError::decode::<T>)
    }
}

fn write_with<T, F>(value: &T, formatter: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: Formatter,
{
    let mut buf = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(JsonHolderError::Encode)?;
    // serde_json only ever writes UTF-8.
    String::from_utf8(buf).map_err(|e| JsonHolderError::Encode(serde::ser::Error::custom(e)))
}
