//! Thin wrapper over `serde_json` providing a consistent serialization interface.
//!
//! Operations come in two tiers. Strict ones (`deserialize`, `to_value`,
//! `from_value`) return `Result`. Safe ones (`serialize`, `serialize_pretty`,
//! `deserialize_or_null`, `deserialize_or_default`) never fail: they log the
//! failure through `tracing` and hand back empty text, `None` or the fallback.

mod codec;
mod token;

pub use codec::{Codec, JsonCodec, DEFAULT_INDENT, MAX_INDENT};
pub use token::TypeToken;

use std::any::type_name;
use std::panic::AssertUnwindSafe;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::config::HolderConfig;
use crate::errors::{get_or_default, get_or_null, safe_run, Result};

/// One compact and one pretty codec, immutable after construction.
///
/// Build one, then share it by reference (or clone it) wherever JSON is
/// produced or consumed; every operation is a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct SerializationAdapter<C = JsonCodec> {
    compact: C,
    pretty: C,
}

impl SerializationAdapter<JsonCodec> {
    pub fn new() -> Self {
        Self::with_codecs(JsonCodec::compact(), JsonCodec::pretty(DEFAULT_INDENT))
    }

    /// Build an adapter whose pretty output uses the configured indent.
    pub fn from_config(config: &HolderConfig) -> Self {
        Self::with_codecs(JsonCodec::compact(), JsonCodec::pretty(config.indent))
    }
}

impl Default for SerializationAdapter<JsonCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Codec> SerializationAdapter<C> {
    pub fn with_codecs(compact: C, pretty: C) -> Self {
        Self { compact, pretty }
    }

    /// Serialize a value to compact JSON.
    ///
    /// Returns an empty string when the value cannot be represented.
    pub fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> String {
        match encode_guarded(&self.compact, value) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(target_type = type_name::<T>(), error = %e, "Failed to serialize value");
                String::new()
            }
        }
    }

    /// Serialize a value to indented JSON.
    ///
    /// `None` yields an empty string without touching the codec. Objects and
    /// arrays are re-parsed and re-encoded so spacing is canonical; scalars
    /// come back as plain text (strings unquoted). Failures yield an empty
    /// string.
    pub fn serialize_pretty<T: Serialize + ?Sized>(&self, value: Option<&T>) -> String {
        let Some(value) = value else {
            return String::new();
        };
        match self.normalize_pretty(value) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(target_type = type_name::<T>(), error = %e, "Failed to pretty-print value");
                String::new()
            }
        }
    }

    fn normalize_pretty<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let text = encode_guarded(&self.pretty, value)?;
        let tree: Value = self.pretty.decode(&text)?;
        match tree {
            Value::Object(_) | Value::Array(_) => self.pretty.encode(&tree),
            Value::String(s) => Ok(s),
            scalar => Ok(scalar.to_string()),
        }
    }

    /// Deserialize JSON text into a value, returning the failure to the caller.
    ///
    /// Absent or blank text reads as JSON `null`.
    pub fn deserialize<T: DeserializeOwned>(&self, json: Option<&str>) -> Result<T> {
        let text = match json {
            Some(text) if !text.trim().is_empty() => text,
            _ => "null",
        };
        tracing::trace!(target_type = type_name::<T>(), len = text.len(), "Decoding");
        self.compact.decode(text)
    }

    /// `deserialize` with the target shape given as a token.
    pub fn deserialize_as<T: DeserializeOwned>(
        &self,
        json: Option<&str>,
        _target: TypeToken<T>,
    ) -> Result<T> {
        self.deserialize(json)
    }

    /// Deserialize, mapping every failure and a JSON `null` to `None`.
    pub fn deserialize_or_null<T: DeserializeOwned>(&self, json: Option<&str>) -> Option<T> {
        get_or_null(|| self.deserialize::<Option<T>>(json)).flatten()
    }

    pub fn deserialize_or_null_as<T: DeserializeOwned>(
        &self,
        json: Option<&str>,
        _target: TypeToken<T>,
    ) -> Option<T> {
        self.deserialize_or_null(json)
    }

    /// Deserialize, mapping every failure and a JSON `null` to `fallback`.
    pub fn deserialize_or_default<T: DeserializeOwned>(&self, json: Option<&str>, fallback: T) -> T {
        get_or_default(|| self.deserialize::<Option<T>>(json), fallback)
    }

    pub fn deserialize_or_default_as<T: DeserializeOwned>(
        &self,
        json: Option<&str>,
        _target: TypeToken<T>,
        fallback: T,
    ) -> T {
        self.deserialize_or_default(json, fallback)
    }

    /// Convert a value to a `serde_json::Value`.
    pub fn to_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value> {
        serde_json::to_value(value).map_err(crate::errors::JsonHolderError::Encode)
    }

    /// Convert a `serde_json::Value` into a typed value.
    pub fn from_value<T: DeserializeOwned>(&self, value: Value) -> Result<T> {
        serde_json::from_value(value).map_err(crate::errors::JsonHolderError::decode::<T>)
    }
}

// A `Serialize` impl may panic; that is reported like any other encode failure.
fn encode_guarded<C, T>(codec: &C, value: &T) -> Result<String>
where
    C: Codec,
    T: Serialize + ?Sized,
{
    safe_run(AssertUnwindSafe(|| codec.encode(value)))
}
