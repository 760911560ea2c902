use crate::errors::{JsonHolderError, Result};
use crate::json::{DEFAULT_INDENT, MAX_INDENT};

/// Environment variable holding the pretty-print indent width.
pub const INDENT_VAR: &str = "JSONHOLDER_INDENT";
/// Environment variable enabling debug logging.
pub const DEBUG_VAR: &str = "JSONHOLDER_DEBUG";

/// Immutable settings for building a `SerializationAdapter`, read from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolderConfig {
    /// Number of spaces per nesting level in pretty output.
    pub indent: usize,
    /// Emit debug-level logs.
    pub debug: bool,
}

impl Default for HolderConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            debug: false,
        }
    }
}

impl HolderConfig {
    /// Read settings from the process environment, falling back to the
    /// defaults (with a warning) when a variable is malformed.
    pub fn from_env() -> Self {
        Self::from_lookup_or_default(|key| std::env::var(key).ok())
    }

    /// `from_lookup`, falling back to the defaults (with a warning) on malformed values.
    pub fn from_lookup_or_default<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup(lookup).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Ignoring invalid environment configuration");
            Self::default()
        })
    }

    /// Read settings from the process environment.
    pub fn try_from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let indent = match lookup(INDENT_VAR) {
            Some(raw) => parse_indent(&raw)?,
            None => defaults.indent,
        };
        let debug = match lookup(DEBUG_VAR) {
            Some(raw) => parse_flag(DEBUG_VAR, &raw)?,
            None => defaults.debug,
        };

        Ok(Self { indent, debug })
    }
}

fn parse_indent(raw: &str) -> Result<usize> {
    let indent: usize = raw.trim().parse().map_err(|_| {
        JsonHolderError::Config(format!("{INDENT_VAR} must be a number, got {raw:?}"))
    })?;
    if indent > MAX_INDENT {
        return Err(JsonHolderError::Config(format!(
            "{INDENT_VAR} must be at most {MAX_INDENT}, got {indent}"
        )));
    }
    Ok(indent)
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(JsonHolderError::Config(format!(
            "{name} must be a boolean, got {raw:?}"
        ))),
    }
}
