use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonHolderError {
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Decode error ({target}): {source}")]
    Decode {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Panic recovered: {0}")]
    Panic(String),
}

impl JsonHolderError {
    /// Build a decode error tagged with the name of the requested shape.
    pub fn decode<T: ?Sized>(source: serde_json::Error) -> Self {
        JsonHolderError::Decode {
            target: std::any::type_name::<T>(),
            source,
        }
    }

    /// Whether this failure came from turning a value into JSON.
    pub fn is_encode(&self) -> bool {
        matches!(self, JsonHolderError::Encode(_) | JsonHolderError::Panic(_))
    }

    /// Whether this failure came from parsing or binding JSON text.
    pub fn is_decode(&self) -> bool {
        matches!(self, JsonHolderError::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, JsonHolderError>;

/// Wraps a closure, catching panics and converting them to `JsonHolderError::Panic`.
///
/// If the closure panics, the panic payload is extracted as a string message.
/// If the closure returns normally, its result is passed through unchanged.
pub fn safe_run<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + std::panic::UnwindSafe,
{
    match std::panic::catch_unwind(f) {
        Ok(result) => result,
        Err(panic_info) => {
            let msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            Err(JsonHolderError::Panic(msg))
        }
    }
}

/// Runs `f`, turning any error into `None`. The error is logged, not returned.
pub fn get_or_null<F, T>(f: F) -> Option<T>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, "Falling back to null");
            None
        }
    }
}

/// Runs `f`, returning `default` when it fails or produces nothing.
pub fn get_or_default<F, T>(f: F, default: T) -> T
where
    F: FnOnce() -> Result<Option<T>>,
{
    match f() {
        Ok(Some(value)) => value,
        Ok(None) => default,
        Err(e) => {
            tracing::warn!(error = %e, "Falling back to default value");
            default
        }
    }
}

/// Logs a fatal error and exits the process with code 1.
pub fn handle_fatal(err: JsonHolderError) -> ! {
    tracing::error!("Fatal error: {}", err);
    std::process::exit(1)
}

/// Maps a `JsonHolderError` to user-friendly CLI output with actionable suggestions.
pub fn handle_command_error(err: &JsonHolderError) {
    use crate::output;

    match err {
        JsonHolderError::Decode { source, .. } => {
            output::error(&format!("Invalid JSON: {}", source));
            output::info("Check the input near the reported line and column.");
        }
        JsonHolderError::Encode(e) => {
            output::error(&format!("Could not produce JSON: {}", e));
        }
        JsonHolderError::Io(e) => {
            output::error(&format!("File error: {}", e));
        }
        JsonHolderError::Config(msg) => {
            output::error(&format!("Configuration error: {}", msg));
            output::info("Check the JSONHOLDER_* environment variables.");
        }
        _ => {
            output::error(&format!("{}", err));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> JsonHolderError {
        let source = serde_json::from_str::<i32>("nope").unwrap_err();
        JsonHolderError::decode::<i32>(source)
    }

    #[test]
    fn test_decode_error_carries_target_name() {
        match decode_error() {
            JsonHolderError::Decode { target, .. } => assert_eq!(target, "i32"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_classification() {
        assert!(decode_error().is_decode());
        assert!(!decode_error().is_encode());
        assert!(JsonHolderError::Panic("boom".into()).is_encode());
        assert!(!JsonHolderError::Config("bad".into()).is_decode());
    }

    #[test]
    fn test_display_includes_target() {
        let msg = decode_error().to_string();
        assert!(msg.starts_with("Decode error (i32):"), "got {msg}");
    }

    #[test]
    fn test_safe_run_passes_through_ok() {
        let result = safe_run(|| Ok(7));
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn test_safe_run_passes_through_err() {
        let result: Result<()> = safe_run(|| Err(JsonHolderError::Config("x".into())));
        assert!(matches!(result, Err(JsonHolderError::Config(_))));
    }

    #[test]
    fn test_safe_run_catches_str_panic() {
        let result: Result<()> = safe_run(|| panic!("boom"));
        match result {
            Err(JsonHolderError::Panic(msg)) => assert_eq!(msg, "boom"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_safe_run_catches_string_panic() {
        let result: Result<()> = safe_run(|| panic!("code {}", 42));
        match result {
            Err(JsonHolderError::Panic(msg)) => assert_eq!(msg, "code 42"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_get_or_null() {
        assert_eq!(get_or_null(|| Ok(3)), Some(3));
        assert_eq!(get_or_null::<_, i32>(|| Err(decode_error())), None);
    }

    #[test]
    fn test_get_or_default() {
        assert_eq!(get_or_default(|| Ok(Some(3)), 9), 3);
        assert_eq!(get_or_default(|| Ok(None), 9), 9);
        assert_eq!(get_or_default(|| Err(decode_error()), 9), 9);
    }

    #[test]
    fn test_handle_command_error_does_not_panic() {
        handle_command_error(&decode_error());
        handle_command_error(&JsonHolderError::Config("bad indent".into()));
        handle_command_error(&JsonHolderError::Panic("boom".into()));
    }
}
