//! Result alias and the best-effort fallback combinator.

use crate::error::Error;

/// The standard Result type for hisab UI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Degrade a failed best-effort operation to a fallback value.
///
/// Used where a failure must not stop the page (storage reads, optional
/// configuration). The error is reported as a warning with `context`.
pub trait OrFallback<T> {
    fn or_fallback(self, fallback: T, context: &str) -> T;
}

impl<T> OrFallback<T> for Result<T> {
    fn or_fallback(self, fallback: T, context: &str) -> T {
        self.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "{context}, using fallback");
            fallback
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_keeps_value() {
        let ok: Result<u32> = Ok(7);
        assert_eq!(ok.or_fallback(0, "counter"), 7);
    }

    #[test]
    fn test_err_yields_fallback() {
        let err: Result<Option<String>> = Err(Error::storage_read_failed("theme", "denied"));
        assert_eq!(err.or_fallback(None, "theme preference unreadable"), None);
    }
}
