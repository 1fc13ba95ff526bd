//! Transport failure diagnostics
//!
//! Users only ever see the generic per-flow alert. These helpers decide what
//! goes into the log line next to it.

use anyhow::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection refused, DNS or routing failure
    Unreachable,
    Timeout,
    /// Selected file could not be read before sending
    FileRead,
    /// Server answered with a status whose body was not usable
    BadStatus(u16),
    /// Body was not the JSON we expected
    Decode,
    Other,
}

/// Classify a flow failure from its error chain
pub fn classify_error(error: &Error) -> FailureKind {
    let reqwest_err = error.chain().find_map(|e| e.downcast_ref::<reqwest::Error>());

    match reqwest_err {
        Some(err) if err.is_timeout() => return FailureKind::Timeout,
        Some(err) if err.is_connect() => return FailureKind::Unreachable,
        Some(err) if err.is_decode() => {
            return match err.status() {
                Some(status) if !status.is_success() => FailureKind::BadStatus(status.as_u16()),
                _ => FailureKind::Decode,
            }
        }
        Some(err) => {
            if let Some(status) = err.status() {
                return FailureKind::BadStatus(status.as_u16());
            }
        }
        None => {
            if error.chain().any(|e| e.is::<std::io::Error>()) {
                return FailureKind::FileRead;
            }
        }
    }

    // Fall back on the message for errors that lost their type along the way
    let text = format!("{:#}", error).to_lowercase();
    if text.contains("timed out") || text.contains("timeout") {
        FailureKind::Timeout
    } else if text.contains("connection refused") || text.contains("dns") {
        FailureKind::Unreachable
    } else {
        FailureKind::Other
    }
}

/// Innermost useful message: the reqwest error if any, else the root cause
pub fn format_error_message(error: &Error) -> String {
    error
        .chain()
        .find_map(|e| e.downcast_ref::<reqwest::Error>())
        .map(|e| e.to_string())
        .unwrap_or_else(|| error.root_cause().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_refused_is_unreachable() {
        let err = anyhow::anyhow!("Connection Refused (os error 111)");
        assert_eq!(classify_error(&err), FailureKind::Unreachable);
    }

    #[test]
    fn test_timeout_found_through_context() {
        let err = anyhow::anyhow!("operation timed out").context("Failed to send question");
        assert_eq!(classify_error(&err), FailureKind::Timeout);
    }

    #[test]
    fn test_io_error_is_file_read() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Err::<(), _>(io).context("Failed to read paper.pdf").unwrap_err();
        assert_eq!(classify_error(&err), FailureKind::FileRead);
    }

    #[test]
    fn test_unknown_error_is_other() {
        let err = anyhow::anyhow!("zotero said no");
        assert_eq!(classify_error(&err), FailureKind::Other);
    }

    #[test]
    fn test_message_is_root_cause() {
        let err = anyhow::anyhow!("tcp connect error").context("Failed to send upload request");
        assert_eq!(format_error_message(&err), "tcp connect error");
    }
}
