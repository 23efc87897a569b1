//! Errors from operations that write decorated text to a sink.

use std::io;

use thiserror::Error;

use crate::style::StyleCodeError;

/// Error returned by the printing and writing operations.
///
/// Decoding failures and sink failures are kept apart so callers can tell a
/// malformed style code from a broken output stream.
#[derive(Debug, Error)]
pub enum Error {
    /// The style code could not be decoded
    #[error(transparent)]
    Style(#[from] StyleCodeError),
    /// The sink rejected the write
    #[error("failed to write styled output: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_error_is_transparent() {
        let err: Error = StyleCodeError::UnknownStyleCharacter {
            character: 'q',
            position: 0,
        }
        .into();
        assert_eq!(err.to_string(), "unknown style character 'q' at position 0");
    }

    #[test]
    fn test_io_error_display() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
