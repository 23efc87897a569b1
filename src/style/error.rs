//! Style code errors.

use thiserror::Error;

/// Error returned when a style code cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleCodeError {
    /// A character in the code is not part of the style-code grammar
    #[error("unknown style character '{character}' at position {position}")]
    UnknownStyleCharacter { character: char, position: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_character_display() {
        let err = StyleCodeError::UnknownStyleCharacter {
            character: 'z',
            position: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("'z'"));
        assert!(msg.contains("position 2"));
    }
}
