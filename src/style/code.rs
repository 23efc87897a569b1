//! Validated style codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::attribute::Attribute;
use super::error::StyleCodeError;
use crate::decorate::apply_attributes;

/// A style code whose characters have all been checked against the grammar.
///
/// Parsing once up front moves the only failure mode to construction time,
/// so [`StyleCode::apply`] cannot fail. The code serializes as its source
/// string, which lets callers keep styles in their own configuration files.
///
/// # Example
///
/// ```rust
/// use colorcode::StyleCode;
///
/// let warning: StyleCode = "+y".parse().unwrap();
/// assert_eq!(warning.apply("careful"), "\x1b[33m\x1b[1mcareful\x1b[0m\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StyleCode {
    source: String,
    attributes: Vec<Attribute>,
}

impl StyleCode {
    /// Parses a style code, failing on the first character outside the grammar.
    ///
    /// # Errors
    ///
    /// Returns [`StyleCodeError::UnknownStyleCharacter`] naming the offending
    /// character and its position (in characters, starting at zero).
    pub fn parse(code: &str) -> Result<Self, StyleCodeError> {
        let attributes = code
            .chars()
            .enumerate()
            .map(|(position, character)| {
                Attribute::from_char(character).ok_or(StyleCodeError::UnknownStyleCharacter {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            source: code.to_string(),
            attributes,
        })
    }

    /// Decorates `text`, the last attribute becoming the outermost layer.
    pub fn apply(&self, text: &str) -> String {
        apply_attributes(&self.attributes, text)
    }

    /// The decoded attributes, in code order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// The code as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true if the code selects no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl fmt::Display for StyleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for StyleCode {
    type Err = StyleCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for StyleCode {
    type Error = StyleCodeError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        Self::parse(code)
    }
}

impl TryFrom<String> for StyleCode {
    type Error = StyleCodeError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::parse(&code)
    }
}

impl From<StyleCode> for String {
    fn from(code: StyleCode) -> Self {
        code.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let code = StyleCode::parse("+rY").unwrap();
        assert_eq!(
            code.attributes(),
            &[Attribute::Bold, Attribute::Red, Attribute::BgYellow]
        );
        assert_eq!(code.as_str(), "+rY");
        assert!(!code.is_empty());
    }

    #[test]
    fn test_parse_empty() {
        let code = StyleCode::parse("").unwrap();
        assert!(code.is_empty());
        assert_eq!(code, StyleCode::default());
        assert_eq!(code.apply("as is"), "as is");
    }

    #[test]
    fn test_parse_reports_first_unknown() {
        let err = StyleCode::parse("r+zq").unwrap_err();
        assert_eq!(
            err,
            StyleCodeError::UnknownStyleCharacter {
                character: 'z',
                position: 2
            }
        );
    }

    #[test]
    fn test_parse_position_counts_chars() {
        let err = StyleCode::parse("é").unwrap_err();
        assert_eq!(
            err,
            StyleCodeError::UnknownStyleCharacter {
                character: 'é',
                position: 0
            }
        );
    }

    #[test]
    fn test_duplicates_allowed() {
        let code = StyleCode::parse("rr").unwrap();
        assert_eq!(code.attributes(), &[Attribute::Red, Attribute::Red]);
    }

    #[test]
    fn test_display_shows_source() {
        let code: StyleCode = "_#".parse().unwrap();
        assert_eq!(code.to_string(), "_#");
    }

    #[test]
    fn test_try_from_string() {
        assert!(StyleCode::try_from(String::from("gB")).is_ok());
        assert!(StyleCode::try_from("X").is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let code = StyleCode::parse("+c").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, r#""+c""#);

        let back: StyleCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn test_serde_rejects_unknown() {
        let result: Result<StyleCode, _> = serde_json::from_str(r#""rz""#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("unknown style character 'z'"));
    }

    #[test]
    fn test_serde_in_config_struct() {
        #[derive(Deserialize)]
        struct Palette {
            error: StyleCode,
            ok: StyleCode,
        }

        let palette: Palette = serde_json::from_str(r#"{"error": "+r", "ok": "g"}"#).unwrap();
        assert_eq!(palette.error.attributes(), &[Attribute::Bold, Attribute::Red]);
        assert_eq!(palette.ok.apply("fine"), "\x1b[32mfine\x1b[0m");
    }
}
