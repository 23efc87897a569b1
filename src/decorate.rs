//! Decoding style codes into nested escape wrapping.
//!
//! Each character of a code wraps the text produced so far, so the first
//! character ends up innermost and the last character outermost:
//!
//! ```text
//! decorate("+r", "hi")  =  red( bold( "hi" ) )
//!                       =  ESC[31m ESC[1m hi ESC[0m ESC[0m
//! ```
//!
//! Every wrapping step escapes literal `%` to `%%` before wrapping and undoes
//! it afterwards, so the returned text always carries the caller's percent
//! signs unchanged.

use crate::style::{Attribute, StyleCode, StyleCodeError};

/// Wraps `text` according to the style `code`.
///
/// An empty code returns the text unchanged. The whole code is checked before
/// any wrapping happens, so an unknown character never yields partial output.
///
/// # Errors
///
/// Returns [`StyleCodeError::UnknownStyleCharacter`] for the first character
/// that is not part of the grammar.
///
/// # Example
///
/// ```rust
/// use colorcode::decorate;
///
/// assert_eq!(decorate("r", "alert").unwrap(), "\x1b[31malert\x1b[0m");
/// assert_eq!(decorate("", "plain").unwrap(), "plain");
/// assert!(decorate("z", "oops").is_err());
/// ```
pub fn decorate(code: &str, text: &str) -> Result<String, StyleCodeError> {
    if code.is_empty() {
        return Ok(text.to_string());
    }
    Ok(StyleCode::parse(code)?.apply(text))
}

/// Folds `attributes` over `text`, innermost first.
pub(crate) fn apply_attributes(attributes: &[Attribute], text: &str) -> String {
    attributes
        .iter()
        .fold(text.to_string(), |decorated, attribute| {
            let wrapped = attribute.wrap(&escape_percent(&decorated));
            unescape_percent(&wrapped)
        })
}

/// Doubles every `%` so the text survives a printf-style formatting pass.
///
/// # Example
///
/// ```rust
/// use colorcode::{escape_percent, unescape_percent};
///
/// assert_eq!(escape_percent("100%"), "100%%");
/// assert_eq!(unescape_percent("100%%"), "100%");
/// ```
pub fn escape_percent(text: &str) -> String {
    text.replace('%', "%%")
}

/// Collapses every `%%` back into a single `%`.
pub fn unescape_percent(text: &str) -> String {
    text.replace("%%", "%")
}
