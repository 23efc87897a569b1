//! Style code grammar and its decoded forms.
//!
//! This module provides the styling primitives:
//!
//! - [`Attribute`]: One visual effect, selected by one style-code character
//! - [`StyleCode`]: A whole code, validated once and reusable
//! - [`StyleCodeError`]: Errors from decoding a code
//!
//! Characters map to attributes through a fixed table: lowercase letters are
//! foreground colors, uppercase letters background colors, and `+ * ~ _ # ?`
//! are bold, italic, reverse, underline, blink and concealed.

mod attribute;
mod code;
mod error;

pub use attribute::{Attribute, RESET};
pub use code::StyleCode;
pub use error::StyleCodeError;
