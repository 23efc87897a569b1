//! # colorcode - ANSI styling from short mnemonic codes
//!
//! `colorcode` wraps text in ANSI escape sequences chosen by a compact style
//! code, where every character selects one attribute:
//!
//! | char | effect | char | effect |
//! |------|--------|------|--------|
//! | `r` | red | `R` | red background |
//! | `g` | green | `G` | green background |
//! | `y` | yellow | `Y` | yellow background |
//! | `b` | blue | `B` | blue background |
//! | `x` | black | | |
//! | `m` | magenta | `M` | magenta background |
//! | `c` | cyan | `C` | cyan background |
//! | `w` | white | `W` | white background |
//! | `d` | default | `D` | default background |
//! | `+` | bold | `*` | italic |
//! | `~` | reverse | `_` | underline |
//! | `#` | blink | `?` | concealed |
//!
//! So `"+r"` is bold red and `"rY"` is red text on a yellow background.
//! Characters apply left to right, each wrapping the result of the previous
//! one, so the last character becomes the outermost escape layer.
//!
//! ## Quick Start
//!
//! ```rust
//! use colorcode::{cformat, decorate, StyleCode};
//!
//! // One-off decoration
//! let alert = decorate("+r", "failed").unwrap();
//! assert_eq!(alert, "\x1b[31m\x1b[1mfailed\x1b[0m\x1b[0m");
//!
//! // Format, then decorate
//! let summary = cformat!("g", "{} of {} passed", 9, 10).unwrap();
//! assert_eq!(summary, "\x1b[32m9 of 10 passed\x1b[0m");
//!
//! // Validate once, apply many times
//! let header = StyleCode::parse("_c").unwrap();
//! assert_eq!(header.apply("Name"), "\x1b[36m\x1b[4mName\x1b[0m\x1b[0m");
//! ```
//!
//! ## Printing
//!
//! [`print`], [`print_formatted`] and [`write_formatted`] decorate and then
//! write, to stdout or to any [`std::io::Write`]. The macros [`cprint!`],
//! [`cprintf!`] and [`cwritef!`] take `format!`-style arguments.
//!
//! [`print_line`] (and [`cprintln!`]) ignore their style code and always write
//! plain text followed by a newline. This is long-standing behavior, kept
//! so existing output does not change.
//!
//! ## Errors
//!
//! A character outside the grammar yields
//! [`StyleCodeError::UnknownStyleCharacter`] before any text is produced.
//! Operations that write also report sink failures through [`Error::Io`].
//!
//! No terminal detection is performed: escapes are always emitted.

mod decorate;
mod error;
mod print;
pub mod style;

pub use decorate::{decorate, escape_percent, unescape_percent};
pub use error::Error;
pub use print::{format, print, print_formatted, print_line, write_formatted};
pub use style::{Attribute, StyleCode, StyleCodeError, RESET};

/// Decorates the concatenated values and writes them to stdout.
///
/// ```rust,no_run
/// colorcode::cprint!("+g", "done in ", 3, "s").unwrap();
/// ```
#[macro_export]
macro_rules! cprint {
    ($code:expr $(,)?) => {
        $crate::print($code, &[])
    };
    ($code:expr, $($value:expr),+ $(,)?) => {
        $crate::print($code, &[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Writes the concatenated values and a newline to stdout; the code is ignored.
#[macro_export]
macro_rules! cprintln {
    ($code:expr $(,)?) => {
        $crate::print_line($code, &[])
    };
    ($code:expr, $($value:expr),+ $(,)?) => {
        $crate::print_line($code, &[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Formats, decorates and writes to stdout.
///
/// ```rust,no_run
/// colorcode::cprintf!("y", "{} warnings", 2).unwrap();
/// ```
#[macro_export]
macro_rules! cprintf {
    ($code:expr, $($arg:tt)*) => {
        $crate::print_formatted($code, ::std::format_args!($($arg)*))
    };
}

/// Formats and decorates, returning the string.
#[macro_export]
macro_rules! cformat {
    ($code:expr, $($arg:tt)*) => {
        $crate::format($code, ::std::format_args!($($arg)*))
    };
}

/// Formats, decorates and writes to a sink, returning the bytes written.
///
/// ```rust
/// let mut out: Vec<u8> = Vec::new();
/// let n = colorcode::cwritef!("R", &mut out, "{}", "hot").unwrap();
/// assert_eq!(out, b"\x1b[41mhot\x1b[0m");
/// assert_eq!(n, 12);
/// ```
#[macro_export]
macro_rules! cwritef {
    ($code:expr, $sink:expr, $($arg:tt)*) => {
        $crate::write_formatted($code, $sink, ::std::format_args!($($arg)*))
    };
}
