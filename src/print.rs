//! Printing and formatting over decorated text.
//!
//! The stdout entry points write through [`console::Term::stdout`], which is
//! unbuffered: each call issues its write directly. Concurrent calls are as
//! safe as the sink's own writes; nothing here adds locking.

use std::fmt::{self, Display, Write as _};
use std::io::Write;

use console::Term;

use crate::decorate::decorate;
use crate::error::Error;
use crate::style::StyleCodeError;

/// Decorates the concatenated values and writes them to stdout.
///
/// Values are joined with no separator and no trailing newline is added.
///
/// # Errors
///
/// Fails on an unknown style character (nothing is written) or a stdout
/// write error.
pub fn print(code: &str, values: &[&dyn Display]) -> Result<(), Error> {
    print_to(&mut Term::stdout(), code, values)
}

/// Writes the concatenated values and a newline to stdout, undecorated.
///
/// The style code is ignored entirely, including validation: the output is
/// always the plain text. This matches the long-standing behavior of the
/// line-printing entry point and is kept for compatibility.
///
/// # Errors
///
/// Fails only when stdout rejects the write.
pub fn print_line(code: &str, values: &[&dyn Display]) -> Result<(), Error> {
    print_line_to(&mut Term::stdout(), code, values)
}

/// Substitutes `args`, decorates the result and writes it to stdout.
///
/// # Errors
///
/// Fails on an unknown style character (nothing is written) or a stdout
/// write error.
pub fn print_formatted(code: &str, args: fmt::Arguments<'_>) -> Result<(), Error> {
    write_formatted(code, &mut Term::stdout(), args).map(|_| ())
}

/// Substitutes `args` and decorates the result.
///
/// # Example
///
/// ```rust
/// let line = colorcode::format("g", format_args!("{} passed", 3)).unwrap();
/// assert_eq!(line, "\x1b[32m3 passed\x1b[0m");
/// ```
///
/// # Errors
///
/// Returns [`StyleCodeError::UnknownStyleCharacter`] for a malformed code.
pub fn format(code: &str, args: fmt::Arguments<'_>) -> Result<String, StyleCodeError> {
    decorate(code, &fmt::format(args))
}

/// Substitutes `args`, decorates the result and writes it to `sink`.
///
/// Returns the number of bytes written.
///
/// # Example
///
/// ```rust
/// let mut out: Vec<u8> = Vec::new();
/// let n = colorcode::write_formatted("+", &mut out, format_args!("{}%", 100)).unwrap();
/// assert_eq!(out, b"\x1b[1m100%\x1b[0m");
/// assert_eq!(n, out.len());
/// ```
///
/// # Errors
///
/// Fails on an unknown style character (nothing is written) or when the sink
/// rejects the write.
pub fn write_formatted<W: Write + ?Sized>(
    code: &str,
    sink: &mut W,
    args: fmt::Arguments<'_>,
) -> Result<usize, Error> {
    let decorated = format(code, args)?;
    sink.write_all(decorated.as_bytes())?;
    Ok(decorated.len())
}

fn concat(values: &[&dyn Display]) -> String {
    let mut text = String::new();
    for value in values {
        // Writing into a String cannot fail.
        let _ = write!(text, "{}", value);
    }
    text
}

pub(crate) fn print_to<W: Write + ?Sized>(
    sink: &mut W,
    code: &str,
    values: &[&dyn Display],
) -> Result<(), Error> {
    let decorated = decorate(code, &concat(values))?;
    sink.write_all(decorated.as_bytes())?;
    Ok(())
}

pub(crate) fn print_line_to<W: Write + ?Sized>(
    sink: &mut W,
    _code: &str,
    values: &[&dyn Display],
) -> Result<(), Error> {
    let mut line = concat(values);
    line.push('\n');
    sink.write_all(line.as_bytes())?;
    Ok(())
}
