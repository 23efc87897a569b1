//! The fixed mapping from style-code characters to ANSI attributes.

use once_cell::sync::Lazy;

/// Escape sequence that resets every attribute, closing each wrapping layer.
pub const RESET: &str = "\x1b[0m";

/// A single visual effect selected by one style-code character.
///
/// Lowercase letters select foreground colors, uppercase letters the matching
/// background colors, and punctuation selects text modifiers. There is no
/// background black: `X` is not part of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Red,
    Green,
    Yellow,
    Blue,
    Black,
    Magenta,
    Cyan,
    White,
    Default,
    BgRed,
    BgGreen,
    BgYellow,
    BgBlue,
    BgMagenta,
    BgCyan,
    BgWhite,
    BgDefault,
    Bold,
    Italic,
    Reverse,
    Underline,
    Blink,
    Concealed,
}

/// Every supported attribute, in style-code table order.
static ALL: Lazy<Vec<Attribute>> = Lazy::new(|| {
    "rgybxmcwdRGYBMCWD+*~_#?"
        .chars()
        .filter_map(Attribute::from_char)
        .collect()
});

impl Attribute {
    /// Looks up the attribute selected by a style-code character.
    ///
    /// Returns `None` for characters outside the grammar.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colorcode::Attribute;
    ///
    /// assert_eq!(Attribute::from_char('r'), Some(Attribute::Red));
    /// assert_eq!(Attribute::from_char('R'), Some(Attribute::BgRed));
    /// assert_eq!(Attribute::from_char('X'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        let attribute = match c {
            // foreground
            'r' => Attribute::Red,
            'g' => Attribute::Green,
            'y' => Attribute::Yellow,
            'b' => Attribute::Blue,
            'x' => Attribute::Black,
            'm' => Attribute::Magenta,
            'c' => Attribute::Cyan,
            'w' => Attribute::White,
            'd' => Attribute::Default,
            // background
            'R' => Attribute::BgRed,
            'G' => Attribute::BgGreen,
            'Y' => Attribute::BgYellow,
            'B' => Attribute::BgBlue,
            'M' => Attribute::BgMagenta,
            'C' => Attribute::BgCyan,
            'W' => Attribute::BgWhite,
            'D' => Attribute::BgDefault,
            // modifiers
            '+' => Attribute::Bold,
            '*' => Attribute::Italic,
            '~' => Attribute::Reverse,
            '_' => Attribute::Underline,
            '#' => Attribute::Blink,
            '?' => Attribute::Concealed,
            _ => return None,
        };
        Some(attribute)
    }

    /// The style-code character that selects this attribute.
    pub fn code_char(self) -> char {
        match self {
            Attribute::Red => 'r',
            Attribute::Green => 'g',
            Attribute::Yellow => 'y',
            Attribute::Blue => 'b',
            Attribute::Black => 'x',
            Attribute::Magenta => 'm',
            Attribute::Cyan => 'c',
            Attribute::White => 'w',
            Attribute::Default => 'd',
            Attribute::BgRed => 'R',
            Attribute::BgGreen => 'G',
            Attribute::BgYellow => 'Y',
            Attribute::BgBlue => 'B',
            Attribute::BgMagenta => 'M',
            Attribute::BgCyan => 'C',
            Attribute::BgWhite => 'W',
            Attribute::BgDefault => 'D',
            Attribute::Bold => '+',
            Attribute::Italic => '*',
            Attribute::Reverse => '~',
            Attribute::Underline => '_',
            Attribute::Blink => '#',
            Attribute::Concealed => '?',
        }
    }

    /// The SGR parameter for this attribute.
    pub fn sgr(self) -> u8 {
        match self {
            Attribute::Black => 30,
            Attribute::Red => 31,
            Attribute::Green => 32,
            Attribute::Yellow => 33,
            Attribute::Blue => 34,
            Attribute::Magenta => 35,
            Attribute::Cyan => 36,
            Attribute::White => 37,
            Attribute::Default => 39,
            Attribute::BgRed => 41,
            Attribute::BgGreen => 42,
            Attribute::BgYellow => 43,
            Attribute::BgBlue => 44,
            Attribute::BgMagenta => 45,
            Attribute::BgCyan => 46,
            Attribute::BgWhite => 47,
            Attribute::BgDefault => 49,
            Attribute::Bold => 1,
            Attribute::Italic => 3,
            Attribute::Underline => 4,
            Attribute::Blink => 5,
            Attribute::Reverse => 7,
            Attribute::Concealed => 8,
        }
    }

    /// The escape sequence that switches this attribute on.
    pub fn start_sequence(self) -> String {
        format!("\x1b[{}m", self.sgr())
    }

    /// Wraps `text` in this attribute's start sequence and [`RESET`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use colorcode::Attribute;
    ///
    /// assert_eq!(Attribute::Bold.wrap("hi"), "\x1b[1mhi\x1b[0m");
    /// ```
    pub fn wrap(self, text: &str) -> String {
        format!("{}{}{}", self.start_sequence(), text, RESET)
    }

    /// Returns all supported attributes in style-code table order.
    pub fn all() -> &'static [Attribute] {
        &ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_round_trips_code_char() {
        for attribute in Attribute::all() {
            assert_eq!(Attribute::from_char(attribute.code_char()), Some(*attribute));
        }
    }

    #[test]
    fn test_all_covers_grammar() {
        assert_eq!(Attribute::all().len(), 23);
    }

    #[test]
    fn test_background_black_unsupported() {
        assert_eq!(Attribute::from_char('X'), None);
        assert_eq!(Attribute::from_char('x'), Some(Attribute::Black));
    }

    #[test]
    fn test_unknown_chars() {
        for c in ['z', 'Z', ' ', '%', '0', 'é'] {
            assert_eq!(Attribute::from_char(c), None, "{:?} should be unknown", c);
        }
    }

    #[test]
    fn test_sgr_foreground_background_offset() {
        let pairs = [
            (Attribute::Red, Attribute::BgRed),
            (Attribute::Green, Attribute::BgGreen),
            (Attribute::Yellow, Attribute::BgYellow),
            (Attribute::Blue, Attribute::BgBlue),
            (Attribute::Magenta, Attribute::BgMagenta),
            (Attribute::Cyan, Attribute::BgCyan),
            (Attribute::White, Attribute::BgWhite),
            (Attribute::Default, Attribute::BgDefault),
        ];
        for (fg, bg) in pairs {
            assert_eq!(fg.sgr() + 10, bg.sgr());
        }
    }

    #[test]
    fn test_start_sequence() {
        assert_eq!(Attribute::Red.start_sequence(), "\x1b[31m");
        assert_eq!(Attribute::BgDefault.start_sequence(), "\x1b[49m");
        assert_eq!(Attribute::Concealed.start_sequence(), "\x1b[8m");
    }

    #[test]
    fn test_wrap_empty() {
        assert_eq!(Attribute::Underline.wrap(""), "\x1b[4m\x1b[0m");
    }
}
