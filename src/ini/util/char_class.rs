use crate::IniQuote;

/// Classification of a single `.ini` source character (or a `"\r\n"` pair).
/// Classes are mutually exclusive and evaluated fresh for every character.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum CharClass {
    /// ASCII letter or digit.
    Alphanumeric,
    /// Whitespace other than a line break: `' '`, `'\t'`, `'\x0b'`, `'\x0c'`.
    Whitespace,
    /// `'` or `"`.
    Quote(IniQuote),
    /// `=`
    Separator,
    /// `;`
    CommentMarker,
    /// `\r`, `\n` or `\r\n`.
    LineBreak,
    /// Anything else.
    Other,
}

impl CharClass {
    pub(crate) fn of(c: char) -> Self {
        use CharClass::*;

        match c {
            c if c.is_ascii_alphanumeric() => Alphanumeric,
            ' ' | '\t' | '\x0b' | '\x0c' => Whitespace,
            '\'' => Quote(IniQuote::Single),
            '"' => Quote(IniQuote::Double),
            '=' => Separator,
            ';' => CommentMarker,
            '\r' | '\n' => LineBreak,
            _ => Other,
        }
    }
}

/// Same set as [`CharClass::Whitespace`], used when trimming accumulated keys / values.
pub(crate) fn is_ini_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0b' | '\x0c')
}
