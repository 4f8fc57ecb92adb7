use std::fmt::{Display, Formatter};

/// Quote character which opened a quoted `.ini` value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IniQuote {
    /// `'`
    Single,
    /// `"`
    Double,
}

impl IniQuote {
    pub fn as_char(self) -> char {
        match self {
            IniQuote::Single => '\'',
            IniQuote::Double => '"',
        }
    }
}

impl Display for IniQuote {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            IniQuote::Single => "single-quoted".fmt(f),
            IniQuote::Double => "double-quoted".fmt(f),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum IniErrorKind {
    /// Character not valid in the current parser state
    /// (e.g. a double quote or a key-value separator at the start of a key,
    /// or any non-whitespace character after a closing quote).
    /// Contains the offending character.
    #[error("Unexpected character ({0:?}).")]
    UnexpectedCharacter(char),
    /// End of file reached before the closing quote of a quoted value.
    /// Contains the opening quote.
    #[error("Unexpected end of file encountered when parsing a {0} value.")]
    UnterminatedQuote(IniQuote),
}

/// An error returned by the INI parser.
///
/// Both error kinds are fatal - no partial result is produced.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
#[error(
    "{}INI parse error. Line: {line}, column: {column}. {error} Line text: \"{line_text}\".",
    source_prefix(.source_name)
)]
pub struct IniError {
    /// Line in the source string where the error occured (1-based).
    pub line: u32,
    /// Column in the source string where the error occured (1-based, in characters).
    pub column: u32,
    /// Actual error.
    pub error: IniErrorKind,
    /// Full text of the offending physical line, without the line break.
    pub line_text: String,
    /// Name of the parsed source, if one was provided to the parser.
    pub source_name: Option<String>,
}

fn source_prefix(source_name: &Option<String>) -> String {
    match source_name {
        Some(source_name) => format!("{}: ", source_name),
        None => String::new(),
    }
}
