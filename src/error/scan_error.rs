#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning.
pub enum ScanError {
    /// A character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal that is still open at the end of input.
    UnterminatedString {
        /// The source line where the input ended.
        line: usize,
    },
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, line } => {
                write!(f, "error on line {line} at \"{character}\": Unexpected character.")
            },
            Self::UnterminatedString { line } => {
                write!(f, "error on line {line} at end: Unterminated string.")
            },
        }
    }
}

impl std::error::Error for ScanError {}
