#[derive(Debug, Clone, PartialEq, Eq)]
/// A syntax error found while parsing.
///
/// The parser does not stop at the first error: it records one of these and
/// carries on from the same position, so one mistake may produce several.
pub struct ParseError {
    /// The lexeme of the token where the problem was found.
    pub lexeme:  String,
    /// What the parser expected.
    pub message: String,
    /// The source line where the error occurred.
    pub line:    usize,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "error on line {} at \"{}\": {}",
               self.line, self.lexeme, self.message)
    }
}

impl std::error::Error for ParseError {}
