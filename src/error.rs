use std::fmt;

/// Scanning errors.
///
/// Raised while turning source text into tokens: unexpected characters and
/// strings that are never closed. Scanning continues past both.
pub mod scan_error;
/// Parsing errors.
///
/// Raised when the parser expects a particular token and finds another, or
/// finds no expression where one is required.
pub mod parse_error;
/// Evaluation diagnostics.
///
/// Raised while executing a program: type mismatches in operators and
/// references to variables that were never declared. None of these stop the
/// run; the offending expression evaluates to `nil`.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use scan_error::ScanError;

/// Any diagnostic produced by the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A problem found while scanning.
    Scan(ScanError),
    /// A problem found while parsing.
    Parse(ParseError),
    /// A problem found while evaluating.
    Runtime(RuntimeError),
}

impl Diagnostic {
    /// Returns `true` for diagnostics that prevent a program from running.
    #[must_use]
    pub const fn is_static(&self) -> bool {
        matches!(self, Self::Scan(_) | Self::Parse(_))
    }
}

impl From<ScanError> for Diagnostic {
    fn from(error: ScanError) -> Self {
        Self::Scan(error)
    }
}

impl From<ParseError> for Diagnostic {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Diagnostic {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scan(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Diagnostic {}
