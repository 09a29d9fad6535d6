#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents everything that can go wrong while evaluating.
///
/// These are reported, never raised: the expression that caused one evaluates
/// to `nil` and execution continues.
pub enum RuntimeError {
    /// Read of a variable that is not bound in any enclosing scope.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assignment to a variable that is not bound in any enclosing scope.
    /// The assignment is dropped.
    UndefinedAssignment {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A unary operator was applied to a value that is not a number.
    OperandMustBeNumber {
        /// The operator lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A numeric binary operator was applied to a value that is not a number.
    OperandsMustBeNumbers {
        /// The operator lexeme.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `+` was applied to something other than two numbers or two strings.
    InvalidPlusOperands {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "error on line {line} at \"{name}\": Undefined variable '{name}'.")
            },
            Self::UndefinedAssignment { name, line } => write!(f,
                                                               "error on line {line} at \"{name}\": Cannot assign to undefined variable '{name}'."),
            Self::OperandMustBeNumber { operator, line } => {
                write!(f, "error on line {line} at \"{operator}\": Operand must be a number.")
            },
            Self::OperandsMustBeNumbers { operator, line } => {
                write!(f, "error on line {line} at \"{operator}\": Operands must be numbers.")
            },
            Self::InvalidPlusOperands { line } => write!(f,
                                                         "error on line {line} at \"+\": Operands must be two numbers or two strings."),
        }
    }
}

impl std::error::Error for RuntimeError {}
