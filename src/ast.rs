use crate::interpreter::lexer::{Literal, Token};

/// S-expression rendering of the syntax tree.
///
/// Implements `Display` for [`Expr`] and [`Stmt`], producing a fully
/// parenthesized prefix form such as `(* (- 3) (group 47.56))`. Used by the
/// `--ast` flag and as a test oracle for operator precedence.
pub mod printer;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constants that can appear directly in source
/// code: numbers, strings, `true`, `false` and `nil`.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A string literal, without its quotes.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// The `nil` literal.
    Nil,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<Literal> for LiteralValue {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Number(n) => Self::Number(n),
            Literal::Str(s) => Self::Str(s),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node owns its children exclusively; the tree has no sharing and no
/// cycles. Nodes that need a source position for diagnostics keep the token
/// they were built from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Assignment to an existing variable, e.g. `x = 1`. Evaluates to the
    /// assigned value.
    Assign {
        /// The variable being assigned.
        name:  Token,
        /// The value expression.
        value: Box<Self>,
    },
    /// A binary operation (addition, comparison, etc.).
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// A parenthesized expression.
    Grouping {
        /// The expression inside the parentheses.
        inner: Box<Self>,
    },
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A prefix operation, `-x` or `!x`.
    Unary {
        /// The operator token.
        operator: Token,
        /// The operand expression.
        right:    Box<Self>,
    },
    /// Reference to a variable by name.
    Variable {
        /// The identifier token.
        name: Token,
    },
}

impl Expr {
    /// Builds a literal node.
    ///
    /// ## Example
    /// ```
    /// use treelox::ast::{Expr, LiteralValue};
    ///
    /// assert_eq!(Expr::literal(2.0),
    ///            Expr::Literal { value: LiteralValue::Number(2.0) });
    /// ```
    #[must_use]
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal { value: value.into() }
    }

    /// The `nil` literal, also used by the parser as the placeholder for a
    /// missing expression.
    #[must_use]
    pub const fn nil() -> Self {
        Self::Literal { value: LiteralValue::Nil }
    }
}

/// Represents a statement.
///
/// A program is an ordered list of statements. `Block` and `While` own their
/// nested statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A braced list of statements executed in a fresh scope.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
    },
    /// An expression evaluated for its side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// `print <expr>;`
    Print {
        /// The expression whose value is printed.
        expr: Expr,
    },
    /// A variable declaration using `var`.
    VarDecl {
        /// The name of the variable.
        name:        Token,
        /// The initial value. The variable is `nil` without one.
        initializer: Option<Expr>,
    },
    /// `while (<condition>) <body>`
    While {
        /// The loop condition, tested for truthiness before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
    },
}
