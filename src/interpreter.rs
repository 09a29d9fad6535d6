/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (scanner) reads the raw source text and produces an ordered
/// list of tokens, each classified by kind and tagged with its source line.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input text into tokens with kind, lexeme, literal value and
///   line.
/// - Handles number and string literals, identifiers, keywords and operators.
/// - Reports lexical errors for invalid input and keeps going.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one method per precedence level. Errors
/// are recorded and parsing continues from the point of detection.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Enforces operator precedence and associativity.
/// - Reports syntax errors with line and lexeme.
pub mod parser;
/// Variable scopes.
///
/// The environment is the chain of scopes searched when a variable is read
/// or assigned. Blocks add a scope for the duration of their execution.
pub mod environment;
/// The evaluator module executes AST nodes.
///
/// The evaluator walks the syntax tree, executing statements and evaluating
/// expressions against the current environment.
///
/// # Responsibilities
/// - Evaluates every expression and statement variant.
/// - Manages block scopes.
/// - Records evaluation diagnostics without stopping the run.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum.
/// - Implements truthiness and the rendering used by `print`.
pub mod value;
