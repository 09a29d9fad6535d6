/// Interpreter state and statement/expression dispatch.
///
/// Contains the `Interpreter` type, the per-variant dispatch for statements
/// and expressions, and the diagnostics it collects.
pub mod core;

/// Block execution.
///
/// Runs the statements of a block in a fresh scope and guarantees the scope
/// is discarded again on every exit path.
pub mod block;

/// Unary operator evaluation.
///
/// Implements logical NOT and numeric negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic, exponentiation, string concatenation, comparisons
/// and equality.
pub mod binary;
