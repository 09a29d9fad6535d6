/// The runtime value type.
///
/// Defines `Value`, the result of evaluating any expression, together with
/// the truthiness rule and the rendering used by `print`.
pub mod core;
