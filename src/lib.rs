//! # treelox
//!
//! treelox is a tree-walking interpreter for a small Lox-style scripting
//! language. Source text is scanned into tokens, parsed into a syntax tree
//! and evaluated directly, with block-scoped variables, `print`, and `while`
//! loops over numbers, strings, booleans and `nil`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use log::debug;

use crate::{
    error::Diagnostic,
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps the tokens needed for error reporting on the nodes.
/// - Renders trees as s-expressions for debugging.
pub mod ast;
/// Provides error types for scanning, parsing, and evaluation.
///
/// Every diagnostic renders as `error on line <N> at "<lexeme>": <message>`.
///
/// # Responsibilities
/// - Defines one error type per phase.
/// - Wraps them in a single `Diagnostic` for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scoping, values and
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment and
///   evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Scans, parses and runs `source` on `interpreter`.
///
/// The program only runs when scanning and parsing produced no diagnostics.
/// Otherwise the scan and parse diagnostics are returned and nothing is
/// executed. Bindings made by the program stay in the interpreter's
/// environment for later calls.
///
/// # Returns
/// All diagnostics in the order they were produced: scan, parse, then
/// evaluation.
///
/// # Errors
/// Returns an error if writing `print` output fails.
///
/// # Examples
/// ```
/// use treelox::{interpreter::evaluator::core::Interpreter, run};
///
/// let mut interpreter = Interpreter::new(Vec::new());
/// run("var greeting = \"hi\";", &mut interpreter).unwrap();
/// let diagnostics = run("print greeting;", &mut interpreter).unwrap();
///
/// assert!(diagnostics.is_empty());
/// assert_eq!(interpreter.output(), b"hi\n");
///
/// // A syntax error stops the program before anything runs.
/// let diagnostics = run("print 1; print 2", &mut interpreter).unwrap();
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(interpreter.output(), b"hi\n");
/// ```
pub fn run<W: Write>(source: &str, interpreter: &mut Interpreter<W>) -> io::Result<Vec<Diagnostic>> {
    let (tokens, scan_errors) = scan(source);
    let (statements, parse_errors) = parse(&tokens);

    let mut diagnostics: Vec<Diagnostic> = scan_errors.into_iter()
                                                      .map(Diagnostic::from)
                                                      .chain(parse_errors.into_iter().map(Diagnostic::from))
                                                      .collect();
    if !diagnostics.is_empty() {
        debug!("not running: {} static diagnostics", diagnostics.len());
        return Ok(diagnostics);
    }

    interpreter.interpret(&statements)?;
    diagnostics.extend(interpreter.take_diagnostics().into_iter().map(Diagnostic::from));

    Ok(diagnostics)
}

/// Runs `source` on a fresh interpreter and captures what it prints.
///
/// # Errors
/// Returns an error only if writing to the in-memory buffer fails.
///
/// # Examples
/// ```
/// use treelox::run_to_string;
///
/// let (output, diagnostics) =
///     run_to_string("var i = 0; while (i < 3) { print i; i = i + 1; }").unwrap();
///
/// assert_eq!(output, "0\n1\n2\n");
/// assert!(diagnostics.is_empty());
/// ```
pub fn run_to_string(source: &str) -> io::Result<(String, Vec<Diagnostic>)> {
    let mut interpreter = Interpreter::new(Vec::new());
    let diagnostics = run(source, &mut interpreter)?;
    let output = String::from_utf8_lossy(&interpreter.into_output()).into_owned();
    Ok((output, diagnostics))
}
