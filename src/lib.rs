//! # pyrustlang
//!
//! pyrustlang is a small statically-annotated, dynamically-checked
//! scripting language interpreter written in Rust. It lexes, parses, and
//! tree-walks programs with immutable-by-default bindings, declaration-site
//! type annotations, lexically-scoped closures, and uniform floating-point
//! division.

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
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Stmt,
    error::SyntaxError,
    interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::statement::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Stmt` and `Expr` enums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source positions to AST nodes for error reporting.
/// - Defines the declaration-site type annotations.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, environments, and error handling to provide a complete
/// runtime for source code execution.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, value types,
///   and the scope chain.
/// - Provides the building blocks behind [`parse_source`] and
///   [`run_source`].
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive read-eval-print loop.
///
/// Runs a line-oriented session against a persistent interpreter: each line
/// is a complete statement or expression, expression values are echoed, and
/// errors return to the prompt without losing earlier bindings.
pub mod repl;
/// General utilities for safe numeric conversion.
///
/// Reusable helpers used throughout the evaluator, mainly lossless
/// integer-to-float widening.
pub mod util;

/// Parses a source text into a program.
///
/// Runs the lexer and the parser, returning the statement list ready for
/// evaluation. No code is executed.
///
/// # Errors
/// Returns the first [`SyntaxError`] encountered, with the line and column
/// of the offending input.
///
/// # Examples
/// ```
/// let program = pyrustlang::parse_source("let x = 1\nprint(x)").unwrap();
/// assert_eq!(program.len(), 2);
///
/// // A missing initializer is fatal to the parse.
/// assert!(pyrustlang::parse_source("let x =").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Vec<Stmt>, SyntaxError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    parse_program(&mut iter)
}

/// Parses and runs a complete program, writing output to `out`.
///
/// This is the file-mode entry point: the whole pipeline runs against a
/// fresh interpreter, and the first error of any phase aborts the run.
///
/// # Errors
/// Returns an error if parsing fails or a runtime error occurs. Output
/// produced before the failure has already been written to `out`.
///
/// # Examples
/// ```
/// use pyrustlang::run_source;
///
/// let mut out = Vec::new();
/// run_source("print(\"Hello, World!\")", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Hello, World!\n");
///
/// // Example with an intentional error (unknown variable).
/// let mut out = Vec::new();
/// assert!(run_source("let y = x + 1", &mut out).is_err());
/// ```
pub fn run_source(source: &str, out: &mut dyn Write) -> Result<(), Box<dyn std::error::Error>> {
    let statements = parse_source(source)?;

    let mut interpreter = Interpreter::new(out);
    interpreter.run(&statements)?;

    Ok(())
}
