/// Expression parsing entry point and shared result alias.
///
/// Declares the `ParseResult` type used by every parsing routine and the
/// top-level `parse_expression` function that begins the precedence descent.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence-climbing chain for all binary operators:
/// equality, comparison, additive, and multiplicative levels.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles unary minus and the primaries: literals, names, calls, and
/// parenthesized expressions.
pub mod unary;

/// Block parsing.
///
/// Parses brace-delimited statement lists, skipping soft separators between
/// statements.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the leading token and parses each statement form:
/// declarations, assignments, function definitions, control flow, `return`,
/// `print`, and expression statements.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides shared token-stream helpers: expecting specific tokens, parsing
/// identifiers and type annotations, comma-separated lists, and separator
/// skipping.
pub mod utils;
