/// Syntax errors.
///
/// Defines all error types that can occur while lexing or parsing source
/// code: unrecognized characters, unterminated strings, unexpected tokens,
/// and premature end of input. Every variant carries a line and column.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unbound names, type mismatches, immutability violations, arity mismatches,
/// and division by zero.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;
