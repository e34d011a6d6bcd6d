use std::iter::Peekable;

use crate::{
    ast::{Expr, Position},
    error::SyntaxError,
    interpreter::{lexer::Token, parser::binary::parse_equality},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// The position reported when the parser has no better anchor, e.g. when the
/// token stream is empty from the start.
pub(in crate::interpreter::parser) const NO_POSITION: Position = Position { line: 0, column: 0 };

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, equality, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := equality`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Position)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    parse_equality(tokens)
}
