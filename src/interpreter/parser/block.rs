use std::iter::Peekable;

use crate::{
    ast::{Position, Stmt},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::skip_separators},
    },
};

/// Parses a brace-delimited statement block.
///
/// The opening `{` is already consumed. A block consists of zero or more
/// statements separated by newlines or semicolons; parsing continues until
/// the closing `}`.
///
/// Grammar: `block := statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `pos`: Position of the opening brace, reported if the block never
///   closes.
///
/// # Returns
/// The statements of the block, in source order.
///
/// # Errors
/// Returns a `SyntaxError` if a statement fails to parse or the input ends
/// before the closing brace.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, pos: Position) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_separators(tokens);

        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => {
                return Err(SyntaxError::UnexpectedEndOfInput { expected: "'}'".to_string(),
                                                               line:     pos.line,
                                                               column:   pos.column, });
            },
        }
    }

    Ok(statements)
}
