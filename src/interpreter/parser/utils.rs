use std::iter::Peekable;

use crate::{
    ast::{Position, TypeTag},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::core::{NO_POSITION, ParseResult},
    },
};

/// Skips soft statement separators: newlines and semicolons.
///
/// The grammar is newline-insensitive between statements; this helper is
/// called wherever a statement boundary may occur.
pub(in crate::interpreter::parser) fn skip_separators<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, Position)>
{
    while let Some((Token::NewLine | Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Consumes the next token, requiring it to equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the required token.
/// - `expected`: The exact token the grammar requires here.
/// - `what`: Human-readable description used in the diagnostic.
/// - `fallback`: Position reported when the input ends instead.
///
/// # Returns
/// The position of the consumed token.
///
/// # Errors
/// Returns a `SyntaxError` naming `what` if a different token or the end of
/// input is found.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token,
                                                          what: &str,
                                                          fallback: Position)
                                                          -> ParseResult<Position>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((token, pos)) if token == expected => Ok(*pos),
        Some((token, pos)) => {
            Err(SyntaxError::UnexpectedToken { expected: what.to_string(),
                                               found:    token.to_string(),
                                               line:     pos.line,
                                               column:   pos.column, })
        },
        None => {
            Err(SyntaxError::UnexpectedEndOfInput { expected: what.to_string(),
                                                    line:     fallback.line,
                                                    column:   fallback.column, })
        },
    }
}

/// Parses a plain identifier and returns its name and position.
///
/// The next token must be `Token::Identifier`.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              fallback: Position)
                                                              -> ParseResult<(String, Position)>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Identifier(name), pos)) => Ok((name.clone(), *pos)),
        Some((token, pos)) => {
            Err(SyntaxError::UnexpectedToken { expected: "an identifier".to_string(),
                                               found:    token.to_string(),
                                               line:     pos.line,
                                               column:   pos.column, })
        },
        None => {
            Err(SyntaxError::UnexpectedEndOfInput { expected: "an identifier".to_string(),
                                                    line:     fallback.line,
                                                    column:   fallback.column, })
        },
    }
}

/// Parses a type annotation keyword (`i32`, `f64`, `str` or `bool`).
///
/// # Errors
/// Returns a `SyntaxError` if the next token is not a type keyword or the
/// input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_type_tag<'a, I>(tokens: &mut Peekable<I>,
                                                            fallback: Position)
                                                            -> ParseResult<TypeTag>
    where I: Iterator<Item = &'a (Token, Position)>
{
    match tokens.next() {
        Some((Token::Type(tag), _)) => Ok(*tag),
        Some((token, pos)) => {
            Err(SyntaxError::UnexpectedToken { expected: "a type annotation".to_string(),
                                               found:    token.to_string(),
                                               line:     pos.line,
                                               column:   pos.column, })
        },
        None => {
            Err(SyntaxError::UnexpectedEndOfInput { expected: "a type annotation".to_string(),
                                                    line:     fallback.line,
                                                    column:   fallback.column, })
        },
    }
}

/// Parses a comma-separated list of items, consuming the closing token.
///
/// This utility is shared by parameter lists and argument lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either a
/// comma to continue the list or the closing token to end it. An immediately
/// encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g. `)`).
/// - `fallback`: Position reported when the input ends inside the list.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `SyntaxError` if:
/// - an item fails to parse,
/// - something other than `,` or the closing token follows an item,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    fallback: Position)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut items = Vec::new();
    if let Some((token, _)) = tokens.peek()
       && *token == *closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((token, _)) if *token == *closing => {
                tokens.next();
                break;
            },
            Some((token, pos)) => {
                return Err(SyntaxError::UnexpectedToken { expected:
                                                              format!("',' or {closing}"),
                                                          found:    token.to_string(),
                                                          line:     pos.line,
                                                          column:   pos.column, });
            },
            None => {
                return Err(SyntaxError::UnexpectedEndOfInput { expected: closing.to_string(),
                                                               line:     fallback.line,
                                                               column:   fallback.column, });
            },
        }
    }
    Ok(items)
}

/// Copies the position of the next token, or `NO_POSITION` at end of input.
pub(in crate::interpreter::parser) fn peek_position<'a, I>(tokens: &mut Peekable<I>) -> Position
    where I: Iterator<Item = &'a (Token, Position)>
{
    tokens.peek().map_or(NO_POSITION, |(_, pos)| *pos)
}
