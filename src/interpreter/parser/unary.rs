use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Position},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{NO_POSITION, ParseResult, parse_expression},
            utils::{expect_token, parse_comma_separated},
        },
    },
};

/// Parses a unary-minus expression, or falls through to a primary.
///
/// The operator table has no unary minus; a leading `-` is accepted on this
/// level and desugared to subtraction from zero, so `-x` evaluates exactly
/// like `0 - x`. The operator nests (`--x` is `0 - (0 - x)`) and binds
/// tighter than multiplication: `2 * -3` is `2 * (0 - 3)`.
///
/// Grammar: `unary := "-" unary | primary`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// The parsed expression node.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    if let Some((Token::Minus, pos)) = tokens.peek() {
        let pos = *pos;
        tokens.next();

        let operand = parse_unary(tokens)?;
        return Ok(Expr::Binary { op:  BinaryOperator::Sub,
                                 lhs: Box::new(Expr::IntLit { value: 0, pos }),
                                 rhs: Box::new(operand),
                                 pos, });
    }

    parse_primary(tokens)
}

/// Parses a primary expression.
///
/// Primaries are the leaves of the precedence hierarchy:
/// - literals (integer, float, string, boolean),
/// - names,
/// - function calls (a name directly followed by `(`),
/// - parenthesized expressions, which are elided after parsing since they
///   only affect precedence.
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns a `SyntaxError` when the next token cannot begin an expression or
/// the input ends.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(value), pos)) => Ok(Expr::IntLit { value: *value,
                                                                pos:   *pos, }),
        Some((Token::Float(value), pos)) => Ok(Expr::FloatLit { value: *value,
                                                                pos:   *pos, }),
        Some((Token::Str(value), pos)) => Ok(Expr::StringLit { value: value.clone(),
                                                               pos:   *pos, }),
        Some((Token::Bool(value), pos)) => Ok(Expr::BoolLit { value: *value,
                                                              pos:   *pos, }),

        Some((Token::Identifier(name), pos)) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                return parse_call(tokens, name.clone(), *pos);
            }
            Ok(Expr::Name { name: name.clone(),
                            pos:  *pos, })
        },

        Some((Token::LParen, pos)) => {
            let inner = parse_expression(tokens)?;
            expect_token(tokens, &Token::RParen, "')'", *pos)?;
            Ok(inner)
        },

        Some((token, pos)) => {
            Err(SyntaxError::UnexpectedToken { expected: "an expression".to_string(),
                                               found:    token.to_string(),
                                               line:     pos.line,
                                               column:   pos.column, })
        },

        None => {
            Err(SyntaxError::UnexpectedEndOfInput { expected: "an expression".to_string(),
                                                    line:     NO_POSITION.line,
                                                    column:   NO_POSITION.column, })
        },
    }
}

/// Parses the argument list of a function call.
///
/// The callee name is already consumed; the stream is positioned at the
/// opening `(`. Arguments are full expressions separated by commas.
///
/// Grammar: `call := identifier "(" (expression ("," expression)*)? ")"`
fn parse_call<'a, I>(tokens: &mut Peekable<I>, callee: String, pos: Position) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    expect_token(tokens, &Token::LParen, "'('", pos)?;
    let args = parse_comma_separated(tokens, parse_expression, &Token::RParen, pos)?;

    Ok(Expr::Call { callee, args, pos })
}
