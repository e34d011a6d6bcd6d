use std::iter::Peekable;

use crate::{
    ast::{FunctionDecl, Param, Position, Stmt},
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{NO_POSITION, ParseResult, parse_expression},
            utils::{
                expect_token, parse_comma_separated, parse_identifier, parse_type_tag,
                peek_position, skip_separators,
            },
        },
    },
};

/// Parses a whole program: statements until the end of input.
///
/// Soft separators (newlines and semicolons) between statements are
/// skipped. An empty source yields an empty statement list.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// The program's statements in source order.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Stmt>>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_separators(tokens);
        if tokens.peek().is_none() {
            break;
        }
        statements.push(parse_statement(tokens)?);
    }

    Ok(statements)
}

/// Parses a single statement.
///
/// Dispatch is on the current token:
/// - `let` → declaration,
/// - `fn` → function definition,
/// - `if` / `while` → control flow,
/// - `return` / `print` → their statement forms,
/// - `{` → a bare block,
/// - an identifier directly followed by `=` → reassignment,
/// - anything else that can begin an expression → expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, Position)` pairs.
///
/// # Returns
/// A parsed [`Stmt`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    match tokens.peek() {
        Some((Token::Let, pos)) => {
            let pos = *pos;
            tokens.next();
            parse_let(tokens, pos)
        },
        Some((Token::Fn, pos)) => {
            let pos = *pos;
            tokens.next();
            parse_function(tokens, pos)
        },
        Some((Token::If, pos)) => {
            let pos = *pos;
            tokens.next();
            parse_if(tokens, pos)
        },
        Some((Token::While, pos)) => {
            let pos = *pos;
            tokens.next();
            parse_while(tokens, pos)
        },
        Some((Token::Return, pos)) => {
            let pos = *pos;
            tokens.next();
            parse_return(tokens, pos)
        },
        Some((Token::Print, pos)) => {
            let pos = *pos;
            tokens.next();
            parse_print(tokens, pos)
        },
        Some((Token::LBrace, pos)) => {
            let pos = *pos;
            tokens.next();
            let body = parse_block(tokens, pos)?;
            Ok(Stmt::Block { body, pos })
        },
        Some((Token::Identifier(_), _)) => {
            let mut lookahead = tokens.clone();
            lookahead.next();
            if let Some((Token::Assign, _)) = lookahead.peek() {
                parse_assignment(tokens)
            } else {
                parse_expression_statement(tokens)
            }
        },
        Some(_) => parse_expression_statement(tokens),
        None => {
            Err(SyntaxError::UnexpectedEndOfInput { expected: "a statement".to_string(),
                                                    line:     NO_POSITION.line,
                                                    column:   NO_POSITION.column, })
        },
    }
}

/// Parses a `let` declaration after the consumed keyword.
///
/// Form: `let [mut] <identifier> [":" <type>] "=" <expression>`
///
/// The `mut` marker and the type annotation are optional; the `=` and the
/// initializer are required.
///
/// # Errors
/// Returns a `SyntaxError` if the name, the `=`, or the initializer is
/// missing or malformed.
fn parse_let<'a, I>(tokens: &mut Peekable<I>, pos: Position) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let mutable = if let Some((Token::Mut, _)) = tokens.peek() {
        tokens.next();
        true
    } else {
        false
    };

    let (name, name_pos) = parse_identifier(tokens, pos)?;

    let declared_type = if let Some((Token::Colon, _)) = tokens.peek() {
        tokens.next();
        Some(parse_type_tag(tokens, name_pos)?)
    } else {
        None
    };

    expect_token(tokens, &Token::Assign, "'='", pos)?;
    let initializer = parse_expression(tokens)?;

    Ok(Stmt::Let { name,
                   mutable,
                   declared_type,
                   initializer,
                   pos })
}

/// Parses a function definition after the consumed `fn` keyword.
///
/// Form: `fn <name> "(" (<param> ":" <type>),* ")" ["->" <type>] "{" body
/// "}"`
///
/// Parameter types are mandatory; the return type is optional.
///
/// # Errors
/// Returns a `SyntaxError` on a malformed parameter list, a missing arrow
/// type, or an unterminated body.
fn parse_function<'a, I>(tokens: &mut Peekable<I>, pos: Position) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let (name, _) = parse_identifier(tokens, pos)?;

    expect_token(tokens, &Token::LParen, "'('", pos)?;
    let params =
        parse_comma_separated(tokens, |t| parse_parameter(t, pos), &Token::RParen, pos)?;

    let return_type = if let Some((Token::Arrow, _)) = tokens.peek() {
        tokens.next();
        Some(parse_type_tag(tokens, pos)?)
    } else {
        None
    };

    let brace = expect_token(tokens, &Token::LBrace, "'{'", pos)?;
    let body = parse_block(tokens, brace)?;

    Ok(Stmt::Function(FunctionDecl { name,
                                     params,
                                     return_type,
                                     body,
                                     pos }))
}

/// Parses one `name: type` parameter.
fn parse_parameter<'a, I>(tokens: &mut Peekable<I>, fallback: Position) -> ParseResult<Param>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let (name, pos) = parse_identifier(tokens, fallback)?;
    expect_token(tokens, &Token::Colon, "':'", pos)?;
    let type_tag = parse_type_tag(tokens, pos)?;

    Ok(Param { name, type_tag })
}

/// Parses an `if` statement after the consumed keyword.
///
/// Form: `if <condition> "{" body "}" ["else" "{" body "}"]`
///
/// The condition needs no parentheses. The `else` keyword may sit on the
/// line after the closing brace; it always takes a braced block.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, pos: Position) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let condition = parse_expression(tokens)?;

    let brace = expect_token(tokens, &Token::LBrace, "'{'", pos)?;
    let then_body = parse_block(tokens, brace)?;

    skip_separators(tokens);
    let else_body = if let Some((Token::Else, else_pos)) = tokens.peek() {
        let else_pos = *else_pos;
        tokens.next();

        let brace = expect_token(tokens, &Token::LBrace, "'{'", else_pos)?;
        Some(parse_block(tokens, brace)?)
    } else {
        None
    };

    Ok(Stmt::If { condition,
                  then_body,
                  else_body,
                  pos })
}

/// Parses a `while` loop after the consumed keyword.
///
/// Form: `while <condition> "{" body "}"`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, pos: Position) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let condition = parse_expression(tokens)?;

    let brace = expect_token(tokens, &Token::LBrace, "'{'", pos)?;
    let body = parse_block(tokens, brace)?;

    Ok(Stmt::While { condition, body, pos })
}

/// Parses a `return` statement after the consumed keyword.
///
/// The return value is optional: a bare `return` is recognized when the next
/// token is a statement separator, closes the enclosing block, or ends the
/// input.
fn parse_return<'a, I>(tokens: &mut Peekable<I>, pos: Position) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let value = match tokens.peek() {
        None | Some((Token::NewLine | Token::Semicolon | Token::RBrace, _)) => None,
        Some(_) => Some(parse_expression(tokens)?),
    };

    Ok(Stmt::Return { value, pos })
}

/// Parses a `print` statement after the consumed keyword.
///
/// Form: `print "(" <expression> ")"`
fn parse_print<'a, I>(tokens: &mut Peekable<I>, pos: Position) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    expect_token(tokens, &Token::LParen, "'('", pos)?;
    let value = parse_expression(tokens)?;
    expect_token(tokens, &Token::RParen, "')'", pos)?;

    Ok(Stmt::Print { value, pos })
}

/// Parses a reassignment: `<identifier> "=" <expression>`.
///
/// Only reached when the lookahead saw the `=`; whether the name exists and
/// may be reassigned is decided at evaluation time.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let (name, pos) = parse_identifier(tokens, NO_POSITION)?;
    expect_token(tokens, &Token::Assign, "'='", pos)?;
    let value = parse_expression(tokens)?;

    Ok(Stmt::Assign { name, value, pos })
}

/// Parses a bare expression used as a statement.
///
/// The value is discarded in file mode; the REPL echoes it.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a (Token, Position)> + Clone
{
    let pos = peek_position(tokens);
    let expr = parse_expression(tokens)?;

    Ok(Stmt::Expression { expr, pos })
}
