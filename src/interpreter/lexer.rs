use logos::Logos;

use crate::{
    ast::{Position, TypeTag},
    error::SyntaxError,
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, delimited by `"` or `'`. Escape sequences are
    /// resolved while lexing; the payload is the final contents.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, parse_string)]
    #[regex(r"'([^'\\\n]|\\[^\n])*'", parse_string)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// `let`
    #[token("let")]
    Let,
    /// `mut`
    #[token("mut")]
    Mut,
    /// `fn`
    #[token("fn")]
    Fn,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `return`
    #[token("return")]
    Return,
    /// `print`
    #[token("print")]
    Print,
    /// A type annotation keyword: `i32`, `f64`, `str` or `bool`.
    #[token("i32", |_| TypeTag::Int32)]
    #[token("f64", |_| TypeTag::Float64)]
    #[token("str", |_| TypeTag::Str)]
    #[token("bool", |_| TypeTag::Bool)]
    Type(TypeTag),
    /// Identifier tokens; variable or function names such as `x` or `fib`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `->`
    #[token("->")]
    Arrow,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// `;` — a soft statement separator, interchangeable with a newline.
    #[token(";")]
    Semicolon,
    /// End of line — also a soft statement separator.
    #[token("\n", newline_callback)]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset at which that line
/// starts, so that each token's column can be derived from its span.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// Advances the line counter when a newline token is produced.
fn newline_callback(lex: &mut logos::Lexer<Token>) {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// Returns `None` when the digit run does not fit an `i64`, which surfaces
/// as a "literal too large" lex error.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Parses a boolean literal from the current token slice (`true` or
/// `false`).
fn parse_bool(lex: &mut logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
/// Resolves the escape sequences of a string literal slice.
///
/// The surrounding quotes are stripped. `\n` and `\t` become their control
/// characters; any other escaped character (including `\\`, `\"` and `\'`)
/// is kept literally.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];

    let mut contents = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => contents.push('\n'),
                Some('t') => contents.push('\t'),
                Some(other) => contents.push(other),
                None => {},
            }
        } else {
            contents.push(c);
        }
    }

    contents
}

/// Tokenizes a complete source text.
///
/// Produces the token sequence in source order, each token paired with the
/// position of its first character. Whitespace and comments are skipped;
/// newlines and semicolons are kept as soft statement separators.
///
/// # Errors
/// Returns a [`SyntaxError`] for the first byte that starts no valid token,
/// for a string literal that does not close on its line, and for an integer
/// literal that does not fit the integer value type.
///
/// # Example
/// ```
/// use pyrustlang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("let x = 1").unwrap();
///
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[0].0, Token::Let);
/// assert_eq!(tokens[3].0, Token::Integer(1));
/// assert_eq!(tokens[3].1.column, 9);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Position)>, SyntaxError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1, line_start: 0 });
    let mut tokens = Vec::new();

    while let Some(item) = lexer.next() {
        let span = lexer.span();
        let position = Position { line:   lexer.extras.line,
                                  column: span.start.saturating_sub(lexer.extras.line_start) + 1, };

        match item {
            Ok(token) => tokens.push((token, position)),
            Err(()) => return Err(classify_error(lexer.slice(), position)),
        }
    }

    Ok(tokens)
}

/// Maps an unlexable slice to the matching diagnostic.
///
/// A slice starting with a quote is an unterminated string; one starting
/// with a digit is an integer literal that overflowed its value type;
/// anything else is an unexpected character.
fn classify_error(slice: &str, position: Position) -> SyntaxError {
    match slice.chars().next() {
        Some('"' | '\'') => SyntaxError::UnterminatedString { line:   position.line,
                                                             column: position.column, },
        Some(c) if c.is_ascii_digit() => SyntaxError::LiteralTooLarge { line:   position.line,
                                                                       column: position.column, },
        Some(found) => SyntaxError::UnexpectedCharacter { found,
                                                          line: position.line,
                                                          column: position.column },
        None => SyntaxError::UnexpectedEndOfInput { expected: "a token".to_string(),
                                                    line:     position.line,
                                                    column:   position.column, },
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(_) => write!(f, "float literal"),
            Self::Integer(_) => write!(f, "integer literal"),
            Self::Str(_) => write!(f, "string literal"),
            Self::Bool(b) => write!(f, "'{b}'"),
            Self::Let => write!(f, "'let'"),
            Self::Mut => write!(f, "'mut'"),
            Self::Fn => write!(f, "'fn'"),
            Self::If => write!(f, "'if'"),
            Self::Else => write!(f, "'else'"),
            Self::While => write!(f, "'while'"),
            Self::Return => write!(f, "'return'"),
            Self::Print => write!(f, "'print'"),
            Self::Type(tag) => write!(f, "'{tag}'"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Comment => write!(f, "comment"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::LessEqual => write!(f, "'<='"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::Arrow => write!(f, "'->'"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::Assign => write!(f, "'='"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::Colon => write!(f, "':'"),
            Self::Comma => write!(f, "','"),
            Self::Semicolon => write!(f, "';'"),
            Self::NewLine => write!(f, "end of line"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}
