#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum SyntaxError {
    /// A byte that starts no valid token.
    UnexpectedCharacter {
        /// The offending character.
        found:  char,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A string literal without a closing quote on its line.
    UnterminatedString {
        /// The line of the opening quote.
        line:   usize,
        /// The column of the opening quote.
        column: usize,
    },
    /// An integer literal too large to represent.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Found a token other than the one the grammar requires.
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// A description of the token actually found.
        found:    String,
        /// The source line of the offending token.
        line:     usize,
        /// The source column of the offending token.
        column:   usize,
    },
    /// Reached the end of input while a construct was still open.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// The line of the enclosing construct.
        line:     usize,
        /// The column of the enclosing construct.
        column:   usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, line, column } => {
                write!(f, "Error: Line {line}, Column {column}: Unexpected character: {found}")
            },

            Self::UnterminatedString { line, column } => {
                write!(f, "Error: Line {line}, Column {column}: Unterminated string literal.")
            },

            Self::LiteralTooLarge { line, column } => {
                write!(f, "Error: Line {line}, Column {column}: Integer literal is too large.")
            },

            Self::UnexpectedToken { expected,
                                    found,
                                    line,
                                    column, } => {
                write!(f, "Error: Line {line}, Column {column}: Expected {expected}, found {found}")
            },

            Self::UnexpectedEndOfInput { expected, line, column } => write!(f,
                                                                            "Error: Line {line}, Column {column}: Expected {expected}, found end of input"),
        }
    }
}

impl std::error::Error for SyntaxError {}
