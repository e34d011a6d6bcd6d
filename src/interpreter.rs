/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators, keywords, and delimiters, with
/// the source position of every token. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location (line and column).
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;

/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions. This enables the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Supports declarations, control flow, function definitions, calls, and
///   the full operator precedence hierarchy.
pub mod parser;

/// The value module defines the runtime data types for evaluation.
///
/// Declares all the value types used during execution — integers, floats,
/// strings, booleans, the unit value, and function values — together with
/// tag queries, checked numeric widening, and the rendering rules used by
/// `print`.
pub mod value;

/// The environment module implements the lexical scope chain.
///
/// A scope maps identifiers to binding slots (value plus mutability flag)
/// and links to its parent. Scopes are shared so function values can keep
/// their captured environment alive after the declaring block ends.
pub mod env;

/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// manages call frames and scopes, enforces type annotations and
/// immutability, and produces program output. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, closures, and control flow.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
