/// A location in the source text.
///
/// Both fields are 1-based. Positions are attached to every token by the
/// lexer and carried on every AST node so that diagnostics can point at the
/// offending construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// The source line.
    pub line:   usize,
    /// The column of the first character.
    pub column: usize,
}

/// A declaration-site type annotation.
///
/// Annotations are checked once, against the runtime tag of the value being
/// bound (or passed, or returned). They never cause a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTag {
    /// `i32` — integer values.
    Int32,
    /// `f64` — floating-point values.
    Float64,
    /// `str` — string values.
    Str,
    /// `bool` — boolean values.
    Bool,
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int32 => "i32",
            Self::Float64 => "f64",
            Self::Str => "str",
            Self::Bool => "bool",
        };
        write!(f, "{name}")
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`); also string concatenation.
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`); always produces a float.
    Div,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Each variant models a distinct syntactic construct and carries the source
/// position of the token that introduced it. Parenthesized groups are not
/// represented; parentheses only influence how the tree is built.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal such as `42`.
    IntLit {
        /// The literal value.
        value: i64,
        /// Source position of the literal.
        pos:   Position,
    },
    /// A floating-point literal such as `3.14`.
    FloatLit {
        /// The literal value.
        value: f64,
        /// Source position of the literal.
        pos:   Position,
    },
    /// A string literal, with escape sequences already resolved.
    StringLit {
        /// The literal contents.
        value: String,
        /// Source position of the opening quote.
        pos:   Position,
    },
    /// A boolean literal: `true` or `false`.
    BoolLit {
        /// The literal value.
        value: bool,
        /// Source position of the literal.
        pos:   Position,
    },
    /// Reference to a binding by name.
    Name {
        /// The referenced name.
        name: String,
        /// Source position of the name.
        pos:  Position,
    },
    /// A binary operation (arithmetic, comparison, or equality).
    Binary {
        /// The operator.
        op:  BinaryOperator,
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
        /// Source position of the operator.
        pos: Position,
    },
    /// A function call expression, e.g. `fib(10)`.
    Call {
        /// Name of the called function.
        callee: String,
        /// Argument expressions, evaluated left to right.
        args:   Vec<Self>,
        /// Source position of the callee name.
        pos:    Position,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    ///
    /// ## Example
    /// ```
    /// use pyrustlang::ast::{Expr, Position};
    ///
    /// let expr = Expr::Name { name: "x".to_string(),
    ///                         pos:  Position { line: 3, column: 7 }, };
    ///
    /// assert_eq!(expr.position().line, 3);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::IntLit { pos, .. }
            | Self::FloatLit { pos, .. }
            | Self::StringLit { pos, .. }
            | Self::BoolLit { pos, .. }
            | Self::Name { pos, .. }
            | Self::Binary { pos, .. }
            | Self::Call { pos, .. } => *pos,
        }
    }
}

/// A single function parameter: a name plus its mandatory type annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// The parameter name.
    pub name:     String,
    /// The declared type of the parameter.
    pub type_tag: TypeTag,
}

/// Represents a function declaration.
///
/// The body is a statement list; evaluation turns the declaration into a
/// function value capturing the environment it was declared in.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The name of the function.
    pub name:        String,
    /// The parameter list, with mandatory per-parameter types.
    pub params:      Vec<Param>,
    /// The declared return type, if any.
    pub return_type: Option<TypeTag>,
    /// The statements making up the function body.
    pub body:        Vec<Stmt>,
    /// Source position of the `fn` keyword.
    pub pos:         Position,
}

/// Represents a statement.
///
/// Statements are the units a program is made of; blocks, loop bodies and
/// function bodies are statement lists.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A `let` declaration, optionally mutable and optionally annotated.
    Let {
        /// The declared name.
        name:          String,
        /// Whether the binding may later be reassigned.
        mutable:       bool,
        /// The optional type annotation, checked against the initializer.
        declared_type: Option<TypeTag>,
        /// The initializer expression.
        initializer:   Expr,
        /// Source position of the `let` keyword.
        pos:           Position,
    },
    /// Reassignment of an existing binding.
    Assign {
        /// The assigned name.
        name:  String,
        /// The value expression.
        value: Expr,
        /// Source position of the name.
        pos:   Position,
    },
    /// A function declaration.
    Function(FunctionDecl),
    /// An `if` statement with an optional `else` block.
    If {
        /// The condition; must evaluate to a boolean.
        condition: Expr,
        /// Statements executed when the condition holds.
        then_body: Vec<Stmt>,
        /// Statements executed otherwise, if present.
        else_body: Option<Vec<Stmt>>,
        /// Source position of the `if` keyword.
        pos:       Position,
    },
    /// A `while` loop.
    While {
        /// The loop condition; must evaluate to a boolean.
        condition: Expr,
        /// The loop body, run in a fresh scope each iteration.
        body:      Vec<Stmt>,
        /// Source position of the `while` keyword.
        pos:       Position,
    },
    /// A `return` statement with an optional value.
    Return {
        /// The returned expression, or `None` for a bare `return`.
        value: Option<Expr>,
        /// Source position of the `return` keyword.
        pos:   Position,
    },
    /// A `print` statement.
    Print {
        /// The printed expression.
        value: Expr,
        /// Source position of the `print` keyword.
        pos:   Position,
    },
    /// A standalone expression evaluated for its value (and, in the REPL,
    /// echoed).
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Source position of the expression.
        pos:  Position,
    },
    /// A bare braced block, run in a fresh child scope.
    Block {
        /// The statements inside the block.
        body: Vec<Stmt>,
        /// Source position of the opening brace.
        pos:  Position,
    },
}
