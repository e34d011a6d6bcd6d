#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use, assign, or call an unbound name.
    UnknownName {
        /// The name that failed to resolve.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name whose value is not a function.
    NotCallable {
        /// The name of the called binding.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had a tag incompatible with where it was used: a violated
    /// declaration annotation, an operator applied to the wrong operands, a
    /// non-boolean condition, a broken return type, or an unprintable value.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Assignment to a binding declared without `mut`.
    ImmutableAssignment {
        /// The name of the binding.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call supplied the wrong number of arguments.
    ArityMismatch {
        /// The name of the called function.
        name:     String,
        /// How many parameters the function declares.
        expected: usize,
        /// How many arguments the call supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed, or an integer was too large to widen
    /// exactly into a float.
    IntegerOverflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The call stack exceeded the interpreter's depth limit.
    RecursionLimit {
        /// The source line of the offending call.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownName { name, line } => {
                write!(f, "Error: Line {line}: Name '{name}' is not defined.")
            },
            Self::NotCallable { name, line } => {
                write!(f, "Error: Line {line}: '{name}' is not a function.")
            },
            Self::TypeMismatch { details, line } => {
                write!(f, "Error: Line {line}: Type mismatch: {details}.")
            },
            Self::ImmutableAssignment { name, line } => write!(f,
                                                               "Error: Line {line}: Cannot reassign immutable variable '{name}'."),
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  line, } => write!(f,
                                                    "Error: Line {line}: Function '{name}' expects {expected} arguments, got {found}."),
            Self::DivisionByZero { line } => write!(f, "Error: Line {line}: Division by zero."),
            Self::IntegerOverflow { line } => write!(f,
                                                     "Error: Line {line}: Integer overflow while trying to compute result."),
            Self::RecursionLimit { line } => {
                write!(f, "Error: Line {line}: Maximum recursion depth exceeded.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
