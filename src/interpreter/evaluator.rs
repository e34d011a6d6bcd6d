/// Core evaluation state and expression evaluation.
///
/// Defines the `Interpreter` struct holding the global environment, the
/// output sink and the call-depth counter, the `Flow` control outcome, and
/// the expression evaluation dispatch.
pub mod core;

/// Statement execution.
///
/// Implements the semantics of every statement form: declarations,
/// assignments, control flow, `return`, `print`, and blocks, threading the
/// control outcome through nested bodies.
pub mod statement;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary operations: checked integer
/// arithmetic, widening float arithmetic, string concatenation, always-float
/// division, comparisons, and equality.
pub mod binary;

/// Function call evaluation.
///
/// Resolves the callee, checks arity and parameter types, sets up the call
/// frame on top of the captured environment, and enforces the declared
/// return type.
pub mod call;
