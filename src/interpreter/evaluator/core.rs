use std::{cell::RefCell, io::Write, rc::Rc};

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{env::Env, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Upper bound on nested call frames.
///
/// Runaway recursion is reported as a [`RuntimeError::RecursionLimit`]
/// instead of exhausting the host stack. The bound leaves headroom on a
/// 2 MiB thread stack.
pub const MAX_CALL_DEPTH: usize = 500;

/// The control outcome of executing a statement.
///
/// `Returning` unwinds out of nested blocks and loops until the nearest
/// enclosing function call catches it and turns the payload into the call's
/// result. At the top level it simply ends the program.
#[derive(Debug, PartialEq)]
pub enum Flow {
    /// Execution continues with the next statement. The payload is the
    /// statement's value: `Unit` for everything except expression
    /// statements.
    Normal(Value),
    /// A `return` is unwinding with the given value.
    Returning(Value),
}

/// Holds the interpreter state for one program run.
///
/// The interpreter owns the global environment and writes program output
/// (the `print` statement) through the sink it was constructed with. A REPL
/// keeps one `Interpreter` alive across lines so bindings persist.
pub struct Interpreter<'a> {
    globals: Rc<RefCell<Env>>,
    out:     &'a mut dyn Write,
    /// Current call nesting, compared against [`MAX_CALL_DEPTH`].
    pub(crate) depth: usize,
}

impl<'a> Interpreter<'a> {
    /// Creates an interpreter with an empty global scope writing program
    /// output to `out`.
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { globals: Env::global(),
               out,
               depth: 0 }
    }

    /// Runs a parsed program to completion.
    ///
    /// Statements execute in order against the global scope. A top-level
    /// `return` ends the run early.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised; statements after it do not
    /// execute.
    pub fn run(&mut self, statements: &[Stmt]) -> EvalResult<()> {
        let globals = Rc::clone(&self.globals);

        for statement in statements {
            if let Flow::Returning(_) = self.exec_statement(statement, &globals)? {
                break;
            }
        }

        Ok(())
    }

    /// Executes a single statement against the global scope.
    ///
    /// This is the REPL entry point: the returned [`Flow`] carries the value
    /// of an expression statement so the caller can echo it. A failed
    /// statement installs no bindings and leaves earlier state intact.
    ///
    /// # Errors
    /// Returns the [`RuntimeError`] raised by the statement, if any.
    pub fn run_statement(&mut self, statement: &Stmt) -> EvalResult<Flow> {
        let globals = Rc::clone(&self.globals);
        self.exec_statement(statement, &globals)
    }

    /// Evaluates an expression in the given scope and returns its value.
    ///
    /// Dispatches on the expression variant: literals produce their obvious
    /// value, names are looked up walking outward through the scope chain,
    /// binary operators evaluate both operands left to right, and calls are
    /// delegated to the call machinery.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: The scope the expression runs in.
    ///
    /// # Returns
    /// The computed [`Value`].
    pub(crate) fn eval(&mut self, expr: &Expr, env: &Rc<RefCell<Env>>) -> EvalResult<Value> {
        match expr {
            Expr::IntLit { value, .. } => Ok(Value::Int(*value)),
            Expr::FloatLit { value, .. } => Ok(Value::Float(*value)),
            Expr::StringLit { value, .. } => Ok(Value::Str(value.clone())),
            Expr::BoolLit { value, .. } => Ok(Value::Bool(*value)),

            Expr::Name { name, pos } => {
                env.borrow()
                   .get(name)
                   .ok_or_else(|| RuntimeError::UnknownName { name: name.clone(),
                                                              line: pos.line, })
            },

            Expr::Binary { op, lhs, rhs, pos } => {
                let left = self.eval(lhs, env)?;
                let right = self.eval(rhs, env)?;
                Self::eval_binary(*op, &left, &right, pos.line)
            },

            Expr::Call { callee, args, pos } => self.eval_call(callee, args, env, *pos),
        }
    }

    /// Writes one line of program output through the sink.
    ///
    /// A failed write is not a language error; it is ignored.
    pub(crate) fn write_line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{text}");
    }
}
