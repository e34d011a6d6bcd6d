use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Expr, Position},
    error::RuntimeError,
    interpreter::{
        env::Env,
        evaluator::core::{EvalResult, Flow, Interpreter, MAX_CALL_DEPTH},
        value::{FunctionValue, Value},
    },
};

impl Interpreter<'_> {
    /// Evaluates a function call.
    ///
    /// The callee is resolved through the environment like any other name
    /// and must hold a function value. Arguments are evaluated left to
    /// right in the caller's scope before any checks, so their side effects
    /// always happen. Arity and per-parameter type tags are checked against
    /// the declaration; then the body runs in a frame whose parent is the
    /// function's *captured* environment, never the caller's.
    ///
    /// # Parameters
    /// - `callee`: Name of the called binding.
    /// - `args`: Argument expressions.
    /// - `env`: The caller's scope.
    /// - `pos`: Position of the call, for diagnostics.
    ///
    /// # Returns
    /// The call's result: the unwound `return` value, or `Unit` when the
    /// body falls through.
    ///
    /// # Errors
    /// - `UnknownName` when the callee is unbound.
    /// - `NotCallable` when the resolved value is not a function.
    /// - `ArityMismatch` / `TypeMismatch` for bad argument lists.
    /// - `RecursionLimit` when the frame budget is exhausted.
    pub(crate) fn eval_call(&mut self,
                            callee: &str,
                            args: &[Expr],
                            env: &Rc<RefCell<Env>>,
                            pos: Position)
                            -> EvalResult<Value> {
        let line = pos.line;

        let resolved = env.borrow()
                          .get(callee)
                          .ok_or_else(|| RuntimeError::UnknownName { name: callee.to_string(),
                                                                     line })?;
        let Value::Function(function) = resolved else {
            return Err(RuntimeError::NotCallable { name: callee.to_string(),
                                                   line });
        };

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.eval(arg, env)?);
        }

        check_arguments(&function, &values, line)?;

        if self.depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit { line });
        }

        // The frame hangs off the captured environment: free names resolve
        // where the function was declared, not where it was called.
        let frame = Env::with_parent(Rc::clone(&function.captured));
        {
            let mut frame_env = frame.borrow_mut();
            for (param, value) in function.params.iter().zip(values) {
                frame_env.declare(&param.name, value, false);
            }
        }

        self.depth += 1;
        let outcome = self.exec_block(&function.body, &frame);
        self.depth -= 1;

        match outcome? {
            Flow::Returning(value) => {
                if let Some(expected) = function.return_type
                   && value != Value::Unit
                   && value.tag() != Some(expected)
                {
                    return Err(RuntimeError::TypeMismatch { details: format!("'{}' declares return type {expected} but returned {}",
                                                                             function.name,
                                                                             value.type_name()),
                                                            line });
                }
                Ok(value)
            },
            Flow::Normal(_) => {
                if let Some(expected) = function.return_type {
                    return Err(RuntimeError::TypeMismatch { details: format!("'{}' declares return type {expected} but completed without returning",
                                                                             function.name),
                                                            line });
                }
                Ok(Value::Unit)
            },
        }
    }
}

/// Checks a call's argument list against the function's declaration.
///
/// Arity must match exactly, and each argument's runtime tag must equal the
/// parameter's annotation; annotations never convert.
fn check_arguments(function: &FunctionValue, values: &[Value], line: usize) -> EvalResult<()> {
    if values.len() != function.params.len() {
        return Err(RuntimeError::ArityMismatch { name:     function.name.clone(),
                                                 expected: function.params.len(),
                                                 found:    values.len(),
                                                 line });
    }

    for (param, value) in function.params.iter().zip(values) {
        if value.tag() != Some(param.type_tag) {
            return Err(RuntimeError::TypeMismatch { details: format!("Parameter '{}' of '{}' expects {} but the argument has type {}",
                                                                     param.name,
                                                                     function.name,
                                                                     param.type_tag,
                                                                     value.type_name()),
                                                    line });
        }
    }

    Ok(())
}
