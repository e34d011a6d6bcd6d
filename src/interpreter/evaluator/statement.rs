use std::{cell::RefCell, rc::Rc};

use crate::{
    ast::{Expr, Stmt},
    error::RuntimeError,
    interpreter::{
        env::{AssignError, Env},
        evaluator::core::{EvalResult, Flow, Interpreter},
        value::{FunctionValue, Value},
    },
};

impl Interpreter<'_> {
    /// Executes a single statement in the given scope.
    ///
    /// Returns the control outcome: `Normal` to continue with the next
    /// statement (carrying the value for expression statements), or
    /// `Returning` when a `return` anywhere in the statement's dynamic
    /// extent is unwinding toward the enclosing call.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    /// - `env`: The scope the statement runs in.
    pub(crate) fn exec_statement(&mut self,
                                 statement: &Stmt,
                                 env: &Rc<RefCell<Env>>)
                                 -> EvalResult<Flow> {
        match statement {
            Stmt::Let { name,
                        mutable,
                        declared_type,
                        initializer,
                        pos, } => {
                let value = self.eval(initializer, env)?;

                if let Some(expected) = declared_type
                   && value.tag() != Some(*expected)
                {
                    return Err(RuntimeError::TypeMismatch { details: format!("'{name}' is declared as {expected} but its initializer has type {}",
                                                                             value.type_name()),
                                                            line:    pos.line, });
                }

                env.borrow_mut().declare(name, value, *mutable);
                Ok(Flow::Normal(Value::Unit))
            },

            Stmt::Assign { name, value, pos } => {
                let value = self.eval(value, env)?;

                match env.borrow_mut().assign(name, value) {
                    Ok(()) => Ok(Flow::Normal(Value::Unit)),
                    Err(AssignError::NotFound) => {
                        Err(RuntimeError::UnknownName { name: name.clone(),
                                                        line: pos.line, })
                    },
                    Err(AssignError::Immutable) => {
                        Err(RuntimeError::ImmutableAssignment { name: name.clone(),
                                                                line: pos.line, })
                    },
                }
            },

            Stmt::Function(decl) => {
                let function = FunctionValue { name:        decl.name.clone(),
                                               params:      decl.params.clone(),
                                               return_type: decl.return_type,
                                               body:        decl.body.clone(),
                                               captured:    Rc::clone(env), };

                // Declared after capture, so the function sees its own
                // binding and recursion resolves.
                env.borrow_mut()
                   .declare(&decl.name, Value::Function(Rc::new(function)), false);
                Ok(Flow::Normal(Value::Unit))
            },

            Stmt::If { condition,
                       then_body,
                       else_body,
                       .. } => {
                if self.eval_condition(condition, env)? {
                    self.exec_child_block(then_body, env)
                } else if let Some(else_body) = else_body {
                    self.exec_child_block(else_body, env)
                } else {
                    Ok(Flow::Normal(Value::Unit))
                }
            },

            Stmt::While { condition, body, .. } => {
                while self.eval_condition(condition, env)? {
                    if let Flow::Returning(value) = self.exec_child_block(body, env)? {
                        return Ok(Flow::Returning(value));
                    }
                }
                Ok(Flow::Normal(Value::Unit))
            },

            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval(expr, env)?,
                    None => Value::Unit,
                };
                Ok(Flow::Returning(value))
            },

            Stmt::Print { value, pos } => {
                let value = self.eval(value, env)?;

                let Some(text) = value.render() else {
                    return Err(RuntimeError::TypeMismatch { details: format!("Cannot print a value of type {}",
                                                                             value.type_name()),
                                                            line:    pos.line, });
                };
                self.write_line(&text);
                Ok(Flow::Normal(Value::Unit))
            },

            Stmt::Expression { expr, .. } => Ok(Flow::Normal(self.eval(expr, env)?)),

            Stmt::Block { body, .. } => self.exec_child_block(body, env),
        }
    }

    /// Executes a statement list in the given scope.
    ///
    /// A `Returning` outcome stops the list immediately and propagates;
    /// otherwise execution falls through with `Normal(Unit)`.
    pub(crate) fn exec_block(&mut self,
                             statements: &[Stmt],
                             env: &Rc<RefCell<Env>>)
                             -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Returning(value) = self.exec_statement(statement, env)? {
                return Ok(Flow::Returning(value));
            }
        }
        Ok(Flow::Normal(Value::Unit))
    }

    /// Executes a statement list in a fresh child scope of `env`.
    ///
    /// Used for `if`/`else` branches, each `while` iteration, and bare
    /// blocks. The scope is released when the block ends unless a function
    /// value declared inside captured it.
    fn exec_child_block(&mut self, statements: &[Stmt], env: &Rc<RefCell<Env>>) -> EvalResult<Flow> {
        let child = Env::with_parent(Rc::clone(env));
        self.exec_block(statements, &child)
    }

    /// Evaluates a condition expression, requiring a boolean.
    ///
    /// # Errors
    /// Returns a `TypeMismatch` naming the actual type when the condition
    /// does not evaluate to `Bool`.
    fn eval_condition(&mut self, condition: &Expr, env: &Rc<RefCell<Env>>) -> EvalResult<bool> {
        match self.eval(condition, env)? {
            Value::Bool(b) => Ok(b),
            other => {
                Err(RuntimeError::TypeMismatch { details: format!("Condition must be bool, found {}",
                                                                  other.type_name()),
                                                 line:    condition.position().line, })
            },
        }
    }
}
