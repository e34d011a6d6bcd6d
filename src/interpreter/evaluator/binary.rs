use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates a binary operation between two values.
    ///
    /// Routes the operation to the handler for its category: arithmetic
    /// (`+ - *`), division, comparison (`< > <= >=`), or equality
    /// (`== !=`). Both operands have already been evaluated, left first.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    pub(crate) fn eval_binary(op: BinaryOperator,
                              left: &Value,
                              right: &Value,
                              line: usize)
                              -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul,
                             NotEqual, Sub};

        match op {
            Add | Sub | Mul => Self::eval_arithmetic(op, left, right, line),
            Div => Self::eval_division(left, right, line),
            Less | Greater | LessEqual | GreaterEqual => {
                Self::eval_comparison(op, left, right, line)
            },
            Equal | NotEqual => Self::eval_equality(op, left, right, line),
        }
    }

    /// Evaluates `+`, `-` and `*`.
    ///
    /// Integer pairs stay integers, with checked arithmetic reporting
    /// overflow. `+` additionally concatenates string pairs. Mixed
    /// integer/float operands widen to float. Every other combination
    /// (booleans, units, functions, strings under `-`/`*`) is a type
    /// mismatch.
    fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Mul, Sub};
        use Value::{Float, Int, Str};

        match (left, right) {
            (Int(a), Int(b)) => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    _ => unreachable!(),
                };
                result.map(Int).ok_or(RuntimeError::IntegerOverflow { line })
            },

            (Str(a), Str(b)) if op == Add => Ok(Str(format!("{a}{b}"))),

            (Int(_) | Float(_), Int(_) | Float(_)) => {
                let a = left.as_f64(line)?;
                let b = right.as_f64(line)?;

                Ok(Float(match op {
                             Add => a + b,
                             Sub => a - b,
                             Mul => a * b,
                             _ => unreachable!(),
                         }))
            },

            _ => {
                Err(RuntimeError::TypeMismatch { details: format!("Cannot apply '{op}' to {} and {}",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line })
            },
        }
    }

    /// Evaluates `/`.
    ///
    /// Division is uniform floating-point: integer operands widen, and the
    /// result is always a float. A divisor of `0` or `0.0` is an error
    /// before any division happens.
    fn eval_division(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        use Value::{Float, Int};

        match (left, right) {
            (Int(_) | Float(_), Int(_) | Float(_)) => {
                if right.is_zero() {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                Ok(Float(left.as_f64(line)? / right.as_f64(line)?))
            },
            _ => {
                Err(RuntimeError::TypeMismatch { details: format!("Cannot apply '/' to {} and {}",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line })
            },
        }
    }

    /// Evaluates `<`, `>`, `<=` and `>=`.
    ///
    /// Comparison is defined for numeric operands only; mixed pairs compare
    /// after widening to float.
    fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Greater, GreaterEqual, Less, LessEqual};
        use Value::{Float, Int};

        match (left, right) {
            (Int(a), Int(b)) => Ok(Value::Bool(match op {
                                                   Less => a < b,
                                                   Greater => a > b,
                                                   LessEqual => a <= b,
                                                   GreaterEqual => a >= b,
                                                   _ => unreachable!(),
                                               })),

            (Int(_) | Float(_), Int(_) | Float(_)) => {
                let a = left.as_f64(line)?;
                let b = right.as_f64(line)?;

                Ok(Value::Bool(match op {
                                   Less => a < b,
                                   Greater => a > b,
                                   LessEqual => a <= b,
                                   GreaterEqual => a >= b,
                                   _ => unreachable!(),
                               }))
            },

            _ => {
                Err(RuntimeError::TypeMismatch { details: format!("Cannot compare {} and {}",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line })
            },
        }
    }

    /// Evaluates `==` and `!=`.
    ///
    /// Operands must share a tag after numeric widening; values then compare
    /// structurally. Cross-category comparisons (string against integer,
    /// boolean against number) and any operand without a tag are type
    /// mismatches.
    fn eval_equality(op: BinaryOperator,
                     left: &Value,
                     right: &Value,
                     line: usize)
                     -> EvalResult<Value> {
        use Value::{Bool, Float, Int, Str};

        let equal = match (left, right) {
            (Int(a), Int(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Int(_), Float(_)) | (Float(_), Int(_)) => {
                left.as_f64(line)? == right.as_f64(line)?
            },
            (Str(a), Str(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            _ => {
                return Err(RuntimeError::TypeMismatch { details: format!("Cannot test {} and {} for equality",
                                                                         left.type_name(),
                                                                         right.type_name()),
                                                        line });
            },
        };

        Ok(Value::Bool(if op == BinaryOperator::NotEqual {
                           !equal
                       } else {
                           equal
                       }))
    }
}
