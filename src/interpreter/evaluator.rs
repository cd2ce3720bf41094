use crate::{
    error::EvalError,
    operator::OperatorKind,
    token::Token,
    util::num::require_whole,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a postfix token sequence with a single operand stack.
///
/// Numbers are pushed. An operator pops as many operands as its class
/// requires (see [`OperatorClass::arity`](crate::operator::OperatorClass::arity)),
/// checks that they are whole numbers if the class is integer-only, and
/// pushes its result. Binary operators are applied as `f(left, right)` where
/// `left` was pushed first.
///
/// # Errors
/// - `EvalError::UnexpectedEnd` if an operator finds too few operands, or the
///   sequence produces no value at all.
/// - `EvalError::InvalidOperandType` if an integer-only operator receives a
///   fractional operand, or one outside the `i64` range.
/// - `EvalError::DivisionByZero` from `/` with a zero divisor.
/// - `EvalError::TrailingOperands` if more than one value is left.
/// - `EvalError::MismatchedParentheses` if a parenthesis token is present,
///   which the converter never emits.
///
/// # Example
/// ```
/// use rpncalc::{interpreter::evaluator::evaluate, operator::OperatorKind, token::Token};
///
/// let postfix = [Token::Number(6.0), Token::Number(3.0), Token::Operator(OperatorKind::BitAnd)];
/// assert_eq!(evaluate(&postfix).unwrap(), 2.0);
/// ```
pub fn evaluate(postfix: &[Token]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match *token {
            Token::Number(value) => stack.push(value),
            Token::Operator(kind) => {
                let result = apply(kind, &mut stack)?;
                stack.push(result);
            },
            Token::Parenthesis(_) => return Err(EvalError::MismatchedParentheses),
        }
    }

    match stack.as_slice() {
        [] => Err(EvalError::UnexpectedEnd),
        [value] => Ok(*value),
        values => Err(EvalError::TrailingOperands { count: values.len() }),
    }
}

/// Pops the operands of `kind`, validates them and applies the operator.
fn apply(kind: OperatorKind, stack: &mut Vec<f64>) -> EvalResult<f64> {
    let class = kind.class();

    let (left, right) = if class.arity() == 1 {
        let operand = stack.pop().ok_or(EvalError::UnexpectedEnd)?;
        if class.is_integer_only() {
            require_whole(operand)?;
        }
        (operand, 0.0)
    } else {
        let right = stack.pop().ok_or(EvalError::UnexpectedEnd)?;
        let left = stack.pop().ok_or(EvalError::UnexpectedEnd)?;
        if class.is_integer_only() {
            require_whole(left)?;
            require_whole(right)?;
        }
        (left, right)
    };

    let result = kind.apply(left, right)?;
    log::trace!("{left} {kind} {right} = {result}");
    Ok(result)
}
