use crate::{error::EvalError, interpreter::evaluator::EvalResult};

/// Name reported for whole-number operands in type errors.
pub const INTEGER: &str = "integer";
/// Name reported for fractional operands in type errors.
pub const FLOAT: &str = "float";

/// Returns `true` if `value` has no fractional part.
///
/// Infinities count as whole numbers, `NaN` does not.
///
/// # Example
/// ```
/// use rpncalc::util::num::is_whole;
///
/// assert!(is_whole(6.0));
/// assert!(is_whole(-3.0));
/// assert!(!is_whole(3.5));
/// assert!(!is_whole(f64::NAN));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_whole(value: f64) -> bool {
    value == value.trunc()
}

/// Checks that `value` can be used by an integer-only operator.
///
/// ## Errors
/// Returns `EvalError::InvalidOperandType` if `value` is fractional.
///
/// # Example
/// ```
/// use rpncalc::{error::EvalError, util::num::require_whole};
///
/// assert!(require_whole(4.0).is_ok());
/// assert_eq!(require_whole(4.25).unwrap_err(),
///            EvalError::InvalidOperandType { expected: "integer",
///                                            actual:   "float", });
/// ```
pub fn require_whole(value: f64) -> EvalResult<()> {
    if is_whole(value) {
        Ok(())
    } else {
        Err(EvalError::InvalidOperandType { expected: INTEGER,
                                            actual:   FLOAT, })
    }
}

/// Converts a whole `f64` to `i64`.
///
/// ## Errors
/// Returns `EvalError::InvalidOperandType` if `value` is fractional, or lies
/// outside the `i64` range (infinities included).
///
/// # Example
/// ```
/// use rpncalc::util::num::as_integer;
///
/// assert_eq!(as_integer(-12.0).unwrap(), -12);
/// assert_eq!(as_integer(-9_223_372_036_854_775_808.0).unwrap(), i64::MIN);
/// assert!(as_integer(0.5).is_err());
/// assert!(as_integer(1e300).is_err());
/// assert!(as_integer(f64::INFINITY).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn as_integer(value: f64) -> EvalResult<i64> {
    require_whole(value)?;
    // i64::MAX as f64 rounds up to 2^63, which is already out of range.
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(EvalError::InvalidOperandType { expected: INTEGER,
                                                   actual:   FLOAT, });
    }
    Ok(value as i64)
}
