/// Numeric helpers for integer-only operators.
///
/// Every value in the calculator is an `f64`. Bitwise operators work on
/// whole numbers only, so their operands pass through these checks before
/// being reinterpreted as `i64`.
pub mod num;
