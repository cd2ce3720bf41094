use crate::{error::EvalError, interpreter::evaluator::EvalResult, util::num::as_integer};

/// Evaluation function stored in the registry.
///
/// Every operator is invoked with two operands. Unary operators receive their
/// operand as `left` and `0.0` as `right`.
pub type OperatorFn = fn(f64, f64) -> EvalResult<f64>;

/// Represents one of the operator symbols the calculator understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Logical and (`&&`)
    LogicalAnd,
    /// Logical or (`||`)
    LogicalOr,
    /// Logical not (`!`)
    LogicalNot,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^^`)
    BitXor,
    /// Left shift (`<<`)
    ShiftLeft,
    /// Arithmetic right shift (`>>`)
    ShiftRight,
    /// Bitwise complement (`~`)
    BitNot,
}

/// The arity and numeric domain of an operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperatorClass {
    /// One operand, any finite or non-finite float.
    UnaryFloat,
    /// Two operands, any floats.
    BinaryFloat,
    /// Two operands, both must be whole numbers.
    BinaryIntegerOnly,
    /// One operand, must be a whole number.
    UnaryIntegerOnly,
}

impl OperatorClass {
    /// Number of operands consumed from the evaluation stack.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::UnaryFloat | Self::UnaryIntegerOnly => 1,
            Self::BinaryFloat | Self::BinaryIntegerOnly => 2,
        }
    }

    /// Whether operands have to be whole numbers.
    #[must_use]
    pub const fn is_integer_only(self) -> bool {
        matches!(self, Self::BinaryIntegerOnly | Self::UnaryIntegerOnly)
    }
}

/// Every registered symbol.
///
/// Multi-character symbols precede their single-character prefixes.
pub const SYMBOLS: [(&str, OperatorKind); 20] = [("&&", OperatorKind::LogicalAnd),
                                                 ("||", OperatorKind::LogicalOr),
                                                 ("==", OperatorKind::Equal),
                                                 ("!=", OperatorKind::NotEqual),
                                                 (">=", OperatorKind::GreaterEqual),
                                                 ("<=", OperatorKind::LessEqual),
                                                 ("<<", OperatorKind::ShiftLeft),
                                                 (">>", OperatorKind::ShiftRight),
                                                 ("^^", OperatorKind::BitXor),
                                                 ("+", OperatorKind::Add),
                                                 ("-", OperatorKind::Sub),
                                                 ("*", OperatorKind::Mul),
                                                 ("/", OperatorKind::Div),
                                                 ("^", OperatorKind::Pow),
                                                 ("!", OperatorKind::LogicalNot),
                                                 (">", OperatorKind::Greater),
                                                 ("<", OperatorKind::Less),
                                                 ("&", OperatorKind::BitAnd),
                                                 ("|", OperatorKind::BitOr),
                                                 ("~", OperatorKind::BitNot)];

impl OperatorKind {
    /// Resolves an exact symbol to its operator.
    ///
    /// # Example
    /// ```
    /// use rpncalc::operator::OperatorKind;
    ///
    /// assert_eq!(OperatorKind::from_symbol("<<"), Some(OperatorKind::ShiftLeft));
    /// assert_eq!(OperatorKind::from_symbol("=>"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        SYMBOLS.iter().find(|(s, _)| *s == symbol).map(|(_, kind)| *kind)
    }

    /// The textual symbol of this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::LogicalNot => "!",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::BitNot => "~",
        }
    }

    /// The class governing arity and operand validation.
    #[must_use]
    pub const fn class(self) -> OperatorClass {
        match self {
            Self::LogicalNot => OperatorClass::UnaryFloat,
            Self::BitNot => OperatorClass::UnaryIntegerOnly,
            Self::BitAnd | Self::BitOr | Self::BitXor | Self::ShiftLeft | Self::ShiftRight => {
                OperatorClass::BinaryIntegerOnly
            },
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::Pow
            | Self::LogicalAnd
            | Self::LogicalOr
            | Self::Equal
            | Self::NotEqual
            | Self::Greater
            | Self::Less
            | Self::GreaterEqual
            | Self::LessEqual => OperatorClass::BinaryFloat,
        }
    }

    /// Binding strength used by the infix to postfix conversion.
    ///
    /// Higher binds tighter. Logical and comparison operators form the
    /// lowest tier at `0`.
    ///
    /// # Example
    /// ```
    /// use rpncalc::operator::OperatorKind;
    ///
    /// assert!(OperatorKind::Mul.precedence() > OperatorKind::Add.precedence());
    /// assert_eq!(OperatorKind::LogicalAnd.precedence(), 0);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::LogicalNot | Self::BitNot => 4,
            Self::Pow => 3,
            Self::Mul | Self::Div | Self::BitAnd | Self::ShiftLeft | Self::ShiftRight => 2,
            Self::Add | Self::Sub | Self::BitOr | Self::BitXor => 1,
            Self::LogicalAnd
            | Self::LogicalOr
            | Self::Equal
            | Self::NotEqual
            | Self::Greater
            | Self::Less
            | Self::GreaterEqual
            | Self::LessEqual => 0,
        }
    }

    /// The evaluation function registered for this operator.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn function(self) -> OperatorFn {
        match self {
            Self::Add => |l, r| Ok(l + r),
            Self::Sub => |l, r| Ok(l - r),
            Self::Mul => |l, r| Ok(l * r),
            Self::Div => divide,
            Self::Pow => |l, r| Ok(l.powf(r)),
            Self::LogicalAnd => |l, r| Ok(truth(l != 0.0 && r != 0.0)),
            Self::LogicalOr => |l, r| Ok(truth(l != 0.0 || r != 0.0)),
            Self::LogicalNot => |l, _| Ok(truth(l == 0.0)),
            Self::Equal => |l, r| Ok(truth(l == r)),
            Self::NotEqual => |l, r| Ok(truth(l != r)),
            Self::Greater => |l, r| Ok(truth(l > r)),
            Self::Less => |l, r| Ok(truth(l < r)),
            Self::GreaterEqual => |l, r| Ok(truth(l >= r)),
            Self::LessEqual => |l, r| Ok(truth(l <= r)),
            Self::BitAnd => |l, r| integer_op(l, r, |a, b| a & b),
            Self::BitOr => |l, r| integer_op(l, r, |a, b| a | b),
            Self::BitXor => |l, r| integer_op(l, r, |a, b| a ^ b),
            Self::ShiftLeft => |l, r| integer_op(l, r, shift_left),
            Self::ShiftRight => |l, r| integer_op(l, r, shift_right),
            Self::BitNot => |l, _| integer_op(l, 0.0, |a, _| !a),
        }
    }

    /// Applies the registered function to the given operands.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{error::EvalError, operator::OperatorKind};
    ///
    /// assert_eq!(OperatorKind::Pow.apply(2.0, 10.0).unwrap(), 1024.0);
    /// assert!(matches!(OperatorKind::Div.apply(1.0, 0.0), Err(EvalError::DivisionByZero)));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        (self.function())(left, right)
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

const fn truth(condition: bool) -> f64 {
    if condition { 1.0 } else { 0.0 }
}

fn divide(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(left / right)
}

#[allow(clippy::cast_precision_loss)]
fn integer_op(left: f64, right: f64, op: fn(i64, i64) -> i64) -> EvalResult<f64> {
    Ok(op(as_integer(left)?, as_integer(right)?) as f64)
}

fn shift_left(value: i64, amount: i64) -> i64 {
    u32::try_from(amount).ok()
                         .and_then(|amount| value.checked_shl(amount))
                         .unwrap_or(0)
}

fn shift_right(value: i64, amount: i64) -> i64 {
    u32::try_from(amount).ok()
                         .and_then(|amount| value.checked_shr(amount))
                         .unwrap_or(if value < 0 { -1 } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_table_is_longest_first() {
        for (i, (symbol, _)) in SYMBOLS.iter().enumerate() {
            for (later, _) in &SYMBOLS[i + 1..] {
                assert!(!later.starts_with(symbol) || later == symbol,
                        "'{later}' is shadowed by its prefix '{symbol}'");
            }
        }
    }

    #[test]
    fn every_symbol_round_trips() {
        for (symbol, kind) in SYMBOLS {
            assert_eq!(kind.symbol(), symbol);
            assert_eq!(OperatorKind::from_symbol(symbol), Some(kind));
        }
    }

    #[test]
    fn classes_match_arity() {
        assert_eq!(OperatorKind::LogicalNot.class().arity(), 1);
        assert_eq!(OperatorKind::BitNot.class().arity(), 1);
        assert!(OperatorKind::BitNot.class().is_integer_only());
        assert!(OperatorKind::ShiftRight.class().is_integer_only());
        assert!(!OperatorKind::Pow.class().is_integer_only());
        assert_eq!(OperatorKind::Add.class().arity(), 2);
    }

    #[test]
    fn comparisons_yield_truth_values() {
        assert_eq!(OperatorKind::Greater.apply(3.0, 2.0).unwrap(), 1.0);
        assert_eq!(OperatorKind::LessEqual.apply(3.0, 2.0).unwrap(), 0.0);
        assert_eq!(OperatorKind::LogicalOr.apply(0.0, -2.5).unwrap(), 1.0);
        assert_eq!(OperatorKind::LogicalNot.apply(0.0, 0.0).unwrap(), 1.0);
        assert_eq!(OperatorKind::LogicalNot.apply(7.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn bitwise_operators() {
        assert_eq!(OperatorKind::BitAnd.apply(6.0, 3.0).unwrap(), 2.0);
        assert_eq!(OperatorKind::BitOr.apply(6.0, 3.0).unwrap(), 7.0);
        assert_eq!(OperatorKind::BitXor.apply(6.0, 3.0).unwrap(), 5.0);
        assert_eq!(OperatorKind::BitNot.apply(0.0, 0.0).unwrap(), -1.0);
        assert_eq!(OperatorKind::ShiftLeft.apply(1.0, 4.0).unwrap(), 16.0);
        assert_eq!(OperatorKind::ShiftRight.apply(-16.0, 2.0).unwrap(), -4.0);
    }

    #[test]
    fn out_of_range_operands_are_rejected() {
        let expected = Err(EvalError::InvalidOperandType { expected: "integer",
                                                           actual:   "float", });
        assert_eq!(OperatorKind::BitAnd.apply(1e20, 1.0), expected);
        assert_eq!(OperatorKind::BitNot.apply(f64::INFINITY, 0.0), expected);
        assert_eq!(OperatorKind::BitOr.apply(-1e19, 0.0), expected);
    }

    #[test]
    fn oversized_shifts_clear_every_bit() {
        assert_eq!(OperatorKind::ShiftLeft.apply(1.0, 64.0).unwrap(), 0.0);
        assert_eq!(OperatorKind::ShiftLeft.apply(1.0, -1.0).unwrap(), 0.0);
        assert_eq!(OperatorKind::ShiftRight.apply(5.0, 100.0).unwrap(), 0.0);
        assert_eq!(OperatorKind::ShiftRight.apply(-5.0, 100.0).unwrap(), -1.0);
    }

    #[test]
    fn division_by_zero_is_rejected_by_the_function() {
        assert!(matches!(OperatorKind::Div.apply(5.0, 0.0), Err(EvalError::DivisionByZero)));
        assert!(matches!(OperatorKind::Div.apply(5.0, -0.0), Err(EvalError::DivisionByZero)));
        assert_eq!(OperatorKind::Div.apply(5.0, 2.0).unwrap(), 2.5);
    }
}
