//! # rpncalc
//!
//! rpncalc evaluates arithmetic, logical and bitwise expressions such as
//! `(2+3)*4`, `3>2 && 1<0` or `6 & 3`. Every value is an `f64`; comparisons
//! and logical operators yield `1.0` or `0.0`.
//!
//! Evaluation is a pipeline of three pure stages: the lexer produces tokens,
//! the converter reorders them into postfix order, and the evaluator reduces
//! the postfix sequence with an operand stack. No state survives a call, so
//! [`eval`] can be called from any number of threads.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{converter::to_postfix, evaluator::evaluate, lexer::tokenize},
};

/// Provides the error types of every pipeline stage.
///
/// Lexing and conversion have their own narrow error enums. Both convert
/// into `EvalError`, the closed set of failures reported by [`eval`].
///
/// # Responsibilities
/// - Defines one variant per failure kind, with the context needed for a
///   human readable message.
/// - Implements `Display` and `std::error::Error` for each error type.
pub mod error;
/// Runs the evaluation pipeline.
///
/// This module holds the three stages, each a pure function of its input
/// and the operator registry.
///
/// # Responsibilities
/// - Tokenizes expression text.
/// - Converts infix token sequences to postfix order.
/// - Evaluates postfix sequences to a number.
pub mod interpreter;
/// The operator registry.
///
/// A static table mapping each operator to its symbol, class, precedence and
/// evaluation function. It is consulted by all three pipeline stages and is
/// never mutated.
pub mod operator;
/// The interactive shell.
///
/// A read/eval/print loop around [`eval`] that also understands the `exit`
/// and `clear` commands. Shell commands never reach the evaluator.
pub mod shell;
/// Token types shared by the pipeline stages.
pub mod token;
/// Numeric helpers for whole-number validation.
pub mod util;

/// Evaluates an expression and returns its value.
///
/// The expression is tokenized, converted to postfix order and evaluated.
/// The first failing stage decides the error.
///
/// # Errors
/// Returns an `EvalError` describing the first problem found, such as an
/// unknown operator, unbalanced parentheses or a division by zero.
///
/// # Examples
/// ```
/// use rpncalc::{error::EvalError, eval};
///
/// assert_eq!(eval("2+3*4").unwrap(), 14.0);
/// assert_eq!(eval("(2+3)*4").unwrap(), 20.0);
/// assert_eq!(eval("3,5+1,5").unwrap(), 5.0);
/// assert_eq!(eval("3>2 && 1<0").unwrap(), 0.0);
///
/// assert_eq!(eval("5/0"), Err(EvalError::DivisionByZero));
/// assert_eq!(eval("(1+2"), Err(EvalError::MismatchedParentheses));
/// ```
pub fn eval(expression: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(expression)?;
    let postfix = to_postfix(tokens)?;
    evaluate(&postfix)
}
