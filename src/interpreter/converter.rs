use crate::{
    error::ParseError,
    operator::OperatorKind,
    token::{Parenthesis, Token, render},
};

/// Result type used by the converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// Entries on the converter's operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(OperatorKind),
    Open,
}

/// Reorders an infix token sequence into postfix (reverse Polish) order.
///
/// This is the shunting-yard algorithm. Before an operator is pushed, every
/// operator on the stack with an equal or higher precedence is moved to the
/// output, so all operators associate to the left. That includes `^`:
/// `2^3^2` becomes `2 3 ^ 2 ^`.
///
/// # Errors
/// Returns `ParseError::MismatchedParentheses` if a `)` has no matching
/// `(`, or a `(` is never closed.
///
/// # Example
/// ```
/// use rpncalc::{
///     interpreter::{converter::to_postfix, lexer::tokenize},
///     token::render,
/// };
///
/// let postfix = to_postfix(tokenize("(2+3)*4").unwrap()).unwrap();
/// assert_eq!(render(&postfix), "2 3 + 4 *");
///
/// let postfix = to_postfix(tokenize("2^3^2").unwrap()).unwrap();
/// assert_eq!(render(&postfix), "2 3 ^ 2 ^");
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Parenthesis(Parenthesis::Open) => stack.push(Pending::Open),
            Token::Parenthesis(Parenthesis::Close) => loop {
                match stack.pop() {
                    Some(Pending::Operator(kind)) => output.push(Token::Operator(kind)),
                    Some(Pending::Open) => break,
                    None => return Err(ParseError::MismatchedParentheses),
                }
            },
            Token::Operator(kind) => {
                while let Some(&Pending::Operator(top)) = stack.last()
                      && top.precedence() >= kind.precedence()
                {
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(Pending::Operator(kind));
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(kind) => output.push(Token::Operator(kind)),
            Pending::Open => return Err(ParseError::MismatchedParentheses),
        }
    }

    log::debug!("postfix: {}", render(&output));
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn postfix(expression: &str) -> ParseResult<String> {
        let tokens = tokenize(expression).expect("expression should lex");
        to_postfix(tokens).map(|tokens| render(&tokens))
    }

    #[test]
    fn numbers_pass_through() {
        assert_eq!(postfix("42").unwrap(), "42");
    }

    #[test]
    fn higher_precedence_binds_first() {
        assert_eq!(postfix("2+3*4").unwrap(), "2 3 4 * +");
        assert_eq!(postfix("2*3+4").unwrap(), "2 3 * 4 +");
        assert_eq!(postfix("1+2^3*4").unwrap(), "1 2 3 ^ 4 * +");
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!(postfix("8-4-2").unwrap(), "8 4 - 2 -");
        assert_eq!(postfix("2^3^2").unwrap(), "2 3 ^ 2 ^");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(postfix("(2+3)*4").unwrap(), "2 3 + 4 *");
        assert_eq!(postfix("2*(3+(4-1))").unwrap(), "2 3 4 1 - + *");
    }

    #[test]
    fn logical_and_comparison_share_the_lowest_tier() {
        assert_eq!(postfix("3>2&&1<0").unwrap(), "3 2 > 1 && 0 <");
        assert_eq!(postfix("3>2||1<0").unwrap(), "3 2 > 1 || 0 <");
        assert_eq!(postfix("1<2==1").unwrap(), "1 2 < 1 ==");
        assert_eq!(postfix("1+1==2").unwrap(), "1 1 + 2 ==");
    }

    #[test]
    fn prefix_operators_follow_the_popping_rule() {
        assert_eq!(postfix("!0+1").unwrap(), "0 ! 1 +");
        assert_eq!(postfix("~5&3").unwrap(), "5 ~ 3 &");
    }

    #[test]
    fn unmatched_close_is_rejected() {
        assert_eq!(postfix("1+2)"), Err(ParseError::MismatchedParentheses));
        assert_eq!(postfix(")"), Err(ParseError::MismatchedParentheses));
    }

    #[test]
    fn unclosed_open_is_rejected() {
        assert_eq!(postfix("(1+2"), Err(ParseError::MismatchedParentheses));
        assert_eq!(postfix("((1)"), Err(ParseError::MismatchedParentheses));
    }

    #[test]
    fn empty_groups_produce_no_output() {
        assert_eq!(postfix("()").unwrap(), "");
        assert_eq!(postfix("").unwrap(), "");
    }
}
