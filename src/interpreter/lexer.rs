use logos::Logos;

use crate::{
    error::LexError,
    operator::OperatorKind,
    token::{Parenthesis, Token, render},
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Raw lexical units recognized in a normalized expression.
///
/// A `-` is always lexed as [`OperatorKind::Sub`] here; whether it is a
/// subtraction or the sign of the next literal is decided in [`tokenize`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum Lexeme {
    /// A run of digits and dots, such as `42`, `3.5`, `.5` or `1.2.3`.
    #[regex(r"[0-9.]+")]
    Literal,
    /// `(`
    #[token("(")]
    Open,
    /// `)`
    #[token(")")]
    Close,
    /// Any registered operator symbol. Logos always takes the longest match,
    /// so `&&` never lexes as two `&`.
    #[token("&&", operator)]
    #[token("||", operator)]
    #[token("==", operator)]
    #[token("!=", operator)]
    #[token(">=", operator)]
    #[token("<=", operator)]
    #[token("<<", operator)]
    #[token(">>", operator)]
    #[token("^^", operator)]
    #[token("+", operator)]
    #[token("-", operator)]
    #[token("*", operator)]
    #[token("/", operator)]
    #[token("^", operator)]
    #[token("!", operator)]
    #[token(">", operator)]
    #[token("<", operator)]
    #[token("&", operator)]
    #[token("|", operator)]
    #[token("~", operator)]
    Operator(OperatorKind),
}

/// Resolves the current operator slice through the registry.
fn operator(lex: &logos::Lexer<Lexeme>) -> Option<OperatorKind> {
    OperatorKind::from_symbol(lex.slice())
}

/// Strips whitespace and turns decimal commas into decimal points.
///
/// # Example
/// ```
/// use rpncalc::interpreter::lexer::normalize;
///
/// assert_eq!(normalize(" 3,5 + 1 "), "3.5+1");
/// ```
#[must_use]
pub fn normalize(expression: &str) -> String {
    expression.chars()
              .filter(|c| !c.is_whitespace())
              .map(|c| if c == ',' { '.' } else { c })
              .collect()
}

/// Converts an expression into a sequence of tokens in infix order.
///
/// The expression is normalized first (see [`normalize`]). A `-` that
/// starts the expression, or follows anything other than a digit or `)`, is
/// folded into the literal right after it, so `3--5` yields `3`, `-`, `-5`.
///
/// # Errors
/// - `LexError::InvalidOperand` for a literal with more than one decimal
///   point, or a sign that is not followed by a literal.
/// - `LexError::InvalidOperator` for a character that matches nothing.
///
/// # Example
/// ```
/// use rpncalc::{
///     interpreter::lexer::tokenize,
///     operator::OperatorKind,
///     token::{Parenthesis, Token},
/// };
///
/// let tokens = tokenize("3-(-5)").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(3.0),
///                 Token::Operator(OperatorKind::Sub),
///                 Token::Parenthesis(Parenthesis::Open),
///                 Token::Number(-5.0),
///                 Token::Parenthesis(Parenthesis::Close)]);
/// ```
pub fn tokenize(expression: &str) -> LexResult<Vec<Token>> {
    let source = normalize(expression);
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(&source).spanned().peekable();

    while let Some((lexeme, span)) = lexer.next() {
        match lexeme {
            Ok(Lexeme::Literal) => tokens.push(Token::Number(parse_number(&source[span])?)),
            Ok(Lexeme::Open) => tokens.push(Token::Parenthesis(Parenthesis::Open)),
            Ok(Lexeme::Close) => tokens.push(Token::Parenthesis(Parenthesis::Close)),
            Ok(Lexeme::Operator(OperatorKind::Sub)) if is_sign(&source, span.start) => {
                let end = match lexer.peek() {
                    Some((Ok(Lexeme::Literal), literal)) => {
                        let end = literal.end;
                        lexer.next();
                        end
                    },
                    _ => span.end,
                };
                tokens.push(Token::Number(parse_number(&source[span.start..end])?));
            },
            Ok(Lexeme::Operator(kind)) => tokens.push(Token::Operator(kind)),
            Err(()) => {
                return Err(LexError::InvalidOperator { operator: source[span].chars()
                                                                              .take(1)
                                                                              .collect() });
            },
        }
    }

    log::debug!("tokens: {}", render(&tokens));
    Ok(tokens)
}

/// Decides whether the `-` at byte offset `start` is a sign.
fn is_sign(source: &str, start: usize) -> bool {
    source[..start].chars()
                   .next_back()
                   .is_none_or(|prev| prev == '(' || (!prev.is_ascii_digit() && prev != ')'))
}

/// Parses literal text, optionally signed, into a number.
fn parse_number(text: &str) -> LexResult<f64> {
    let invalid = || LexError::InvalidOperand { operand: text.to_string() };

    if text.matches('.').count() > 1 {
        return Err(invalid());
    }
    text.parse().map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(kind: OperatorKind) -> Token {
        Token::Operator(kind)
    }

    #[test]
    fn spaces_are_ignored() {
        assert_eq!(tokenize(" 2 +  3 ").unwrap(),
                   vec![Token::Number(2.0), op(OperatorKind::Add), Token::Number(3.0)]);
    }

    #[test]
    fn decimal_commas_become_points() {
        assert_eq!(tokenize("3,5").unwrap(), vec![Token::Number(3.5)]);
    }

    #[test]
    fn leading_and_trailing_points_parse() {
        assert_eq!(tokenize(".5").unwrap(), vec![Token::Number(0.5)]);
        assert_eq!(tokenize("5.").unwrap(), vec![Token::Number(5.0)]);
        assert_eq!(tokenize("-.25").unwrap(), vec![Token::Number(-0.25)]);
    }

    #[test]
    fn minus_after_operand_is_subtraction() {
        assert_eq!(tokenize("4-1").unwrap(),
                   vec![Token::Number(4.0), op(OperatorKind::Sub), Token::Number(1.0)]);
        assert_eq!(tokenize("(4)-1").unwrap()[3], op(OperatorKind::Sub));
    }

    #[test]
    fn minus_in_sign_position_is_folded() {
        assert_eq!(tokenize("-5").unwrap(), vec![Token::Number(-5.0)]);
        assert_eq!(tokenize("3--5").unwrap(),
                   vec![Token::Number(3.0), op(OperatorKind::Sub), Token::Number(-5.0)]);
        assert_eq!(tokenize("2*-3").unwrap(),
                   vec![Token::Number(2.0), op(OperatorKind::Mul), Token::Number(-3.0)]);
        assert_eq!(tokenize("(-1)").unwrap()[1], Token::Number(-1.0));
    }

    #[test]
    fn sign_without_literal_is_invalid_operand() {
        assert_eq!(tokenize("-(2)").unwrap_err(),
                   LexError::InvalidOperand { operand: "-".to_string() });
        assert_eq!(tokenize("-").unwrap_err(),
                   LexError::InvalidOperand { operand: "-".to_string() });
    }

    #[test]
    fn multi_character_operators_win() {
        assert_eq!(tokenize("1&&0").unwrap()[1], op(OperatorKind::LogicalAnd));
        assert_eq!(tokenize("1&0").unwrap()[1], op(OperatorKind::BitAnd));
        assert_eq!(tokenize("1<=0").unwrap()[1], op(OperatorKind::LessEqual));
        assert_eq!(tokenize("1<<0").unwrap()[1], op(OperatorKind::ShiftLeft));
        assert_eq!(tokenize("1<0").unwrap()[1], op(OperatorKind::Less));
        assert_eq!(tokenize("1||0").unwrap()[1], op(OperatorKind::LogicalOr));
        assert_eq!(tokenize("1^^0").unwrap()[1], op(OperatorKind::BitXor));
        assert_eq!(tokenize("1^0").unwrap()[1], op(OperatorKind::Pow));
        assert_eq!(tokenize("1!=0").unwrap()[1], op(OperatorKind::NotEqual));
    }

    #[test]
    fn unary_operators_lex_as_operators() {
        assert_eq!(tokenize("!0").unwrap(), vec![op(OperatorKind::LogicalNot), Token::Number(0.0)]);
        assert_eq!(tokenize("~-1").unwrap(), vec![op(OperatorKind::BitNot), Token::Number(-1.0)]);
    }

    #[test]
    fn malformed_literals_are_rejected() {
        assert_eq!(tokenize("1.2.3").unwrap_err(),
                   LexError::InvalidOperand { operand: "1.2.3".to_string() });
        assert_eq!(tokenize("-1.2.3").unwrap_err(),
                   LexError::InvalidOperand { operand: "-1.2.3".to_string() });
        assert_eq!(tokenize(".").unwrap_err(),
                   LexError::InvalidOperand { operand: ".".to_string() });
    }

    #[test]
    fn unknown_characters_are_rejected() {
        assert_eq!(tokenize("3 @ 4").unwrap_err(),
                   LexError::InvalidOperator { operator: "@".to_string() });
        assert!(matches!(tokenize("x+1"), Err(LexError::InvalidOperator { .. })));
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
