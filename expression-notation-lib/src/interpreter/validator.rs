use crate::interpreter::error::ExpressionError;
use crate::interpreter::notation::Notation;
use crate::interpreter::token::Token;

/// Checks that the tokens form a well-formed infix expression.
///
/// Stops at the first problem found: an operator at either end, two operators
/// in a row, two operands in a row (there is no implicit multiplication),
/// unbalanced parentheses, or fewer operands than operators need.
///
/// # Arguments
///
/// * `tokens`: The tokens to check, in infix order.
///
/// returns: `Ok` if the tokens can be built into a tree, otherwise the reason they cannot.
///
/// # Examples
///
/// ```
/// use expression_notation::interpreter::lexer::tokenize;
/// use expression_notation::interpreter::validator::validate_infix;
///
/// assert!(validate_infix(&tokenize("( 5 + 3 ) * 2")).is_ok());
/// assert!(validate_infix(&tokenize("5 + * 3")).is_err());
/// ```
pub fn validate_infix(tokens: &[Token]) -> Result<(), ExpressionError> {
    let mut operand_count = 0;
    let mut operator_count = 0;
    let mut parentheses_balance: i64 = 0;
    let last_index = tokens.len().saturating_sub(1);

    for (index, token) in tokens.iter().enumerate() {
        let previous = index.checked_sub(1).map(|previous| &tokens[previous]);
        let after_operand = matches!(previous, Some(token) if ends_operand(token));

        match token {
            Token::OpenParenthesis => {
                parentheses_balance += 1;
                if after_operand {
                    return Err(ExpressionError::structural(
                        "Invalid syntax: Missing operator before opening parenthesis",
                    ));
                }
            }
            Token::CloseParenthesis => {
                parentheses_balance -= 1;
                if parentheses_balance < 0 {
                    return Err(ExpressionError::structural(
                        "Unbalanced parentheses: Too many closing parentheses",
                    ));
                }
                if !after_operand {
                    return Err(ExpressionError::structural(
                        "Invalid syntax: Missing operand before closing parenthesis",
                    ));
                }
            }
            Token::Operator(operator) => {
                operator_count += 1;
                if index == 0 || index == last_index {
                    return Err(ExpressionError::structural(
                        "Invalid expression: Operator cannot be at the start or end",
                    ));
                }
                match previous {
                    Some(Token::Operator(_)) => {
                        return Err(ExpressionError::structural(
                            "Invalid syntax: Consecutive operators",
                        ))
                    }
                    Some(Token::OpenParenthesis) => {
                        return Err(ExpressionError::structural(format!(
                            "Invalid syntax: Operator '{}' directly after opening parenthesis",
                            operator
                        )))
                    }
                    _ => {}
                }
            }
            Token::Number(_) | Token::Variable(_) => {
                operand_count += 1;
                if after_operand {
                    return Err(ExpressionError::structural(
                        "Invalid syntax: Missing operator between operands",
                    ));
                }
            }
            Token::Unrecognized(text) => return Err(invalid_token(Notation::Infix, text)),
        }
    }

    if parentheses_balance != 0 {
        return Err(ExpressionError::structural("Unbalanced parentheses"));
    }
    if operand_count <= operator_count {
        return Err(ExpressionError::structural(
            "Incomplete expression: Not enough operands for operators",
        ));
    }
    Ok(())
}

/// Checks that the tokens form exactly one complete postfix expression.
pub fn validate_postfix(tokens: &[Token]) -> Result<(), ExpressionError> {
    count_operands(tokens.iter(), Notation::Postfix)
}

/// Checks that the tokens form exactly one complete prefix expression.
///
/// Same as [`validate_postfix`], but reading the tokens from right to left.
pub fn validate_prefix(tokens: &[Token]) -> Result<(), ExpressionError> {
    count_operands(tokens.iter().rev(), Notation::Prefix)
}

/// Walks the tokens keeping track of how many finished operands are available;
/// each operator turns two of them into one.
fn count_operands<'a>(
    tokens: impl Iterator<Item = &'a Token>,
    notation: Notation,
) -> Result<(), ExpressionError> {
    let mut available: usize = 0;

    for token in tokens {
        match token {
            Token::Number(_) | Token::Variable(_) => available += 1,
            Token::Operator(operator) => {
                if available < 2 {
                    return Err(ExpressionError::structural(format!(
                        "{} validation error: Insufficient operands for operator '{}'",
                        notation, operator
                    )));
                }
                available -= 1;
            }
            other => return Err(invalid_token(notation, &other.to_string())),
        }
    }

    if available != 1 {
        return Err(ExpressionError::structural(format!(
            "Invalid {} expression: Incorrect number of operands",
            notation.to_string().to_lowercase()
        )));
    }
    Ok(())
}

/// Whether an operator is needed before the next operand or opening parenthesis.
fn ends_operand(token: &Token) -> bool {
    token.is_operand() || *token == Token::CloseParenthesis
}

fn invalid_token(notation: Notation, text: &str) -> ExpressionError {
    ExpressionError::structural(format!(
        "Invalid token in {} expression: {}",
        notation.to_string().to_lowercase(),
        text
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use parameterized_macro::parameterized;

    fn infix_error(expression: &str) -> String {
        validate_infix(&tokenize(expression))
            .unwrap_err()
            .to_string()
    }

    #[parameterized(
    expression = {
    "5 + 3 * 2",
    "( 5 + 3 ) * 2",
    "( ( a ) )",
    "x",
    "-5 - -3",
    "( AX * ( BX * ( ( ( CY + AY ) + BY ) * CX ) ) )",
    }
    )]
    fn well_formed_infix_validates(expression: &str) {
        validate_infix(&tokenize(expression)).unwrap();
    }

    #[parameterized(
    expression = {
    "+ 5 3",
    "5 3 +",
    "5 + * 3",
    "5 3 + 2",
    "( 5 + 3 ) 2",
    "5 ( 3 + 2 )",
    "( 5 + 3 ) ( 2 )",
    "( 5 + 3 ) )",
    "( ( 5 + 3 )",
    ") 5 + 3 (",
    },
    expected_error = {
    "Invalid expression: Operator cannot be at the start or end",
    "Invalid syntax: Missing operator between operands",
    "Invalid syntax: Consecutive operators",
    "Invalid syntax: Missing operator between operands",
    "Invalid syntax: Missing operator between operands",
    "Invalid syntax: Missing operator before opening parenthesis",
    "Invalid syntax: Missing operator before opening parenthesis",
    "Unbalanced parentheses: Too many closing parentheses",
    "Unbalanced parentheses",
    "Unbalanced parentheses: Too many closing parentheses",
    }
    )]
    fn malformed_infix_is_rejected(expression: &str, expected_error: &str) {
        assert_eq!(infix_error(expression), expected_error);
    }

    #[test]
    fn empty_parentheses_are_rejected() {
        assert_eq!(
            infix_error("5 + ( )"),
            "Invalid syntax: Missing operand before closing parenthesis"
        );
    }

    #[test]
    fn operator_inside_parenthesis_edge_is_rejected() {
        assert_eq!(
            infix_error("5 * ( + 3 )"),
            "Invalid syntax: Operator '+' directly after opening parenthesis"
        );
        assert_eq!(
            infix_error("( 5 + ) * 3"),
            "Invalid syntax: Missing operand before closing parenthesis"
        );
    }

    #[test]
    fn unrecognized_token_is_rejected_in_infix() {
        assert_eq!(infix_error("2x + 1"), "Invalid token in infix expression: 2x");
    }

    #[parameterized(
    expression = { "5 3 2 * +", "x", "a b + c d - *" }
    )]
    fn well_formed_postfix_validates(expression: &str) {
        validate_postfix(&tokenize(expression)).unwrap();
    }

    #[parameterized(
    expression = { "+ 5 * 3 2", "x", "* + a b - c d" }
    )]
    fn well_formed_prefix_validates(expression: &str) {
        validate_prefix(&tokenize(expression)).unwrap();
    }

    #[test]
    fn postfix_operator_without_two_operands_is_rejected() {
        let error = validate_postfix(&tokenize("5 + 3")).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Postfix validation error: Insufficient operands for operator '+'"
        );
    }

    #[test]
    fn prefix_with_leftover_operands_is_rejected() {
        let error = validate_prefix(&tokenize("+ 1 2 3")).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid prefix expression: Incorrect number of operands"
        );
    }

    #[test]
    fn parentheses_are_invalid_in_postfix() {
        let error = validate_postfix(&tokenize("( 1 2 + )")).unwrap_err();

        assert_eq!(error.to_string(), "Invalid token in postfix expression: (");
    }

    #[test]
    fn empty_postfix_is_rejected() {
        assert!(validate_postfix(&[]).is_err());
    }
}
