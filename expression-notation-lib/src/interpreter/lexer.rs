use crate::interpreter::token;
use crate::interpreter::token::Token;
use log::{trace, warn};

/// Splits a whitespace-separated expression into tokens.
///
/// Every token has to be separated from its neighbours by whitespace; `(5+3)*2`
/// is one chunk, not seven tokens. Chunks that cannot be part of an expression
/// are dropped.
///
/// # Arguments
///
/// * `expression`: The expression text, e.g. `( 5 + 3 ) * 2`.
///
/// returns: The tokens, in the order they appear in the text.
///
/// # Examples
///
/// ```
/// use expression_notation::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("-5 + x");
/// let texts: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
/// assert_eq!(texts, vec!["-5", "+", "x"]);
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let tokens: Vec<Token> = expression
        .split_whitespace()
        .filter(|chunk| is_lexeme(chunk))
        .map(Token::from)
        .collect();
    trace!("Tokenized {:?} into {:?}", expression, tokens);
    tokens
}

fn is_lexeme(chunk: &str) -> bool {
    // A lone minus is subtraction, anything longer starting with one must be a negative number.
    if chunk == "-" || (chunk.starts_with('-') && token::is_number(chunk)) {
        return true;
    }
    if token::is_operator(chunk) || token::is_parenthesis(chunk) {
        return true;
    }
    if token::is_number(chunk) || token::is_variable(chunk) {
        return true;
    }
    if chunk.chars().all(|character| character.is_ascii_alphanumeric()) {
        return true;
    }

    warn!("Dropping unrecognized chunk {:?}", chunk);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::operator::BinaryOperator;
    use pretty_assertions::assert_eq;

    fn texts(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(Token::to_string).collect()
    }

    #[test]
    fn parenthesised_expression_returns_tokens() {
        let tokens = tokenize("( 5 + 3 ) * 2");

        assert_eq!(texts(&tokens), vec!["(", "5", "+", "3", ")", "*", "2"]);
        assert_eq!(tokens[0], Token::OpenParenthesis);
        assert_eq!(tokens[2], Token::Operator(BinaryOperator::Add));
    }

    #[test]
    fn negative_numbers_are_single_tokens() {
        let tokens = tokenize("-5 + -3 * 2");

        assert_eq!(texts(&tokens), vec!["-5", "+", "-3", "*", "2"]);
        assert_eq!(tokens[0], Token::Number("-5".to_string()));
    }

    #[test]
    fn lone_minus_is_an_operator() {
        let tokens = tokenize("7 - 2");

        assert_eq!(tokens[1], Token::Operator(BinaryOperator::Subtract));
    }

    #[test]
    fn multi_character_variables_are_single_tokens() {
        let tokens = tokenize("AX * ( BX * CY )");

        assert_eq!(texts(&tokens), vec!["AX", "*", "(", "BX", "*", "CY", ")"]);
        assert_eq!(tokens[0], Token::Variable("AX".to_string()));
    }

    #[test]
    fn extra_whitespace_is_ignored() {
        let tokens = tokenize("  1\t+\n 2  ");

        assert_eq!(texts(&tokens), vec!["1", "+", "2"]);
    }

    #[test]
    fn unspaced_expression_is_dropped() {
        let tokens = tokenize("(5+3)*2");

        assert!(tokens.is_empty());
    }

    #[test]
    fn alphanumeric_chunk_starting_with_digit_is_unrecognized() {
        let tokens = tokenize("2x + 1");

        assert_eq!(tokens[0], Token::Unrecognized("2x".to_string()));
    }

    #[test]
    fn malformed_negative_number_is_dropped() {
        let tokens = tokenize("-5a + 1 . 2 $");

        assert_eq!(texts(&tokens), vec!["+", "1", "2"]);
    }
}
