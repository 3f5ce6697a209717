use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::Token;
use log::debug;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// Where the operators of an expression are written, relative to their operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `A + B`
    Infix,
    /// `+ A B`
    Prefix,
    /// `A B +`
    Postfix,
}

/// Guesses the notation of a token sequence from where its operators are.
///
/// A leading operator means prefix, a trailing one postfix, and an operator
/// anywhere in between infix.
///
/// # Arguments
///
/// * `tokens`: A non-empty token sequence.
///
/// returns: The detected notation, or a structural error if the tokens contain no operator.
///
/// # Examples
///
/// ```
/// use expression_notation::interpreter::lexer::tokenize;
/// use expression_notation::interpreter::notation::{determine_notation, Notation};
///
/// let tokens = tokenize("5 3 2 * +");
/// assert_eq!(determine_notation(&tokens), Ok(Notation::Postfix));
/// ```
pub fn determine_notation(tokens: &[Token]) -> Result<Notation, ExpressionError> {
    let undetermined = || ExpressionError::structural("Unable to determine expression type");

    let first = tokens.first().ok_or_else(undetermined)?;
    let last = tokens.last().ok_or_else(undetermined)?;

    if first.is_operator() {
        return Ok(Notation::Prefix);
    }
    if last.is_operator() {
        return Ok(Notation::Postfix);
    }
    if tokens.len() > 2 && tokens[1..tokens.len() - 1].iter().any(Token::is_operator) {
        return Ok(Notation::Infix);
    }

    Err(undetermined())
}

/// Checks that the tokens are written in the notation the caller claims they are.
pub fn validate_notation(tokens: &[Token], expected: Notation) -> Result<(), ExpressionError> {
    if tokens.is_empty() {
        return Err(ExpressionError::structural(
            "Empty expression. Enter an expression and leave spaces between tokens, operators, and parentheses",
        ));
    }

    let actual = determine_notation(tokens)?;
    debug!("Detected {} notation, expected {}", actual, expected);
    if actual != expected {
        return Err(ExpressionError::TypeMismatch { expected, actual });
    }
    Ok(())
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Infix => write!(f, "Infix"),
            Notation::Prefix => write!(f, "Prefix"),
            Notation::Postfix => write!(f, "Postfix"),
        }
    }
}

impl str::FromStr for Notation {
    type Err = ExpressionError;

    fn from_str(input: &str) -> Result<Notation, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "infix" | "in" | "1" => Ok(Notation::Infix),
            "prefix" | "pre" | "2" => Ok(Notation::Prefix),
            "postfix" | "post" | "3" => Ok(Notation::Postfix),
            other => Err(ExpressionError::structural(format!(
                "Unknown notation '{}', expected infix, prefix or postfix",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use parameterized_macro::parameterized;

    #[parameterized(
    expression = { "5 + 3 * 2", "+ 5 * 3 2", "5 3 2 * +", "( 1 + 2 )", "- x y" },
    expected = { Notation::Infix, Notation::Prefix, Notation::Postfix, Notation::Infix, Notation::Prefix }
    )]
    fn determine_notation_detects_operator_position(expression: &str, expected: Notation) {
        let tokens = tokenize(expression);

        assert_eq!(determine_notation(&tokens), Ok(expected));
    }

    #[parameterized(
    expression = { "5", "x y", "( x )" }
    )]
    fn expression_without_operators_is_undetermined(expression: &str) {
        let tokens = tokenize(expression);

        let error = determine_notation(&tokens).unwrap_err();

        assert_eq!(error.to_string(), "Unable to determine expression type");
    }

    #[test]
    fn lone_operator_is_prefix() {
        let tokens = tokenize("+");

        assert_eq!(determine_notation(&tokens), Ok(Notation::Prefix));
    }

    #[test]
    fn matching_notation_validates() {
        let tokens = tokenize("5 + 3 * 2");

        validate_notation(&tokens, Notation::Infix).unwrap();
    }

    #[test]
    fn prefix_tokens_claimed_as_infix_is_type_mismatch() {
        let tokens = tokenize("+ 5 * 3 2");

        let error = validate_notation(&tokens, Notation::Infix).unwrap_err();

        assert_eq!(
            error,
            ExpressionError::TypeMismatch {
                expected: Notation::Infix,
                actual: Notation::Prefix
            }
        );
    }

    #[test]
    fn empty_expression_is_structural_error() {
        let error = validate_notation(&[], Notation::Postfix).unwrap_err();

        assert!(error.is_structural());
    }

    #[parameterized(
    input = { "infix", "PREFIX", " post ", "1", "3" },
    expected = { Notation::Infix, Notation::Prefix, Notation::Postfix, Notation::Infix, Notation::Postfix }
    )]
    fn notation_parses_from_name_or_menu_number(input: &str, expected: Notation) {
        assert_eq!(input.parse::<Notation>(), Ok(expected));
    }

    #[test]
    fn unknown_notation_does_not_parse() {
        assert!("sideways".parse::<Notation>().is_err());
    }
}
