use crate::interpreter::operator::{BinaryOperator, SYMBOLS};
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression.
///
/// Tokens are classified once, when they are created from their text, and
/// always display as the exact text they were created from.
#[derive(Clone, PartialEq)]
pub enum Token {
    Number(String),
    Variable(String),
    Operator(BinaryOperator),
    OpenParenthesis,
    CloseParenthesis,
    /// Alphanumeric text that is neither a number nor a variable, e.g. `2x`.
    ///
    /// Deliberately stricter than reading every alphanumeric chunk as a variable:
    /// a digit-led chunk is never accepted or skipped, and every validator
    /// rejects it by name.
    Unrecognized(String),
}

impl Token {
    /// An 'operand' is a token that either is or stands for a numerical value.
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Number(_) | Token::Variable(_))
    }

    pub fn is_operator(&self) -> bool {
        matches!(self, Token::Operator(_))
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        match text {
            "(" => Token::OpenParenthesis,
            ")" => Token::CloseParenthesis,
            text if is_operator(text) => match BinaryOperator::from_symbol(text) {
                Ok(operator) => Token::Operator(operator),
                Err(_) => Token::Unrecognized(text.to_string()),
            },
            text if is_number(text) => Token::Number(text.to_string()),
            text if is_variable(text) => Token::Variable(text.to_string()),
            text => Token::Unrecognized(text.to_string()),
        }
    }
}

pub fn is_operator(text: &str) -> bool {
    SYMBOLS.iter().any(|symbol| *symbol == text)
}

pub fn is_parenthesis(text: &str) -> bool {
    matches!(text, "(" | ")")
}

/// An optional leading `-`, then digits with at most one `.` among them.
pub fn is_number(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let mut has_decimal = false;
    let mut has_digit = false;

    for character in digits.chars() {
        match character {
            '.' if has_decimal => return false,
            '.' => has_decimal = true,
            '0'..='9' => has_digit = true,
            _ => return false,
        }
    }
    has_digit
}

/// A letter followed by any number of letters or digits.
pub fn is_variable(text: &str) -> bool {
    let mut characters = text.chars();
    match characters.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            characters.all(|character| character.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Variable(name) => write!(f, "{}", name),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
            Token::Unrecognized(text) => write!(f, "{}", text),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
