pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod notation;
mod operator;
pub mod parser;
pub mod stack;
pub mod syntax;
pub mod token;
pub mod validator;

pub use crate::interpreter::operator::{Associativity, BinaryOperator};

use crate::interpreter::evaluator::evaluate;
use crate::interpreter::notation::{validate_notation, Notation};
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::debug;
use std::collections::HashMap;
use string_builder::Builder;
use syntax::expression_tree::Node;

/// Converts the given input string into an equivalent expression tree,
/// which is easier to manipulate than the original string.
///
/// # Arguments
///
/// * `expression`: The text of the expression, with whitespace between every token.
/// * `notation`: The notation the expression is claimed to be written in.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use expression_notation::interpreter::convert;
/// use expression_notation::interpreter::notation::Notation;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let expression = "( 5 + 3 ) * 2";
/// let tree = convert(expression, Notation::Infix)?;
/// let regenerated_tokens = tree.to_prefix();
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str, notation: Notation) -> Result<Node> {
    let tokens = lexer::tokenize(expression);
    validate_notation(&tokens, notation)
        .with_context(|| format!("'{}' is not a valid {} expression", expression, notation))?;
    let expression_tree = parser::parse(tokens, notation)
        .with_context(|| format!("Failed to build a tree from '{}'", expression))?;
    Ok(expression_tree)
}

/// Renders the tree in the given notation, one space between tokens.
///
/// Infix output is fully parenthesised, so rendering, converting and rendering
/// again gives back the same text.
///
/// # Examples
///
/// ```
/// use expression_notation::interpreter::{convert, render};
/// use expression_notation::interpreter::notation::Notation;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = convert("( 5 + 3 ) * 2", Notation::Infix)?;
/// assert_eq!(render(&tree, Notation::Infix)?, "( ( 5 + 3 ) * 2 )");
/// assert_eq!(render(&tree, Notation::Postfix)?, "5 3 + 2 *");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn render(tree: &Node, notation: Notation) -> Result<String> {
    let tokens = match notation {
        Notation::Infix => tree.to_infix(),
        Notation::Prefix => tree.to_prefix(),
        Notation::Postfix => tree.to_postfix(),
    };
    tokens_to_string(tokens)
}

/// Converts and evaluates an expression in one go.
///
/// # Arguments
///
/// * `expression`: The text of the expression.
/// * `notation`: The notation the expression is written in.
/// * `bindings`: Values for the variables used in the expression.
///
/// returns: The value of the expression.
pub fn evaluate_expression(
    expression: &str,
    notation: Notation,
    bindings: &HashMap<String, f64>,
) -> Result<f64> {
    let tree = convert(expression, notation)?;
    let value = evaluate(&tree, bindings)
        .with_context(|| format!("Failed to evaluate '{}'", expression))?;
    debug!("Evaluated {:?} to {}", tree, value);
    Ok(value)
}

/// Joins the given tokens with single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use expression_notation::interpreter::tokens_to_string;
/// use expression_notation::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::Variable("x".to_string()),
///     Token::Number("2".to_string()),
///     Token::from("^"),
/// ];
/// assert_eq!(tokens_to_string(tokens)?, "x 2 ^");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.into_iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}
