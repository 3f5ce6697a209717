mod infix_builder;
mod stack_builder;

use crate::interpreter::error::ExpressionError;
use crate::interpreter::notation::Notation;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;
use crate::interpreter::validator::{validate_infix, validate_postfix, validate_prefix};
use log::debug;

pub use infix_builder::build_infix_tree;
pub use stack_builder::{build_postfix_tree, build_prefix_tree};

/// Parses the given tokens into an equivalent expression tree,
/// which is easier to manipulate than the original tokens.
///
/// The tokens are checked to be a well-formed expression of the given notation
/// before the tree is built.
///
/// # Arguments
///
/// * `tokens`: The tokens to parse.
/// * `notation`: The notation the tokens are written in.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use expression_notation::interpreter::lexer::tokenize;
/// use expression_notation::interpreter::notation::Notation;
/// use expression_notation::interpreter::parser::parse;
/// # use expression_notation::interpreter::error::ExpressionError;
///
/// # fn main() -> Result<(), ExpressionError> {
/// let tokens = tokenize("* + 5 3 2");
/// let tree = parse(tokens, Notation::Prefix)?;
/// let regenerated_tokens = tree.to_postfix();
/// # Ok(()) }
/// ```
pub fn parse(tokens: Vec<Token>, notation: Notation) -> Result<Node, ExpressionError> {
    let tree = match notation {
        Notation::Infix => parse_infix(tokens),
        Notation::Prefix => parse_prefix(tokens),
        Notation::Postfix => parse_postfix(tokens),
    }?;
    debug!("Built {} tree {:?}", notation, tree);
    Ok(tree)
}

pub fn parse_infix(tokens: Vec<Token>) -> Result<Node, ExpressionError> {
    if tokens.len() < 3 {
        return Err(ExpressionError::structural(
            "Incomplete expression: Not enough operands",
        ));
    }
    validate_infix(&tokens)?;
    build_infix_tree(tokens)
}

pub fn parse_prefix(tokens: Vec<Token>) -> Result<Node, ExpressionError> {
    validate_prefix(&tokens)?;
    build_prefix_tree(tokens)
}

pub fn parse_postfix(tokens: Vec<Token>) -> Result<Node, ExpressionError> {
    validate_postfix(&tokens)?;
    build_postfix_tree(tokens)
}
