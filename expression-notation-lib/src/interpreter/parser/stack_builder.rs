use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::stack::Stack;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;

/// Which of an operator's children is popped off the stack first.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum FirstPopped {
    Left,
    Right,
}

/// Generates an expression tree from prefix tokens, reading them from right to left.
///
/// # Arguments
///
/// * `tokens`: Tokens, ordered in prefix notation, to convert to an expression tree.
///
/// returns: The root of the generated expression tree.
pub fn build_prefix_tree(tokens: Vec<Token>) -> Result<Node, ExpressionError> {
    build_tree(tokens.into_iter().rev(), FirstPopped::Left)
}

/// Generates an expression tree from postfix tokens, reading them from left to right.
///
/// # Arguments
///
/// * `tokens`: Tokens, ordered in postfix notation, to convert to an expression tree.
///
/// returns: The root of the generated expression tree.
pub fn build_postfix_tree(tokens: Vec<Token>) -> Result<Node, ExpressionError> {
    build_tree(tokens.into_iter(), FirstPopped::Right)
}

fn build_tree(
    tokens: impl Iterator<Item = Token>,
    first_popped: FirstPopped,
) -> Result<Node, ExpressionError> {
    let mut operands: Stack<Node> = Stack::new();

    for token in tokens {
        match token {
            Token::Number(text) => operands.push(Node::new_number(text)),
            Token::Variable(name) => operands.push(Node::new_variable(name)),
            Token::Operator(operator) => {
                let first = pop_operand(&mut operands, operator)?;
                let second = pop_operand(&mut operands, operator)?;
                let node = match first_popped {
                    FirstPopped::Left => Node::new_binary_operation(operator, first, second),
                    FirstPopped::Right => Node::new_binary_operation(operator, second, first),
                };
                operands.push(node);
            }
            Token::OpenParenthesis | Token::CloseParenthesis | Token::Unrecognized(_) => {
                return Err(ExpressionError::structural(format!(
                    "Unexpected token '{}' while building tree",
                    token
                )))
            }
        }
    }

    let root = operands
        .pop()
        .ok_or_else(|| ExpressionError::structural("No tree root found"))?;
    if !operands.is_empty() {
        return Err(ExpressionError::structural(format!(
            "Expression has {} operands left over without an operator",
            operands.len()
        )));
    }
    Ok(root)
}

fn pop_operand(
    operands: &mut Stack<Node>,
    operator: BinaryOperator,
) -> Result<Node, ExpressionError> {
    operands.pop().ok_or_else(|| {
        ExpressionError::structural(format!("Expected two operands for operator '{}'", operator))
    })
}
