use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::stack::Stack;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;

/// Builds an expression tree from infix tokens using an operand stack and an operator stack.
///
/// Expects tokens that already passed [`validate_infix`](crate::interpreter::validator::validate_infix);
/// anything that still cannot be reduced is reported as a structural error.
///
/// # Arguments
///
/// * `tokens`: Tokens, ordered in infix notation, to convert to an expression tree.
///
/// returns: The root of the generated expression tree.
pub fn build_infix_tree(tokens: Vec<Token>) -> Result<Node, ExpressionError> {
    let mut operands: Stack<Node> = Stack::with_capacity(tokens.len());
    let mut operators: Stack<Token> = Stack::new();

    for token in tokens {
        match token {
            Token::Number(text) => operands.push(Node::new_number(text)),
            Token::Variable(name) => operands.push(Node::new_variable(name)),
            Token::OpenParenthesis => operators.push(token),
            Token::CloseParenthesis => {
                reduce_parenthesised(&mut operators, &mut operands)?;
            }
            Token::Operator(operator) => {
                while let Some(&Token::Operator(top)) = operators.top() {
                    if !top.binds_before(&operator) {
                        break;
                    }
                    operators.pop();
                    reduce(&mut operands, top)?;
                }
                operators.push(token);
            }
            Token::Unrecognized(text) => {
                return Err(ExpressionError::structural(format!(
                    "Invalid token in infix expression: {}",
                    text
                )))
            }
        }
    }

    transfer_leftover_operators(&mut operators, &mut operands)?;

    let root = operands
        .pop()
        .ok_or_else(|| ExpressionError::structural("No tree root found"))?;
    if !operands.is_empty() {
        return Err(ExpressionError::structural(
            "Invalid syntax: Missing operator between operands",
        ));
    }
    Ok(root)
}

/// Reduces operators until the matching opening parenthesis, which is discarded.
fn reduce_parenthesised(
    operators: &mut Stack<Token>,
    operands: &mut Stack<Node>,
) -> Result<(), ExpressionError> {
    loop {
        match operators.pop() {
            Some(Token::OpenParenthesis) => return Ok(()),
            Some(Token::Operator(operator)) => reduce(operands, operator)?,
            _ => return Err(ExpressionError::structural("Mismatched parenthesis")),
        }
    }
}

fn transfer_leftover_operators(
    operators: &mut Stack<Token>,
    operands: &mut Stack<Node>,
) -> Result<(), ExpressionError> {
    while let Some(token) = operators.pop() {
        match token {
            Token::Operator(operator) => reduce(operands, operator)?,
            _ => return Err(ExpressionError::structural("Mismatched parenthesis")),
        }
    }
    Ok(())
}

/// Replaces the top two operands with a single operation node. The right operand is on top.
fn reduce(operands: &mut Stack<Node>, operator: BinaryOperator) -> Result<(), ExpressionError> {
    let right_operand = operands.pop().ok_or_else(|| missing_operand(operator))?;
    let left_operand = operands.pop().ok_or_else(|| missing_operand(operator))?;
    operands.push(Node::new_binary_operation(
        operator,
        left_operand,
        right_operand,
    ));
    Ok(())
}

fn missing_operand(operator: BinaryOperator) -> ExpressionError {
    ExpressionError::structural(format!("Expected two operands for operator '{}'", operator))
}
