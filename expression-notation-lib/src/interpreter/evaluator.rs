use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::stack::Stack;
use crate::interpreter::syntax::expression_tree::Node;
use std::collections::HashMap;

/// Reduces an expression tree to a single number.
///
/// # Arguments
///
/// * `node`: The root of the tree to evaluate.
/// * `bindings`: A value for each variable in the tree, see
///   [`Node::collect_variable_names`].
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use expression_notation::interpreter::convert;
/// use expression_notation::interpreter::evaluator::evaluate;
/// use expression_notation::interpreter::notation::Notation;
/// use std::collections::HashMap;
///
/// let tree = convert("x ^ 2 + 1", Notation::Infix)?;
/// let bindings = HashMap::from([("x".to_string(), 3.0)]);
///
/// assert_eq!(evaluate(&tree, &bindings)?, 10.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(node: &Node, bindings: &HashMap<String, f64>) -> Result<f64, ExpressionError> {
    let mut pending: Stack<Step> = Stack::new();
    let mut values: Stack<f64> = Stack::new();
    pending.push(Step::Evaluate(node));

    while let Some(step) = pending.pop() {
        match step {
            Step::Evaluate(Node::Number(text)) => values.push(text.parse::<f64>().map_err(|_| {
                ExpressionError::structural(format!("Could not read '{}' as a number", text))
            })?),
            Step::Evaluate(Node::Variable(name)) => values.push(
                bindings
                    .get(name)
                    .copied()
                    .ok_or_else(|| ExpressionError::UndefinedVariable(name.to_string()))?,
            ),
            Step::Evaluate(Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            }) => {
                pending.push(Step::Apply(*operator));
                pending.push(Step::Evaluate(right_operand));
                pending.push(Step::Evaluate(left_operand));
            }
            Step::Apply(operator) => {
                let right = pop_value(&mut values, operator)?;
                let left = pop_value(&mut values, operator)?;
                values.push(operator.evaluate(left, right)?);
            }
        }
    }

    values
        .pop()
        .ok_or_else(|| ExpressionError::structural("Nothing was evaluated"))
}

/// Post-order work item: operands are evaluated onto the value stack before their operator is applied.
enum Step<'a> {
    Evaluate(&'a Node),
    Apply(BinaryOperator),
}

fn pop_value(values: &mut Stack<f64>, operator: BinaryOperator) -> Result<f64, ExpressionError> {
    values.pop().ok_or_else(|| {
        ExpressionError::structural(format!("Expected two operands for operator '{}'", operator))
    })
}
