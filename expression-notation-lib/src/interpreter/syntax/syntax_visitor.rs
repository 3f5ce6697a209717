use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::stack::Stack;
use crate::interpreter::syntax::expression_tree::Node;

/// Callbacks for a depth-first walk of an expression tree, see [`walk`].
///
/// Every method has an empty default, so a visitor only implements the events it cares about.
/// For a binary operation the calls come in the order `enter_binary_operation`, left operand,
/// `between_operands`, right operand, `leave_binary_operation`.
pub(crate) trait SyntaxVisitor {
    fn visit_number(&mut self, _text: &str) {}
    fn visit_variable(&mut self, _name: &str) {}
    fn enter_binary_operation(&mut self, _operator: &BinaryOperator) {}
    fn between_operands(&mut self, _operator: &BinaryOperator) {}
    fn leave_binary_operation(&mut self, _operator: &BinaryOperator) {}
}

enum Step<'a> {
    Enter(&'a Node),
    Between(&'a BinaryOperator),
    Leave(&'a BinaryOperator),
}

/// Walks the tree from `root`, calling the visitor for every node.
///
/// Pending steps are kept on a heap-allocated work-list, so the depth of the tree
/// does not affect the depth of the call stack.
pub(crate) fn walk(root: &Node, visitor: &mut impl SyntaxVisitor) {
    let mut pending: Stack<Step> = Stack::new();
    pending.push(Step::Enter(root));

    while let Some(step) = pending.pop() {
        match step {
            Step::Enter(Node::Number(text)) => visitor.visit_number(text),
            Step::Enter(Node::Variable(name)) => visitor.visit_variable(name),
            Step::Enter(Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            }) => {
                visitor.enter_binary_operation(operator);
                pending.push(Step::Leave(operator));
                pending.push(Step::Enter(right_operand));
                pending.push(Step::Between(operator));
                pending.push(Step::Enter(left_operand));
            }
            Step::Between(operator) => visitor.between_operands(operator),
            Step::Leave(operator) => visitor.leave_binary_operation(operator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_complex_tree() -> Node {
        let a = Node::new_variable("a".into());
        let b = Node::new_variable("b".into());
        let c = Node::new_number("2".into());
        let d = Node::new_variable("d".into());
        let second_plus = Node::new_binary_operation(BinaryOperator::Add, b, c);
        let star = Node::new_binary_operation(BinaryOperator::Multiply, second_plus, d);
        Node::new_binary_operation(BinaryOperator::Add, a, star)
    }

    struct PrePostPrintVisitor {
        prints: Vec<String>,
    }

    impl SyntaxVisitor for PrePostPrintVisitor {
        fn visit_number(&mut self, text: &str) {
            self.prints.push(text.to_string())
        }
        fn visit_variable(&mut self, name: &str) {
            self.prints.push(name.to_string())
        }
        fn enter_binary_operation(&mut self, operator: &BinaryOperator) {
            self.prints.push(format!("{:?}", operator));
        }
        fn leave_binary_operation(&mut self, operator: &BinaryOperator) {
            self.prints.push(format!("exit {:?}", operator));
        }
    }

    struct LeafCountVisitor {
        leaves: usize,
    }

    impl SyntaxVisitor for LeafCountVisitor {
        fn visit_number(&mut self, _text: &str) {
            self.leaves += 1
        }
        fn visit_variable(&mut self, _name: &str) {
            self.leaves += 1
        }
    }

    #[test]
    fn walk_tree_prints_all_nodes_in_tree_in_pre_and_post_orders() {
        let root = create_complex_tree();
        println!("{}", root);
        let mut visitor = PrePostPrintVisitor { prints: vec![] };
        walk(&root, &mut visitor);
        assert_eq!(
            visitor.prints,
            [
                "Add",
                "a",
                "Multiply",
                "Add",
                "b",
                "2",
                "exit Add",
                "d",
                "exit Multiply",
                "exit Add",
            ]
        )
    }

    #[test]
    fn default_walk_reaches_every_leaf() {
        let root = create_complex_tree();
        let mut visitor = LeafCountVisitor { leaves: 0 };

        walk(&root, &mut visitor);

        assert_eq!(visitor.leaves, 4);
    }

    #[test]
    fn walking_very_deep_tree_does_not_overflow_stack() {
        let mut root = Node::new_variable("x".into());
        for _ in 0..100_000 {
            root = Node::new_binary_operation(
                BinaryOperator::Subtract,
                Node::new_number("1".into()),
                root,
            );
        }
        let mut visitor = LeafCountVisitor { leaves: 0 };

        walk(&root, &mut visitor);

        assert_eq!(visitor.leaves, 100_001);
    }
}
