use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::stack::Stack;
use crate::interpreter::syntax::syntax_visitor::{walk, SyntaxVisitor};
use crate::interpreter::token::Token;
use itertools::Itertools;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::mem;

/// Trees deeper than this are printed on one line instead of drawn.
const MAX_DRAWN_DEPTH: usize = 256;

/// A node of a binary expression tree. Each node owns its children outright.
pub enum Node {
    // Terminal symbols (leaves)
    Number(String),
    Variable(String),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
}

impl Node {
    pub fn new_number(text: String) -> Node {
        Node::Number(text)
    }

    pub fn new_variable(name: String) -> Node {
        Node::Variable(name)
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Number(_) | Node::Variable(_))
    }

    /// The text of the token this node was built from.
    pub fn value(&self) -> &str {
        match self {
            Node::Number(text) => text.as_str(),
            Node::Variable(name) => name.as_str(),
            Node::BinaryOperation { operator, .. } => operator.symbol(),
        }
    }

    pub fn as_binary_operator(&self) -> Option<BinaryOperator> {
        match self {
            Node::Number(_) | Node::Variable(_) => None,
            Node::BinaryOperation { operator, .. } => Some(*operator),
        }
    }

    /// Infix tokens where every operation is wrapped in parentheses, whatever its precedence.
    pub fn to_infix(&self) -> Vec<Token> {
        let mut visitor = InfixVisitor { tokens: Vec::new() };
        walk(self, &mut visitor);
        visitor.tokens
    }

    pub fn to_prefix(&self) -> Vec<Token> {
        let mut visitor = PrefixVisitor { tokens: Vec::new() };
        walk(self, &mut visitor);
        visitor.tokens
    }

    pub fn to_postfix(&self) -> Vec<Token> {
        let mut visitor = PostfixVisitor { tokens: Vec::new() };
        walk(self, &mut visitor);
        visitor.tokens
    }

    /// Names of all variables in the tree, in the order a pre-order walk first meets them.
    ///
    /// Lets a caller ask for exactly the bindings [`evaluate`](crate::interpreter::evaluator::evaluate)
    /// is going to need.
    pub fn collect_variable_names(&self) -> Vec<String> {
        let mut visitor = VariableVisitor { names: Vec::new() };
        walk(self, &mut visitor);
        visitor.names.into_iter().unique().collect()
    }

    /// Number of nodes on the longest path from this node down to a leaf, counting both ends.
    pub fn depth(&self) -> usize {
        let mut visitor = DepthVisitor {
            current: 0,
            deepest: 0,
        };
        walk(self, &mut visitor);
        visitor.deepest
    }

    /// Frees the whole tree.
    pub fn release(self) {
        drop(self)
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let depth = self.depth();
        if depth > MAX_DRAWN_DEPTH {
            return write!(f, "expression ({} levels deep): {:?}", depth, self);
        }

        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        walk(self, &mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        if write_tree(&visitor.builder.build(), &mut buffer).is_err() {
            return Err(fmt::Error);
        }
        let text = std::str::from_utf8(&buffer).map_err(|_| fmt::Error)?;
        f.write_str(text)
    }
}

/// Children are detached onto a work-list before their parent is freed, so
/// dropping a very deep tree does not recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut detached = Vec::new();
        detach_operation_children(self, &mut detached);
        while let Some(mut node) = detached.pop() {
            detach_operation_children(&mut node, &mut detached);
        }
    }
}

fn detach_operation_children(node: &mut Node, detached: &mut Vec<Node>) {
    if let Node::BinaryOperation {
        left_operand,
        right_operand,
        ..
    } = node
    {
        for child in [left_operand, right_operand] {
            if !child.is_leaf() {
                detached.push(mem::replace(&mut **child, Node::Number(String::new())));
            }
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        let mut visitor = CloneVisitor {
            operands: Stack::new(),
        };
        walk(self, &mut visitor);
        visitor
            .operands
            .pop()
            .unwrap_or_else(|| Node::new_number(String::new()))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending: Stack<(&Node, &Node)> = Stack::new();
        pending.push((self, other));

        while let Some(pair) = pending.pop() {
            match pair {
                (Node::Number(a), Node::Number(b)) | (Node::Variable(a), Node::Variable(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (
                    Node::BinaryOperation {
                        operator: operator_a,
                        left_operand: left_a,
                        right_operand: right_a,
                    },
                    Node::BinaryOperation {
                        operator: operator_b,
                        left_operand: left_b,
                        right_operand: right_b,
                    },
                ) => {
                    if operator_a != operator_b {
                        return false;
                    }
                    pending.push((right_a.as_ref(), right_b.as_ref()));
                    pending.push((left_a.as_ref(), left_b.as_ref()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_infix().iter().join(" "))
    }
}

struct InfixVisitor {
    tokens: Vec<Token>,
}

impl SyntaxVisitor for InfixVisitor {
    fn visit_number(&mut self, text: &str) {
        self.tokens.push(Token::Number(text.to_string()));
    }
    fn visit_variable(&mut self, name: &str) {
        self.tokens.push(Token::Variable(name.to_string()));
    }
    fn enter_binary_operation(&mut self, _operator: &BinaryOperator) {
        self.tokens.push(Token::OpenParenthesis);
    }
    fn between_operands(&mut self, operator: &BinaryOperator) {
        self.tokens.push(Token::Operator(*operator));
    }
    fn leave_binary_operation(&mut self, _operator: &BinaryOperator) {
        self.tokens.push(Token::CloseParenthesis);
    }
}

struct PrefixVisitor {
    tokens: Vec<Token>,
}

impl SyntaxVisitor for PrefixVisitor {
    fn visit_number(&mut self, text: &str) {
        self.tokens.push(Token::Number(text.to_string()));
    }
    fn visit_variable(&mut self, name: &str) {
        self.tokens.push(Token::Variable(name.to_string()));
    }
    fn enter_binary_operation(&mut self, operator: &BinaryOperator) {
        self.tokens.push(Token::Operator(*operator));
    }
}

struct PostfixVisitor {
    tokens: Vec<Token>,
}

impl SyntaxVisitor for PostfixVisitor {
    fn visit_number(&mut self, text: &str) {
        self.tokens.push(Token::Number(text.to_string()));
    }
    fn visit_variable(&mut self, name: &str) {
        self.tokens.push(Token::Variable(name.to_string()));
    }
    fn leave_binary_operation(&mut self, operator: &BinaryOperator) {
        self.tokens.push(Token::Operator(*operator));
    }
}

struct VariableVisitor {
    names: Vec<String>,
}

impl SyntaxVisitor for VariableVisitor {
    fn visit_variable(&mut self, name: &str) {
        self.names.push(name.to_string());
    }
}

struct DepthVisitor {
    current: usize,
    deepest: usize,
}

impl DepthVisitor {
    fn reach_leaf(&mut self) {
        self.deepest = self.deepest.max(self.current + 1);
    }
}

impl SyntaxVisitor for DepthVisitor {
    fn visit_number(&mut self, _text: &str) {
        self.reach_leaf();
    }
    fn visit_variable(&mut self, _name: &str) {
        self.reach_leaf();
    }
    fn enter_binary_operation(&mut self, _operator: &BinaryOperator) {
        self.current += 1;
    }
    fn leave_binary_operation(&mut self, _operator: &BinaryOperator) {
        self.current -= 1;
    }
}

/// Rebuilds the tree bottom-up, the same way postfix tokens are built into one.
struct CloneVisitor {
    operands: Stack<Node>,
}

impl SyntaxVisitor for CloneVisitor {
    fn visit_number(&mut self, text: &str) {
        self.operands.push(Node::new_number(text.to_string()));
    }
    fn visit_variable(&mut self, name: &str) {
        self.operands.push(Node::new_variable(name.to_string()));
    }
    fn leave_binary_operation(&mut self, operator: &BinaryOperator) {
        // Both operands were pushed by the walk before it left this operation.
        if let (Some(right_operand), Some(left_operand)) =
            (self.operands.pop(), self.operands.pop())
        {
            self.operands.push(Node::new_binary_operation(
                *operator,
                left_operand,
                right_operand,
            ));
        }
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_number(&mut self, text: &str) {
        self.builder.add_empty_child(text.to_string());
    }
    fn visit_variable(&mut self, name: &str) {
        self.builder.add_empty_child(name.to_string());
    }
    fn enter_binary_operation(&mut self, operator: &BinaryOperator) {
        self.builder.begin_child(format!("{}", operator));
    }
    fn leave_binary_operation(&mut self, _operator: &BinaryOperator) {
        self.builder.end_child();
    }
}
