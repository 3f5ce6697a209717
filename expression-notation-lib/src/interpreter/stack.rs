use crate::interpreter::error::ExpressionError;

/// A last-in-first-out container, owned by whichever builder call created it.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Stack<T> {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn top(&self) -> Option<&T> {
        self.peek(0).ok()
    }

    /// Looks at the item `depth` places below the top, where the top itself is at depth 0.
    ///
    /// # Arguments
    ///
    /// * `depth`: How far down from the top to look.
    ///
    /// returns: The item, or [`ExpressionError::OutOfRange`] if the stack is not that deep.
    ///
    /// # Examples
    ///
    /// ```
    /// use expression_notation::interpreter::stack::Stack;
    ///
    /// let stack: Stack<i32> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(stack.peek(0), Ok(&3));
    /// assert_eq!(stack.peek(2), Ok(&1));
    /// assert!(stack.peek(3).is_err());
    /// ```
    pub fn peek(&self, depth: usize) -> Result<&T, ExpressionError> {
        let size = self.items.len();
        if depth >= size {
            return Err(ExpressionError::OutOfRange { index: depth, size });
        }
        Ok(&self.items[size - 1 - depth])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

/// Pushes the items in iteration order, so the last item ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}
