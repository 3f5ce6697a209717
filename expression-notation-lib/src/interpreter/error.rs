use crate::interpreter::notation::Notation;
use thiserror::Error;

/// Every way building or evaluating an expression can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpressionError {
    /// The tokens do not form a well-formed expression.
    #[error("{0}")]
    Structural(String),
    /// The tokens are well-formed, but written in another notation than the one claimed.
    #[error("Incorrect expression type. Expected {expected}, but got {actual} expression.")]
    TypeMismatch { expected: Notation, actual: Notation },
    #[error("Undefined variable: {0}")]
    UndefinedVariable(String),
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error("Index {index} is out of range for a container of size {size}")]
    OutOfRange { index: usize, size: usize },
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Division by zero!")]
    DivisionByZero,
    #[error("Modulo by zero!")]
    ModuloByZero,
}

impl ExpressionError {
    pub(crate) fn structural(reason: impl Into<String>) -> ExpressionError {
        ExpressionError::Structural(reason.into())
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, ExpressionError::Structural(_))
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(self, ExpressionError::Arithmetic(_))
    }
}
