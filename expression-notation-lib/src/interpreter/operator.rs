use crate::interpreter::error::{ArithmeticError, ExpressionError};
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Exponentiate,
}

/// Every operator symbol the lexer accepts.
pub(crate) static SYMBOLS: [&str; 6] = ["+", "-", "*", "/", "%", "^"];

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Exponentiate => "^",
        }
    }

    pub fn from_symbol(symbol: &str) -> Result<BinaryOperator, ExpressionError> {
        match symbol {
            "+" => Ok(BinaryOperator::Add),
            "-" => Ok(BinaryOperator::Subtract),
            "*" => Ok(BinaryOperator::Multiply),
            "/" => Ok(BinaryOperator::Divide),
            "%" => Ok(BinaryOperator::Modulo),
            "^" => Ok(BinaryOperator::Exponentiate),
            other => Err(ExpressionError::InvalidOperator(other.to_string())),
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide
            | BinaryOperator::Modulo => Associativity::Left,
            BinaryOperator::Exponentiate => Associativity::Right,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => 2,
            BinaryOperator::Exponentiate => 3,
        }
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    /// Whether this operator, sitting on top of the operator stack, has to be reduced
    /// before `incoming` can be pushed.
    pub(crate) fn binds_before(&self, incoming: &Self) -> bool {
        self.precedence_gt(incoming)
            || (self.precedence_eq(incoming) && incoming.associativity() == Associativity::Left)
    }

    /// Applies the operator to two operands.
    ///
    /// Division and modulo check for an exactly-zero divisor before dividing,
    /// and modulo is the floating-point remainder.
    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64, ArithmeticError> {
        match self {
            BinaryOperator::Add => Ok(a + b),
            BinaryOperator::Subtract => Ok(a - b),
            BinaryOperator::Multiply => Ok(a * b),
            BinaryOperator::Divide if b == 0.0 => Err(ArithmeticError::DivisionByZero),
            BinaryOperator::Divide => Ok(a / b),
            BinaryOperator::Modulo if b == 0.0 => Err(ArithmeticError::ModuloByZero),
            BinaryOperator::Modulo => Ok(a % b),
            BinaryOperator::Exponentiate => Ok(a.powf(b)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl str::FromStr for BinaryOperator {
    type Err = ExpressionError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        BinaryOperator::from_symbol(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn operator_equality_correspond_with_precedence() {
        let equal1 = BinaryOperator::Multiply;
        let equal2 = BinaryOperator::Modulo;
        assert!(equal1.precedence_eq(&equal2))
    }

    #[test]
    fn operator_gt_correspond_with_precedence() {
        let greater = BinaryOperator::Exponentiate;
        let lesser = BinaryOperator::Divide;
        assert!(greater.precedence_gt(&lesser))
    }

    #[test]
    fn only_exponentiation_is_right_associative() {
        let right_associative: Vec<_> = SYMBOLS
            .iter()
            .map(|symbol| BinaryOperator::from_symbol(symbol).unwrap())
            .filter(|operator| operator.associativity() == Associativity::Right)
            .collect();

        assert_eq!(right_associative, vec![BinaryOperator::Exponentiate]);
    }

    #[test]
    fn equal_precedence_left_associative_operator_is_reduced_first() {
        assert!(BinaryOperator::Subtract.binds_before(&BinaryOperator::Add));
        assert!(!BinaryOperator::Exponentiate.binds_before(&BinaryOperator::Exponentiate));
        assert!(!BinaryOperator::Add.binds_before(&BinaryOperator::Multiply));
    }

    #[test]
    fn unknown_symbol_is_invalid_operator() {
        let error = "&".parse::<BinaryOperator>().unwrap_err();

        assert_eq!(error, ExpressionError::InvalidOperator("&".to_string()));
    }

    #[parameterized(
    symbol = { "+", "-", "*", "/", "%", "^" },
    expected = { 9.0, 5.0, 14.0, 3.5, 1.0, 49.0 }
    )]
    fn evaluate_applies_operator(symbol: &str, expected: f64) {
        let operator = BinaryOperator::from_symbol(symbol).unwrap();

        let actual = operator.evaluate(7.0, 2.0).unwrap();

        assert!((actual - expected).abs() < 1e-12);
    }

    #[test]
    fn modulo_is_floating_point_remainder() {
        let actual = BinaryOperator::Modulo.evaluate(7.5, 2.0).unwrap();

        assert!((actual - 1.5).abs() < 1e-12);
    }

    #[test]
    fn dividing_by_zero_fails() {
        assert_eq!(
            BinaryOperator::Divide.evaluate(10.0, 0.0),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(
            BinaryOperator::Modulo.evaluate(10.0, -0.0),
            Err(ArithmeticError::ModuloByZero)
        );
    }
}
