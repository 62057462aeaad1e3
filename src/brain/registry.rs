use std::f64::consts::{E, PI};

use crate::brain::element::{BinaryOperator, ExpressionElement, UnaryOperator};

/// What a button symbol does once pressed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Constant(f64),
    Unary(UnaryOperator),
    Binary(BinaryOperator),
    Equals,
}

/// Every symbol understood by [`lookup`], in keypad order
pub const SYMBOLS: [&str; 13] = [
    "π", "e", "√", "sin", "cos", "tan", "ln", "±", "+", "-", "×", "÷", "=",
];

/// Case-sensitive lookup of an operation symbol
pub fn lookup(symbol: &str) -> Option<Operation> {
    let operation = match symbol {
        "π" => Operation::Constant(PI),
        "e" => Operation::Constant(E),
        "√" => Operation::Unary(UnaryOperator::SquareRoot),
        "sin" => Operation::Unary(UnaryOperator::Sine),
        "cos" => Operation::Unary(UnaryOperator::Cosine),
        "tan" => Operation::Unary(UnaryOperator::Tangent),
        "ln" => Operation::Unary(UnaryOperator::NaturalLog),
        "±" => Operation::Unary(UnaryOperator::Negate),
        "+" => Operation::Binary(BinaryOperator::Add),
        "-" => Operation::Binary(BinaryOperator::Subtract),
        "×" => Operation::Binary(BinaryOperator::Multiply),
        "÷" => Operation::Binary(BinaryOperator::Divide),
        "=" => Operation::Equals,
        _ => return None,
    };
    Some(operation)
}

impl Operation {
    /// The token-log element recorded when `symbol` is pressed
    pub fn to_element(self, symbol: &str) -> ExpressionElement {
        match self {
            Operation::Constant(value) => ExpressionElement::Constant(symbol.to_string(), value),
            Operation::Unary(op) => ExpressionElement::Unary(op),
            Operation::Binary(op) => ExpressionElement::Binary(op),
            Operation::Equals => ExpressionElement::Equals,
        }
    }
}
