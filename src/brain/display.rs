use std::fmt;

use crate::brain::element::ExpressionElement;
use crate::brain::eval::Evaluation;

/// Numeral rendering used in descriptions: integral values drop the fraction
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

impl fmt::Display for ExpressionElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExpressionElement::Number(n) => write!(f, "{}", format_number(*n)),
            ExpressionElement::Constant(symbol, _) => write!(f, "{}", symbol),
            ExpressionElement::Variable(name) => write!(f, "{}", name),
            ExpressionElement::Unary(op) => write!(f, "{}", op.symbol()),
            ExpressionElement::Binary(op) => write!(f, "{}", op.symbol()),
            ExpressionElement::Equals => write!(f, "="),
        }
    }
}

impl Evaluation {
    /// Calculator display line: `…` while pending, `=` once resolved
    pub fn display_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_pending() {
            write!(f, "{}…", self.description)
        } else {
            write!(f, "{}=", self.description)
        }
    }
}
