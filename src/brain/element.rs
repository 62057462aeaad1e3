/// Functions applied to a single operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    SquareRoot,
    Sine,
    Cosine,
    Tangent,
    NaturalLog,
    Negate,
}

impl UnaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOperator::SquareRoot => "√",
            UnaryOperator::Sine => "sin",
            UnaryOperator::Cosine => "cos",
            UnaryOperator::Tangent => "tan",
            UnaryOperator::NaturalLog => "ln",
            UnaryOperator::Negate => "±",
        }
    }

    /// Domain errors are left to IEEE semantics (`√(-1)` is NaN, `ln(0)` is -inf).
    pub fn apply(&self, operand: f64) -> f64 {
        match self {
            UnaryOperator::SquareRoot => operand.sqrt(),
            UnaryOperator::Sine => operand.sin(),
            UnaryOperator::Cosine => operand.cos(),
            UnaryOperator::Tangent => operand.tan(),
            UnaryOperator::NaturalLog => operand.ln(),
            UnaryOperator::Negate => -operand,
        }
    }

    pub fn describe(&self, operand: &str) -> String {
        format!("{}({})", self.symbol(), operand)
    }
}

/// Functions combining two operands, folded strictly left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "×",
            BinaryOperator::Divide => "÷",
        }
    }

    pub fn apply(&self, first: f64, second: f64) -> f64 {
        match self {
            BinaryOperator::Add => first + second,
            BinaryOperator::Subtract => first - second,
            BinaryOperator::Multiply => first * second,
            BinaryOperator::Divide => first / second,
        }
    }

    /// Infix the operator symbol between the two operand descriptions, extending `first`
    pub fn append_description(&self, first: &mut String, second: &str) {
        first.push_str(self.symbol());
        first.push_str(second);
    }
}

/// One entry of the token log
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionElement {
    Number(f64),
    Constant(String, f64),
    Variable(String),
    Unary(UnaryOperator),
    Binary(BinaryOperator),
    Equals,
}
