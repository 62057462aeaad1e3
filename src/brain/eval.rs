use log::debug;

use crate::brain::display::format_number;
use crate::brain::element::{BinaryOperator, ExpressionElement};
use crate::variables::Variables;

/// The `(result, description)` pair handed back after every mutation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Evaluation {
    pub result: Option<f64>,
    pub description: String,
}

impl Evaluation {
    /// True when the expression is incomplete or depends on an unresolved variable
    pub fn is_pending(&self) -> bool {
        self.result.is_none()
    }
}

/// Reduce the whole token log from scratch.
///
/// With `variables` set to `None`, any variable reference leaves the result absent;
/// with a table, a name missing from it reads as 0.
pub fn evaluate(elements: &[ExpressionElement], variables: Option<&Variables>) -> Evaluation {
    let evaluation = Reducer {
        elements,
        variables,
    }
    .expression(elements.len());

    debug!(
        "Reduced {} elements to {:?} \"{}\"",
        elements.len(),
        evaluation.result,
        evaluation.description
    );
    evaluation
}

struct Reducer<'a> {
    elements: &'a [ExpressionElement],
    variables: Option<&'a Variables>,
}

impl Reducer<'_> {
    /// Everything in `elements[..end]`, read as a left fold of terms joined by binary operators.
    ///
    /// Walks right to left collecting `(operator, second operand)` pairs, then folds them
    /// onto the leftmost term. Only unary operators nest.
    fn expression(&self, end: usize) -> Evaluation {
        let mut end = end;
        let mut pairs: Vec<(BinaryOperator, Evaluation)> = Vec::new();

        let head = loop {
            let Some(last) = end.checked_sub(1) else {
                break Evaluation::default();
            };

            match self.elements.get(last) {
                // `=` only closes what precedes it, and the fold continues through it
                Some(ExpressionElement::Equals) => {
                    end = self.checkpoint(last);
                    continue;
                }
                // Trailing operator still waiting for its second operand
                Some(ExpressionElement::Binary(op)) => {
                    pairs.push((*op, Evaluation::default()));
                    end = last;
                    continue;
                }
                _ => {}
            }

            let (second, start) = self.term(end);
            match start
                .checked_sub(1)
                .map(|before| (before, self.elements.get(before)))
            {
                Some((before, Some(ExpressionElement::Binary(op)))) => {
                    pairs.push((*op, second));
                    end = before;
                }
                // A fresh operand typed after a complete one starts over
                _ => break second,
            }
        };

        pairs
            .into_iter()
            .rev()
            .fold(head, |mut first, (op, second)| {
                first.result = match (first.result, second.result) {
                    (Some(a), Some(b)) => Some(op.apply(a, b)),
                    _ => None,
                };
                op.append_description(&mut first.description, &second.description);
                first
            })
    }

    /// End of the expression closed by an `=` at `equals`, dropping operators left dangling before it.
    fn checkpoint(&self, equals: usize) -> usize {
        let mut end = equals;
        while let Some(last) = end.checked_sub(1)
            && matches!(self.elements.get(last), Some(ExpressionElement::Binary(_)))
        {
            end = last;
        }
        end
    }

    /// The single operand ending at `end`, plus the index where it starts.
    fn term(&self, end: usize) -> (Evaluation, usize) {
        let Some(last) = end.checked_sub(1) else {
            return (Evaluation::default(), end);
        };

        match self.elements.get(last) {
            Some(ExpressionElement::Number(value)) => (
                Evaluation {
                    result: Some(*value),
                    description: format_number(*value),
                },
                last,
            ),
            Some(ExpressionElement::Constant(symbol, value)) => (
                Evaluation {
                    result: Some(*value),
                    description: symbol.clone(),
                },
                last,
            ),
            Some(ExpressionElement::Variable(name)) => {
                let result = self
                    .variables
                    .map(|variables| variables.get(name).unwrap_or(0.0));
                (
                    Evaluation {
                        result,
                        description: name.clone(),
                    },
                    last,
                )
            }
            Some(ExpressionElement::Unary(op)) => {
                let (operand, start) = self.term(last);
                (
                    Evaluation {
                        result: operand.result.map(|value| op.apply(value)),
                        description: op.describe(&operand.description),
                    },
                    start,
                )
            }
            Some(ExpressionElement::Equals) => (self.expression(self.checkpoint(last)), 0),
            Some(ExpressionElement::Binary(_)) | None => (Evaluation::default(), end),
        }
    }
}
