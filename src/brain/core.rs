use log::{debug, warn};

use crate::brain::element::ExpressionElement;
use crate::brain::errors::BrainError;
use crate::brain::eval::{Evaluation, evaluate};
use crate::brain::registry;
use crate::variables::Variables;

/// What `clear` does to the variable table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearPolicy {
    #[default]
    ResetVariables,
    KeepVariables,
}

/// Configuration for the calculator brain
#[derive(Debug, Clone, Default)]
pub struct BrainConfig {
    pub clear_policy: ClearPolicy,
}

/// Token log plus variable table. Every mutator re-reduces the whole log.
#[derive(Debug, Clone, Default)]
pub struct CalculatorBrain {
    elements: Vec<ExpressionElement>,
    variables: Variables,
    config: BrainConfig,
}

impl CalculatorBrain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BrainConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Get a reference to the brain configuration
    pub fn config(&self) -> &BrainConfig {
        &self.config
    }

    /// Append a typed number
    pub fn set_operand(&mut self, value: f64) -> Evaluation {
        self.push(ExpressionElement::Number(value))
    }

    /// Append a variable reference, declaring the variable at 0 on first use
    pub fn set_variable_operand(&mut self, name: &str) -> Evaluation {
        self.variables.declare(name);
        self.push(ExpressionElement::Variable(name.to_string()))
    }

    /// Append the element for `symbol`. Unknown symbols leave the log untouched.
    pub fn perform_operation(&mut self, symbol: &str) -> Evaluation {
        match self.try_perform_operation(symbol) {
            Ok(evaluation) => evaluation,
            Err(err) => {
                warn!("Ignoring operation: {}", err);
                self.evaluate()
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`BrainError::UnknownOperation`] when `symbol` is not registered;
    /// the log is left unchanged in that case.
    pub fn try_perform_operation(&mut self, symbol: &str) -> Result<Evaluation, BrainError> {
        let operation = registry::lookup(symbol)
            .ok_or_else(|| BrainError::UnknownOperation(symbol.to_string()))?;
        Ok(self.push(operation.to_element(symbol)))
    }

    /// Remove the most recent element, if any
    pub fn undo(&mut self) -> Evaluation {
        match self.elements.pop() {
            Some(element) => debug!("Undoing element {}", element),
            None => debug!("Nothing to undo"),
        }
        self.evaluate()
    }

    /// Empty the log, and the variable table unless the policy keeps it
    pub fn clear(&mut self) -> Evaluation {
        debug!("Clearing brain with policy {:?}", self.config.clear_policy);
        self.elements.clear();
        if self.config.clear_policy == ClearPolicy::ResetVariables {
            self.variables.clear();
        }
        Evaluation::default()
    }

    /// Assign a variable and re-evaluate the current log against it
    pub fn set_variable(&mut self, name: &str, value: f64) -> Evaluation {
        self.variables.set(name, value);
        self.evaluate()
    }

    /// # Errors
    ///
    /// Returns [`BrainError::UnknownVariable`] when `name` was never entered as an operand.
    pub fn try_set_variable(&mut self, name: &str, value: f64) -> Result<Evaluation, BrainError> {
        if !self.variables.contains(name) {
            return Err(BrainError::UnknownVariable(name.to_string()));
        }
        Ok(self.set_variable(name, value))
    }

    /// Evaluate the log against the brain's own variable table
    pub fn evaluate(&self) -> Evaluation {
        evaluate(&self.elements, Some(&self.variables))
    }

    /// Evaluate the log against an external table, or none at all
    pub fn evaluate_using(&self, variables: Option<&Variables>) -> Evaluation {
        evaluate(&self.elements, variables)
    }

    pub fn result_is_pending(&self) -> bool {
        self.evaluate().is_pending()
    }

    pub fn elements(&self) -> &[ExpressionElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut Variables {
        &mut self.variables
    }

    /// Whether the log references `name`
    pub fn uses_variable(&self, name: &str) -> bool {
        self.elements
            .iter()
            .any(|element| matches!(element, ExpressionElement::Variable(n) if n == name))
    }

    fn push(&mut self, element: ExpressionElement) -> Evaluation {
        debug!("Appending element {}", element);
        self.elements.push(element);
        self.evaluate()
    }
}
