use log::{debug, warn};

use crate::brain::{CalculatorBrain, Evaluation, registry};
use crate::input::errors::InputError;

/// A single calculator key press read from text
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Number(f64),
    Variable(String),
    Operator(String),
    Assign { name: String, value: f64 },
    Undo,
    Clear,
}

/// ASCII spellings accepted for keypad symbols
const ALIASES: [(&str, &str); 6] = [
    ("pi", "π"),
    ("sqrt", "√"),
    ("*", "×"),
    ("/", "÷"),
    ("neg", "±"),
    ("+/-", "±"),
];

const UNDO_WORDS: [&str; 2] = ["undo", "u"];
const CLEAR_WORDS: [&str; 2] = ["clear", "ac"];

fn canonical_symbol(word: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == word)
        .map_or(word, |(_, symbol)| *symbol)
}

fn is_reserved(word: &str) -> bool {
    UNDO_WORDS.contains(&word)
        || CLEAR_WORDS.contains(&word)
        || registry::lookup(canonical_symbol(word)).is_some()
}

/// # Errors
///
/// Returns an error if the name is empty, does not start with an ASCII letter,
/// contains anything besides ASCII alphanumerics and `_`, or collides with a keypad word.
pub fn validate_variable_name(name: &str) -> Result<(), InputError> {
    let mut chars = name.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_is_valid = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if !starts_with_letter || !rest_is_valid || is_reserved(name) {
        warn!("Rejecting variable name: '{}'", name);
        return Err(InputError::InvalidVariableName(name.to_string()));
    }
    Ok(())
}

fn parse_number(word: &str) -> Result<Option<f64>, InputError> {
    match word.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        Ok(_) => Err(InputError::InvalidNumber(word.to_string())),
        Err(_) => Ok(None),
    }
}

/// # Errors
///
/// Returns an error if the word is empty, is a malformed assignment, or is not a
/// number, keypad symbol, command, or valid variable name.
pub fn parse_input(word: &str) -> Result<Input, InputError> {
    let word = word.trim();
    debug!("Parsing input word: '{}'", word);

    if word.is_empty() {
        return Err(InputError::EmptyInput);
    }
    if UNDO_WORDS.contains(&word) {
        return Ok(Input::Undo);
    }
    if CLEAR_WORDS.contains(&word) {
        return Ok(Input::Clear);
    }

    let symbol = canonical_symbol(word);
    if registry::lookup(symbol).is_some() {
        return Ok(Input::Operator(symbol.to_string()));
    }

    if let Some((name, value)) = word.split_once('=')
        && !name.is_empty()
        && !value.is_empty()
    {
        validate_variable_name(name)?;
        let value = parse_number(value)?
            .ok_or_else(|| InputError::InvalidNumber(value.to_string()))?;
        return Ok(Input::Assign {
            name: name.to_string(),
            value,
        });
    }

    if let Some(value) = parse_number(word)? {
        return Ok(Input::Number(value));
    }

    if validate_variable_name(word).is_ok() {
        return Ok(Input::Variable(word.to_string()));
    }

    Err(InputError::UnrecognizedInput(word.to_string()))
}

/// # Errors
///
/// Returns the first error from [`parse_input`] among the whitespace-separated words.
pub fn parse_line(line: &str) -> Result<Vec<Input>, InputError> {
    line.split_whitespace().map(parse_input).collect()
}

impl Input {
    /// Press this key on `brain`, returning the fresh evaluation
    pub fn apply(&self, brain: &mut CalculatorBrain) -> Evaluation {
        match self {
            Input::Number(value) => brain.set_operand(*value),
            Input::Variable(name) => brain.set_variable_operand(name),
            Input::Operator(symbol) => brain.perform_operation(symbol),
            Input::Assign { name, value } => match brain.try_set_variable(name, *value) {
                Ok(evaluation) => evaluation,
                Err(err) => {
                    warn!("Ignoring assignment: {}", err);
                    brain.evaluate()
                }
            },
            Input::Undo => brain.undo(),
            Input::Clear => brain.clear(),
        }
    }
}
