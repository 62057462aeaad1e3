//! Calcbrain - An incremental calculator brain
//!
//! Keys are pressed one at a time (numbers, constants, variables, unary and binary
//! operators, `=`) and appended to a token log. After every key the whole log is
//! reduced again, producing the current result and a description of what was typed.

pub mod brain;
pub mod input;
pub mod plot;
pub mod variables;

// Re-export the main public API
pub use brain::{BrainConfig, BrainError, CalculatorBrain, ClearPolicy, Evaluation};
pub use input::{Input, InputError, parse_input};
pub use plot::{PlotConfig, PlotError, sample};
pub use variables::Variables;

/// Press the whitespace-separated keys of `keys` on a fresh brain
///
/// This is a convenience function for evaluating a whole key sequence at once.
///
/// # Arguments
///
/// * `keys` - Keys separated by whitespace, e.g. `"3 + 4 ="`
///
/// # Returns
///
/// * `Ok(Evaluation)` - The result (absent while pending) and the description
/// * `Err(InputError)` - If any key cannot be read
///
/// # Errors
///
/// This function will return an error if a word is neither a number, a keypad
/// symbol, a command, nor a valid variable name.
///
/// # Examples
///
/// ```
/// use calcbrain::evaluate_keys;
///
/// match evaluate_keys("3 + 4 - 2 =") {
///     Ok(evaluation) => println!("{}", evaluation),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn evaluate_keys(keys: &str) -> Result<Evaluation, InputError> {
    let inputs = input::parse_line(keys)?;

    let mut brain = CalculatorBrain::new();
    let mut evaluation = brain.evaluate();
    for input in &inputs {
        evaluation = input.apply(&mut brain);
    }
    Ok(evaluation)
}
