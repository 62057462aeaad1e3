use std::f64::consts::PI;

use crate::brain::{BrainConfig, BrainError, CalculatorBrain, ClearPolicy};
use crate::variables::Variables;

fn assert_close(result: Option<f64>, expected: f64) {
    assert!(result.is_some(), "expected {}, got no result", expected);
    if let Some(value) = result {
        assert!(
            (value - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            value
        );
    }
}

#[test]
fn test_left_to_right_fold() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(3.0);
    brain.perform_operation("+");
    brain.set_operand(4.0);
    brain.perform_operation("-");
    brain.set_operand(2.0);
    let evaluation = brain.perform_operation("=");
    assert_eq!(evaluation.result, Some(5.0));
    assert_eq!(evaluation.description, "3+4-2");
}

#[test]
fn test_fold_has_no_precedence() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(3.0);
    brain.perform_operation("×");
    brain.set_operand(4.0);
    brain.perform_operation("+");
    brain.set_operand(2.0);
    let evaluation = brain.perform_operation("=");
    assert_eq!(evaluation.result, Some(14.0));
    assert_eq!(evaluation.description, "3×4+2");
}

#[test]
fn test_subtraction_folds_left() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(3.0);
    brain.perform_operation("-");
    brain.set_operand(4.0);
    brain.perform_operation("-");
    let evaluation = brain.set_operand(2.0);
    assert_eq!(evaluation.result, Some(-3.0));
    assert_eq!(evaluation.description, "3-4-2");
}

#[test]
fn test_pending_binary_operation() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(3.0);
    let evaluation = brain.perform_operation("+");
    assert_eq!(evaluation.result, None);
    assert_eq!(evaluation.description, "3+");
    assert!(brain.result_is_pending());
}

#[test]
fn test_running_partial_results() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(3.0);
    brain.perform_operation("+");
    let evaluation = brain.set_operand(4.0);
    assert_eq!(evaluation.result, Some(7.0));
    assert_eq!(evaluation.description, "3+4");

    let evaluation = brain.perform_operation("+");
    assert_eq!(evaluation.result, None);
    assert_eq!(evaluation.description, "3+4+");
    assert!(brain.result_is_pending());
}

#[test]
fn test_equals_with_pending_operation() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(3.0);
    brain.perform_operation("+");
    brain.set_operand(4.0);
    brain.perform_operation("+");
    let evaluation = brain.perform_operation("=");
    assert_eq!(evaluation.result, Some(7.0));
    assert_eq!(evaluation.description, "3+4");
    assert!(!brain.result_is_pending());

    brain.perform_operation("×");
    let evaluation = brain.set_operand(2.0);
    assert_eq!(evaluation.result, Some(14.0));
    assert_eq!(evaluation.description, "3+4×2");
}

#[test]
fn test_binary_operator_without_first_operand() {
    let mut brain = CalculatorBrain::new();
    brain.perform_operation("+");
    let evaluation = brain.set_operand(3.0);
    assert_eq!(evaluation.result, None);
    assert_eq!(evaluation.description, "+3");
}

#[test]
fn test_unary_wraps_operand() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(9.0);
    let evaluation = brain.perform_operation("√");
    assert_eq!(evaluation.result, Some(3.0));
    assert_eq!(evaluation.description, "√(9)");
}

#[test]
fn test_unary_applies_to_last_operand_only() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(3.0);
    brain.perform_operation("+");
    brain.set_operand(9.0);
    let evaluation = brain.perform_operation("√");
    assert_eq!(evaluation.result, Some(6.0));
    assert_eq!(evaluation.description, "3+√(9)");
}

#[test]
fn test_unary_after_equals_wraps_everything() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(3.0);
    brain.perform_operation("+");
    brain.set_operand(4.0);
    brain.perform_operation("=");
    let evaluation = brain.perform_operation("√");
    assert_close(evaluation.result, 7_f64.sqrt());
    assert_eq!(evaluation.description, "√(3+4)");
}

#[test]
fn test_nested_unary_operations() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(16.0);
    brain.perform_operation("√");
    brain.perform_operation("√");
    let evaluation = brain.perform_operation("±");
    assert_eq!(evaluation.result, Some(-2.0));
    assert_eq!(evaluation.description, "±(√(√(16)))");
}

#[test]
fn test_equals_then_binary_continues_from_result() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(3.0);
    brain.perform_operation("+");
    brain.set_operand(4.0);
    brain.perform_operation("=");
    brain.perform_operation("×");
    let evaluation = brain.set_operand(2.0);
    assert_eq!(evaluation.result, Some(14.0));
    assert_eq!(evaluation.description, "3+4×2");
}

#[test]
fn test_number_after_equals_starts_over() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(3.0);
    brain.perform_operation("+");
    brain.set_operand(4.0);
    brain.perform_operation("=");
    let evaluation = brain.set_operand(5.0);
    assert_eq!(evaluation.result, Some(5.0));
    assert_eq!(evaluation.description, "5");
}

#[test]
fn test_constant_entry() {
    let mut brain = CalculatorBrain::new();
    let evaluation = brain.perform_operation("π");
    assert_close(evaluation.result, PI);
    assert_eq!(evaluation.description, "π");
}

#[test]
fn test_constant_in_expression() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(2.0);
    brain.perform_operation("×");
    brain.perform_operation("π");
    let evaluation = brain.perform_operation("cos");
    assert_close(evaluation.result, -2.0);
    assert_eq!(evaluation.description, "2×cos(π)");
}

#[test]
fn test_variable_defaults_to_zero() {
    let mut brain = CalculatorBrain::new();
    brain.set_variable_operand("M");
    let evaluation = brain.perform_operation("=");
    assert_eq!(evaluation.result, Some(0.0));
    assert_eq!(evaluation.description, "M");

    let evaluation = brain.set_variable("M", 5.0);
    assert_eq!(evaluation.result, Some(5.0));
    assert_eq!(evaluation.description, "M");
    assert_eq!(brain.evaluate().result, Some(5.0));
}

#[test]
fn test_variable_is_resolved_at_evaluation_time() {
    let mut brain = CalculatorBrain::new();
    brain.set_variable_operand("M");
    brain.perform_operation("+");
    brain.set_operand(1.0);
    assert_eq!(brain.evaluate().result, Some(1.0));

    brain.variables_mut().set("M", 41.0);
    assert_eq!(brain.evaluate().result, Some(42.0));
}

#[test]
fn test_reentering_variable_keeps_its_value() {
    let mut brain = CalculatorBrain::new();
    brain.set_variable_operand("M");
    brain.set_variable("M", 3.0);
    brain.perform_operation("×");
    let evaluation = brain.set_variable_operand("M");
    assert_eq!(evaluation.result, Some(9.0));
    assert_eq!(evaluation.description, "M×M");
}

#[test]
fn test_evaluate_using_external_table() {
    let mut brain = CalculatorBrain::new();
    brain.set_variable_operand("x");
    brain.perform_operation("×");
    brain.set_operand(2.0);

    let external = Variables::new().with("x", 10.0);
    assert_eq!(brain.evaluate_using(Some(&external)).result, Some(20.0));
    assert_eq!(brain.evaluate_using(Some(&Variables::new())).result, Some(0.0));
    assert_eq!(brain.evaluate_using(None).result, None);
    assert_eq!(brain.evaluate_using(None).description, "x×2");

    // Own table is untouched by external evaluation
    assert_eq!(brain.variables().get("x"), Some(0.0));
}

#[test]
fn test_evaluate_is_idempotent() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(1.5);
    brain.perform_operation("÷");
    brain.set_variable_operand("y");
    brain.perform_operation("sin");

    let first = brain.evaluate();
    let second = brain.evaluate();
    assert_eq!(first, second);
    assert_eq!(brain.len(), 4);
}

#[test]
fn test_undo_restores_previous_state() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(3.0);
    brain.perform_operation("+");
    let before = brain.evaluate();
    let elements_before = brain.elements().to_vec();

    let after_append = brain.set_operand(4.0);
    assert_eq!(after_append.result, Some(7.0));

    let after_undo = brain.undo();
    assert_eq!(after_undo, before);
    assert_eq!(brain.elements(), elements_before.as_slice());
    assert!(brain.result_is_pending());
}

#[test]
fn test_undo_on_empty_log() {
    let mut brain = CalculatorBrain::new();
    let evaluation = brain.undo();
    assert!(brain.is_empty());
    assert_eq!(evaluation.result, None);
    assert_eq!(evaluation.description, "");
}

#[test]
fn test_clear_resets_everything() {
    let mut brain = CalculatorBrain::new();
    brain.set_variable_operand("M");
    brain.set_variable("M", 2.0);
    brain.perform_operation("+");
    brain.set_operand(1.0);

    let evaluation = brain.clear();
    assert_eq!(evaluation.result, None);
    assert!(brain.is_empty());
    assert!(brain.variables().is_empty());
    assert_eq!(brain.evaluate().result, None);
    assert_eq!(brain.evaluate().description, "");
}

#[test]
fn test_clear_can_keep_variables() {
    let mut brain = CalculatorBrain::with_config(BrainConfig {
        clear_policy: ClearPolicy::KeepVariables,
    });
    brain.set_variable_operand("M");
    brain.set_variable("M", 2.0);

    brain.clear();
    assert!(brain.is_empty());
    assert_eq!(brain.variables().get("M"), Some(2.0));
    assert_eq!(brain.evaluate().result, None);

    let evaluation = brain.set_variable_operand("M");
    assert_eq!(evaluation.result, Some(2.0));
}

#[test]
fn test_unknown_symbol_is_ignored() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(3.0);
    brain.perform_operation("+");
    let before = brain.evaluate();

    let evaluation = brain.perform_operation("@");
    assert_eq!(evaluation, before);
    assert_eq!(brain.len(), 2);
}

#[test]
fn test_try_perform_operation_reports_unknown_symbol() {
    let mut brain = CalculatorBrain::new();
    let result = brain.try_perform_operation("^");
    assert_eq!(result, Err(BrainError::UnknownOperation("^".to_string())));
    assert!(brain.is_empty());
}

#[test]
fn test_try_set_variable_requires_entry() {
    let mut brain = CalculatorBrain::new();
    let result = brain.try_set_variable("M", 1.0);
    assert_eq!(result, Err(BrainError::UnknownVariable("M".to_string())));

    brain.set_variable_operand("M");
    let result = brain.try_set_variable("M", 1.0);
    assert!(result.is_ok());
    if let Ok(evaluation) = result {
        assert_eq!(evaluation.result, Some(1.0));
    }
}

#[test]
fn test_division_by_zero_follows_float_semantics() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(1.0);
    brain.perform_operation("÷");
    brain.set_operand(0.0);
    let evaluation = brain.perform_operation("=");
    assert_eq!(evaluation.result, Some(f64::INFINITY));
    assert_eq!(evaluation.description, "1÷0");

    brain.clear();
    brain.set_operand(-1.0);
    let evaluation = brain.perform_operation("√");
    assert!(evaluation.result.is_some_and(f64::is_nan));
    assert_eq!(evaluation.description, "√(-1)");
}

#[test]
fn test_uses_variable() {
    let mut brain = CalculatorBrain::new();
    brain.set_operand(2.0);
    assert!(!brain.uses_variable("M"));
    brain.perform_operation("×");
    brain.set_variable_operand("M");
    assert!(brain.uses_variable("M"));
    assert!(!brain.uses_variable("x"));
}
