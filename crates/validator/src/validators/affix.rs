//! Substring rules
//!
//! Both the input and the single argument are rendered to text with
//! `as_string`, so `startswith:12` accepts the integer `1234`.

use runval_expression::{Arguments, FieldLookup, Value, as_string};

use super::{evaluate, input_string, single_argument};
use crate::error::{RuleError, RuleResult};

/// Input text and the evaluated argument text.
fn operands(
    rule: &'static str,
    target: &'static str,
    value: &Value,
    context: Option<&dyn FieldLookup>,
    args: &Arguments,
) -> RuleResult<(String, String)> {
    let argument = single_argument(rule, "1 argument", args)?;
    let operand = evaluate(argument, context)?;
    let input = input_string(value)?;
    let operand = as_string(&operand).map_err(|e| RuleError::unsupported(target, e))?;
    Ok((input, operand))
}

pub fn starts_with(value: &Value, context: Option<&dyn FieldLookup>, args: &Arguments) -> RuleResult {
    let (input, prefix) = operands("startswith", "startswith argument", value, context, args)?;
    if input.starts_with(&prefix) {
        return Ok(());
    }
    Err(RuleError::failed(format!(
        "startswith validation failed: {input} does not start with {prefix}"
    )))
}

pub fn starts_not_with(
    value: &Value,
    context: Option<&dyn FieldLookup>,
    args: &Arguments,
) -> RuleResult {
    let (input, prefix) =
        operands("startsnotwith", "startsnotwith argument", value, context, args)?;
    if input.starts_with(&prefix) {
        return Err(RuleError::failed(format!(
            "startsnotwith validation failed: {input} starts with {prefix}"
        )));
    }
    Ok(())
}

pub fn ends_with(value: &Value, context: Option<&dyn FieldLookup>, args: &Arguments) -> RuleResult {
    let (input, suffix) = operands("endswith", "endswith argument", value, context, args)?;
    if input.ends_with(&suffix) {
        return Ok(());
    }
    Err(RuleError::failed(format!(
        "endswith validation failed: {input} does not end with {suffix}"
    )))
}

pub fn ends_not_with(
    value: &Value,
    context: Option<&dyn FieldLookup>,
    args: &Arguments,
) -> RuleResult {
    let (input, suffix) = operands("endsnotwith", "endsnotwith argument", value, context, args)?;
    if input.ends_with(&suffix) {
        return Err(RuleError::failed(format!(
            "endsnotwith validation failed: {input} ends with {suffix}"
        )));
    }
    Ok(())
}

/// Fails when either side is empty or the input lacks the argument.
pub fn contains(value: &Value, context: Option<&dyn FieldLookup>, args: &Arguments) -> RuleResult {
    let (input, needle) = operands("contains", "contains argument", value, context, args)?;
    if input.is_empty() || needle.is_empty() {
        return Err(RuleError::failed("contains validation failed: empty string"));
    }
    if input.contains(&needle) {
        return Ok(());
    }
    Err(RuleError::failed(format!(
        "contains validation failed: {input} does not contain {needle}"
    )))
}

/// Fails when either side is empty or the input has the argument.
pub fn contains_not(
    value: &Value,
    context: Option<&dyn FieldLookup>,
    args: &Arguments,
) -> RuleResult {
    let (input, needle) = operands("containsnot", "containsnot argument", value, context, args)?;
    if input.is_empty() || needle.is_empty() {
        return Err(RuleError::failed("containsnot validation failed: empty string"));
    }
    if input.contains(&needle) {
        return Err(RuleError::failed(format!(
            "containsnot validation failed: {input} contains {needle}"
        )));
    }
    Ok(())
}
