//! Numeric range and length rules
//!
//! The integer rules coerce both the input and the evaluated arguments with
//! `as_int64`; the float rules with `as_float64`. Bounds may be given in
//! either order.

use runval_expression::{Arguments, FieldLookup, Value, as_float64, as_int64, as_length};

use super::{argument_pair, evaluate, single_argument};
use crate::error::{RuleError, RuleResult};

/// Evaluated and coerced input plus both bounds.
struct Bounds<T> {
    input: T,
    lower: T,
    upper: T,
}

impl<T: PartialOrd> Bounds<T> {
    fn inclusive(&self) -> bool {
        !((self.input < self.lower && self.input < self.upper)
            || (self.input > self.lower && self.input > self.upper))
    }

    fn exclusive(&self) -> bool {
        !((self.input <= self.lower && self.input <= self.upper)
            || (self.input >= self.lower && self.input >= self.upper))
    }
}

fn bounds<T>(
    rule: &'static str,
    value: &Value,
    context: Option<&dyn FieldLookup>,
    args: &Arguments,
    coerce: fn(&Value) -> runval_expression::ExpressionResult<T>,
) -> RuleResult<Bounds<T>> {
    let (lower, upper) = argument_pair(rule, args)?;
    let lower = evaluate(lower, context)?;
    let upper = evaluate(upper, context)?;

    Ok(Bounds {
        input: coerce(value).map_err(|e| RuleError::unsupported("input field", e))?,
        lower: coerce(&lower).map_err(|e| RuleError::unsupported("lower bound argument", e))?,
        upper: coerce(&upper).map_err(|e| RuleError::unsupported("upper bound argument", e))?,
    })
}

/// Integer input within both bounds, inclusive.
pub fn between(value: &Value, context: Option<&dyn FieldLookup>, args: &Arguments) -> RuleResult {
    let b = bounds("between", value, context, args, as_int64)?;
    if b.inclusive() {
        return Ok(());
    }
    Err(RuleError::failed(format!(
        "between validation failed: {} is not inclusively between {} and {}",
        b.input, b.lower, b.upper
    )))
}

/// Integer input strictly between both bounds.
pub fn xbetween(value: &Value, context: Option<&dyn FieldLookup>, args: &Arguments) -> RuleResult {
    let b = bounds("xbetween", value, context, args, as_int64)?;
    if b.exclusive() {
        return Ok(());
    }
    Err(RuleError::failed(format!(
        "exclusive between validation failed: {} is not exclusively between {} and {}",
        b.input, b.lower, b.upper
    )))
}

/// Float input within both bounds, inclusive.
pub fn betweenf(value: &Value, context: Option<&dyn FieldLookup>, args: &Arguments) -> RuleResult {
    let b = bounds("between", value, context, args, as_float64)?;
    if b.inclusive() {
        return Ok(());
    }
    Err(RuleError::failed(format!(
        "between validation failed: {:.6} is not inclusively between {:.6} and {:.6}",
        b.input, b.lower, b.upper
    )))
}

/// Float input strictly between both bounds.
pub fn xbetweenf(value: &Value, context: Option<&dyn FieldLookup>, args: &Arguments) -> RuleResult {
    let b = bounds("xbetweenf", value, context, args, as_float64)?;
    if b.exclusive() {
        return Ok(());
    }
    Err(RuleError::failed(format!(
        "xbetweenf validation failed: {:.6} is not exclusively between {:.6} and {:.6}",
        b.input, b.lower, b.upper
    )))
}

fn limit(
    rule: &'static str,
    target: &'static str,
    value: &Value,
    context: Option<&dyn FieldLookup>,
    args: &Arguments,
) -> RuleResult<(i64, i64)> {
    let argument = single_argument(rule, "exactly 1 argument", args)?;
    let bound = evaluate(argument, context)?;
    let input = as_int64(value).map_err(|e| RuleError::unsupported("input field", e))?;
    let bound = as_int64(&bound).map_err(|e| RuleError::unsupported(target, e))?;
    Ok((input, bound))
}

/// Integer input of at least the argument.
pub fn min(value: &Value, context: Option<&dyn FieldLookup>, args: &Arguments) -> RuleResult {
    let (input, bound) = limit("min", "min argument", value, context, args)?;
    if input < bound {
        return Err(RuleError::failed(format!(
            "min validation failed: {input} < {bound}"
        )));
    }
    Ok(())
}

/// Integer input of at most the argument.
pub fn max(value: &Value, context: Option<&dyn FieldLookup>, args: &Arguments) -> RuleResult {
    let (input, bound) = limit("max", "max argument", value, context, args)?;
    if input > bound {
        return Err(RuleError::failed(format!(
            "max validation failed: {input} > {bound}"
        )));
    }
    Ok(())
}

/// Input length (characters, items or entries) equal to the argument.
pub fn length(value: &Value, context: Option<&dyn FieldLookup>, args: &Arguments) -> RuleResult {
    let argument = single_argument("length", "exactly 1 argument", args)?;
    let expected = evaluate(argument, context)?;
    let actual = as_length(value)?;
    let expected =
        as_int64(&expected).map_err(|e| RuleError::unsupported("length argument", e))?;

    if i64::try_from(actual).ok() != Some(expected) {
        return Err(RuleError::failed(format!(
            "length mismatch: {actual} != {expected}"
        )));
    }
    Ok(())
}
