//! Presence rules

use runval_expression::{Arguments, FieldLookup, Value};

use super::evaluate;
use crate::error::{RuleError, RuleResult};

/// Fails on the zero value of the input's type: `""`, `0`, `0.0`, `false`,
/// an empty list or map, or a zero duration.
pub fn required(value: &Value) -> RuleResult {
    if value.is_zero() {
        Err(RuleError::Required)
    } else {
        Ok(())
    }
}

/// [`required`], unless some argument evaluates to `false`.
///
/// Arguments are evaluated in order and the first evaluation error is
/// returned as is. An argument that evaluates to anything other than
/// `false` (including non-booleans) keeps the requirement in force.
pub fn required_if(
    value: &Value,
    context: Option<&dyn FieldLookup>,
    args: &Arguments,
) -> RuleResult {
    for argument in args.values() {
        if evaluate(argument, context)? == Value::Bool(false) {
            return Ok(());
        }
    }
    required(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::test_support::args;
    use runval_expression::{Context, ExpressionError};
    use rstest::rstest;
    use std::time::Duration;

    #[rstest]
    #[case(Value::from(""), false)]
    #[case(Value::from(" "), true)]
    #[case(Value::Int(0), false)]
    #[case(Value::Int(-1), true)]
    #[case(Value::Uint(0), false)]
    #[case(Value::Float(0.0), false)]
    #[case(Value::Float(0.1), true)]
    #[case(Value::Bool(false), false)]
    #[case(Value::Bool(true), true)]
    #[case(Value::List(vec![]), false)]
    #[case(Value::from(vec![0]), true)]
    #[case(Value::Map(Default::default()), false)]
    #[case(Value::Duration(Duration::ZERO), false)]
    #[case(Value::Duration(Duration::from_secs(1)), true)]
    fn test_required(#[case] value: Value, #[case] present: bool) {
        assert_eq!(required(&value).is_ok(), present, "{value:?}");
    }

    fn order(express: bool) -> Context {
        Context::builder()
            .field("Express", express)
            .field("Items", vec!["a"])
            .build()
    }

    #[test]
    fn test_required_if_condition_true() {
        let rule_args = args("$Express");
        assert_eq!(
            required_if(&Value::from(""), Some(&order(true)), &rule_args),
            Err(RuleError::Required)
        );
        assert!(required_if(&Value::from("x"), Some(&order(true)), &rule_args).is_ok());
    }

    #[test]
    fn test_required_if_condition_false_skips() {
        let rule_args = args("$Express");
        assert!(required_if(&Value::from(""), Some(&order(false)), &rule_args).is_ok());
    }

    #[test]
    fn test_required_if_any_false_skips() {
        let rule_args = args("$len($Items)>0, $Express");
        assert!(required_if(&Value::Int(0), Some(&order(false)), &rule_args).is_ok());
        assert!(required_if(&Value::Int(0), Some(&order(true)), &rule_args).is_err());
    }

    #[test]
    fn test_required_if_non_boolean_keeps_requirement() {
        assert_eq!(
            required_if(&Value::from(""), None, &args("1")),
            Err(RuleError::Required)
        );
    }

    #[test]
    fn test_required_if_evaluation_error() {
        assert_eq!(
            required_if(&Value::from("x"), None, &args("$Express")),
            Err(RuleError::Expression(ExpressionError::NilObject))
        );
    }
}
