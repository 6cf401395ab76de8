//! Rule predicates
//!
//! Simple predicates take only the value under validation. Argument
//! predicates also receive the context object and the parsed argument map;
//! they evaluate their arguments themselves so field references resolve
//! against the current context on every call.

pub mod affix;
pub mod choice;
pub mod cron;
pub mod encoding;
pub mod format;
pub mod network;
pub mod presence;
pub mod range;
pub mod text;

use runval_expression::{Argument, Arguments, FieldLookup, Value, as_string};

use crate::error::{RuleError, RuleResult};

/// Predicate over the value alone.
pub type SimpleRule = fn(&Value) -> RuleResult;

/// Predicate over the value, the context object and the rule's arguments.
pub type ArgumentRule = fn(&Value, Option<&dyn FieldLookup>, &Arguments) -> RuleResult;

/// Borrows the string payload or fails with "expected a string".
pub(crate) fn expect_string(value: &Value) -> RuleResult<&str> {
    value
        .as_str()
        .ok_or(RuleError::ExpectedString(value.type_name()))
}

/// Coerces the input with [`as_string`], reporting failure against the input field.
pub(crate) fn input_string(value: &Value) -> RuleResult<String> {
    as_string(value).map_err(|e| RuleError::unsupported("input field", e))
}

/// Evaluates one argument against the context.
pub(crate) fn evaluate(argument: &Argument, context: Option<&dyn FieldLookup>) -> RuleResult<Value> {
    Ok(argument.evaluate(context)?)
}

/// Returns the only argument, or an arity error worded as `expected`.
pub(crate) fn single_argument<'a>(
    rule: &'static str,
    expected: &'static str,
    args: &'a Arguments,
) -> RuleResult<&'a Argument> {
    match args.first() {
        Some((_, argument)) if args.len() == 1 => Ok(argument),
        _ => Err(RuleError::argument_count(rule, expected, args.len())),
    }
}

/// Returns both arguments of a two-argument rule.
pub(crate) fn argument_pair<'a>(
    rule: &'static str,
    args: &'a Arguments,
) -> RuleResult<(&'a Argument, &'a Argument)> {
    match (args.len(), args.get_index(0), args.get_index(1)) {
        (2, Some((_, lower)), Some((_, upper))) => Ok((lower, upper)),
        _ => Err(RuleError::argument_count(
            rule,
            "exactly 2 arguments",
            args.len(),
        )),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::args;
    use super::*;

    #[test]
    fn test_expect_string() {
        assert_eq!(expect_string(&Value::from("a")), Ok("a"));
        assert_eq!(
            expect_string(&Value::Int(1)),
            Err(RuleError::ExpectedString("int"))
        );
    }

    #[test]
    fn test_input_string_coerces_scalars() {
        assert_eq!(input_string(&Value::Int(12)).unwrap(), "12");
        assert_eq!(
            input_string(&Value::from(vec![1])).unwrap_err().to_string(),
            r#"unsupported type for input field: failed to parse "[1]" of type list as string"#
        );
    }

    #[test]
    fn test_argument_arity_helpers() {
        assert!(single_argument("min", "exactly 1 argument", &args("1")).is_ok());
        assert_eq!(
            single_argument("min", "exactly 1 argument", &args("1,2"))
                .unwrap_err()
                .to_string(),
            "min expects exactly 1 argument, got 2"
        );
        assert!(argument_pair("between", &args("1,2")).is_ok());
        assert_eq!(
            argument_pair("between", &args("1")).unwrap_err().to_string(),
            "between expects exactly 2 arguments, got 1"
        );
    }
}
