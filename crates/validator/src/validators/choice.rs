//! Membership and pattern rules

use regex::Regex;
use runval_expression::{Arguments, FieldLookup, Value, as_string};

use super::{evaluate, expect_string, single_argument};
use crate::error::{RuleError, RuleResult};

/// Input equal to one of the evaluated arguments.
///
/// Equality is structural and type-sensitive: the string `"1"` is not one
/// of `1`. Arguments are evaluated in order until one matches.
pub fn one_of(value: &Value, context: Option<&dyn FieldLookup>, args: &Arguments) -> RuleResult {
    if args.is_empty() {
        return Err(RuleError::argument_count("oneof", "at least 1 argument", 0));
    }

    for argument in args.values() {
        if evaluate(argument, context)? == *value {
            return Ok(());
        }
    }

    let choices = args.keys().map(String::as_str).collect::<Vec<_>>().join(", ");
    Err(RuleError::failed(format!(
        "oneof validation failed: {value} is not one of [{choices}]"
    )))
}

/// String input matching the regular expression given as the argument.
///
/// The pattern is compiled on every call, since it may come from the
/// context object. Matching is unanchored.
pub fn regex(value: &Value, context: Option<&dyn FieldLookup>, args: &Arguments) -> RuleResult {
    let argument = single_argument("regex", "exactly 1 argument", args)?;
    let pattern = evaluate(argument, context)?;
    let input = expect_string(value)?;
    let pattern = as_string(&pattern)?;

    let compiled = Regex::new(&pattern).map_err(|_| RuleError::InvalidRegex(pattern.clone()))?;
    if compiled.is_match(input) {
        return Ok(());
    }
    Err(RuleError::failed(format!(
        "value {input} does not match regex {pattern}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::test_support::args;
    use pretty_assertions::assert_eq;
    use runval_expression::{Context, ExpressionError};

    fn ctx() -> Context {
        Context::builder()
            .field("Default", "blue")
            .field("Pattern", "^[a-z]+$")
            .build()
    }

    #[test]
    fn test_one_of_literals() {
        let choices = args("red,green,blue");
        for color in ["red", "green", "blue"] {
            assert!(one_of(&Value::from(color), None, &choices).is_ok());
        }
        assert_eq!(
            one_of(&Value::from("pink"), None, &choices)
                .unwrap_err()
                .to_string(),
            "oneof validation failed: pink is not one of [red, green, blue]"
        );
    }

    #[test]
    fn test_one_of_is_type_sensitive() {
        let choices = args("1,2,3");
        assert!(one_of(&Value::Int(2), None, &choices).is_ok());
        assert!(one_of(&Value::from("2"), None, &choices).is_err());
        assert!(one_of(&Value::Uint(2), None, &choices).is_err());
    }

    #[test]
    fn test_one_of_deep_equality() {
        let choices = args("[1,2], {a:true}");
        assert!(one_of(&Value::from(vec![1, 2]), None, &choices).is_ok());
        let map: Value = [("a", true)].into_iter().collect();
        assert!(one_of(&map, None, &choices).is_ok());
        assert!(one_of(&Value::from(vec![2, 1]), None, &choices).is_err());
    }

    #[test]
    fn test_one_of_field_reference() {
        let choices = args("red,$Default");
        assert!(one_of(&Value::from("blue"), Some(&ctx()), &choices).is_ok());
        assert_eq!(
            one_of(&Value::from("blue"), None, &choices),
            Err(RuleError::Expression(ExpressionError::NilObject))
        );
    }

    #[test]
    fn test_one_of_without_arguments() {
        assert_eq!(
            one_of(&Value::from("x"), None, &Arguments::new())
                .unwrap_err()
                .to_string(),
            "oneof expects at least 1 argument, got 0"
        );
    }

    #[test]
    fn test_regex() {
        assert!(regex(&Value::from("abc123"), None, &args("c[0-9]{3}")).is_ok());
        assert!(regex(&Value::from("abc"), Some(&ctx()), &args("$Pattern")).is_ok());
        assert_eq!(
            regex(&Value::from("ABC"), Some(&ctx()), &args("$Pattern"))
                .unwrap_err()
                .to_string(),
            "value ABC does not match regex ^[a-z]+$"
        );
    }

    #[test]
    fn test_regex_errors() {
        assert_eq!(
            regex(&Value::Int(1), None, &args("a")),
            Err(RuleError::ExpectedString("int"))
        );
        assert_eq!(
            regex(&Value::from("abc"), None, &args("(abc"))
                .unwrap_err()
                .to_string(),
            "invalid regex: (abc"
        );
        assert_eq!(
            regex(&Value::from("abc"), None, &args("a,b"))
                .unwrap_err()
                .to_string(),
            "regex expects exactly 1 argument, got 2"
        );
    }
}
