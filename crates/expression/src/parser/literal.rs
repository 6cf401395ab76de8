//! Literal value parsing
//!
//! Grammar, tried in order on trimmed text:
//!
//! - `{k:v, ...}` map, keys unquoted, values parsed recursively
//! - `[a, b, ...]` list, items parsed recursively
//! - `"..."` quoted string, surrounding quotes removed
//! - integer, then float, then `true` / `false`
//! - anything else is a bare string

use crate::error::{ExpressionError, ExpressionResult};
use crate::eval::MAX_RECURSION_DEPTH;
use crate::parser::split::split_top_level;
use crate::value::{Value, ValueMap};

/// Parses literal text into a [`Value`].
pub fn parse_value(text: &str) -> ExpressionResult<Value> {
    parse_value_at(text, 0)
}

/// Parses a literal found `depth` levels inside an enclosing list, map or
/// expression.
pub(crate) fn parse_value_at(text: &str, depth: usize) -> ExpressionResult<Value> {
    if depth > MAX_RECURSION_DEPTH {
        return Err(ExpressionError::RecursionLimit(MAX_RECURSION_DEPTH));
    }

    let text = text.trim();
    if text.is_empty() {
        return Err(ExpressionError::EmptyValue);
    }

    if text.starts_with('{') {
        return parse_map(text, depth).map(Value::Map);
    }
    if text.starts_with('[') {
        return parse_list(text, depth).map(Value::List);
    }
    if text.starts_with('"') && text.ends_with('"') {
        return Ok(Value::String(text.trim_matches('"').to_owned()));
    }

    Ok(parse_scalar(text))
}

fn parse_scalar(text: &str) -> Value {
    if let Ok(n) = text.parse::<i64>() {
        return Value::Int(n);
    }
    if let Ok(x) = text.parse::<f64>() {
        return Value::Float(x);
    }
    match text {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(text.to_owned()),
    }
}

fn parse_map(text: &str, depth: usize) -> ExpressionResult<ValueMap> {
    let inner = text
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| ExpressionError::InvalidMap(text.to_owned()))?;

    let mut map = ValueMap::new();
    for entry in split_top_level(inner, ',') {
        let (key, value) = match split_top_level(&entry, ':').as_slice() {
            [key, value] => (
                key.trim_matches('"').to_owned(),
                parse_value_at(value, depth + 1)?,
            ),
            _ => return Err(ExpressionError::InvalidMapEntry(entry)),
        };
        map.insert(key, value);
    }

    Ok(map)
}

fn parse_list(text: &str, depth: usize) -> ExpressionResult<Vec<Value>> {
    let inner = text
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| ExpressionError::InvalidArray(text.to_owned()))?;

    split_top_level(inner, ',')
        .iter()
        .map(|item| parse_value_at(item, depth + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("42", Value::Int(42))]
    #[case("-7", Value::Int(-7))]
    #[case("+7", Value::Int(7))]
    #[case("3.5", Value::Float(3.5))]
    #[case("1e3", Value::Float(1000.0))]
    #[case("true", Value::Bool(true))]
    #[case("false", Value::Bool(false))]
    #[case("True", Value::from("True"))]
    #[case("hello", Value::from("hello"))]
    #[case(r#""quoted text""#, Value::from("quoted text"))]
    #[case(r#""42""#, Value::from("42"))]
    #[case("  padded  ", Value::from("padded"))]
    fn test_scalars(#[case] input: &str, #[case] expected: Value) {
        assert_eq!(parse_value(input).unwrap(), expected);
    }

    #[test]
    fn test_empty_is_error() {
        assert_eq!(parse_value("   ").unwrap_err(), ExpressionError::EmptyValue);
    }

    #[test]
    fn test_list() {
        assert_eq!(
            parse_value("[1, two, 3.0]").unwrap(),
            Value::List(vec![Value::Int(1), Value::from("two"), Value::Float(3.0)])
        );
        assert_eq!(parse_value("[]").unwrap(), Value::List(vec![]));
    }

    #[test]
    fn test_nested_list() {
        assert_eq!(
            parse_value("[[1,2],[3]]").unwrap(),
            Value::List(vec![Value::from(vec![1, 2]), Value::from(vec![3])])
        );
    }

    #[test]
    fn test_map() {
        let value = parse_value(r#"{a:1, "b":"x y", c:[1,2]}"#).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map["a"], Value::Int(1));
        assert_eq!(map["b"], Value::from("x y"));
        assert_eq!(map["c"], Value::from(vec![1, 2]));
        assert_eq!(map.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn test_unclosed_literals() {
        assert_eq!(
            parse_value("[1,2").unwrap_err(),
            ExpressionError::InvalidArray("[1,2".into())
        );
        assert_eq!(
            parse_value("{a:1").unwrap_err(),
            ExpressionError::InvalidMap("{a:1".into())
        );
    }

    #[test]
    fn test_bad_map_entries() {
        assert_eq!(
            parse_value("{a}").unwrap_err(),
            ExpressionError::InvalidMapEntry("a".into())
        );
        assert_eq!(
            parse_value("{a:b:c}").unwrap_err(),
            ExpressionError::InvalidMapEntry("a:b:c".into())
        );
    }

    #[test]
    fn test_empty_list_item_is_error() {
        assert_eq!(parse_value("[1,,2]").unwrap_err(), ExpressionError::EmptyValue);
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let deep = format!("{}{}", "[".repeat(20_000), "]".repeat(20_000));
        assert_eq!(
            parse_value(&deep).unwrap_err(),
            ExpressionError::RecursionLimit(MAX_RECURSION_DEPTH)
        );

        let deep_map = format!("{}1{}", "{a:".repeat(1_000), "}".repeat(1_000));
        assert_eq!(
            parse_value(&deep_map).unwrap_err(),
            ExpressionError::RecursionLimit(MAX_RECURSION_DEPTH)
        );
    }

    #[test]
    fn test_nesting_up_to_the_limit_parses() {
        let nested = format!(
            "{}{}",
            "[".repeat(MAX_RECURSION_DEPTH),
            "]".repeat(MAX_RECURSION_DEPTH)
        );
        assert!(parse_value(&nested).is_ok());
    }
}
