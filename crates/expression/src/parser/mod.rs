//! Argument parser
//!
//! Turns the argument portion of a rule (`min:$Age`, `oneof:a,b,c`,
//! `requiredif:$len($Name)>0`) into an ordered [`Arguments`] map.
//!
//! Each comma-separated segment is classified in a fixed order:
//!
//! | form          | example              | result                    |
//! |---------------|----------------------|---------------------------|
//! | condition     | `$Age>=18`           | [`Argument::Condition`]    |
//! | function call | `$len($Name)`        | [`Argument::FunctionCall`] |
//! | field         | `$Name`              | [`Argument::FieldRef`]     |
//! | escaped       | `\$Name`             | literal string `$Name`    |
//! | value         | `42`, `[1,2]`, `foo` | [`Argument::Literal`]      |
//!
//! Operands inside a function call or on either side of a condition are
//! classified field first, then function, condition, escaped and value.

mod literal;
mod split;

pub use literal::parse_value;
pub use split::{split_top_level, unescape};

use tracing::trace;

use crate::core::ast::{Argument, Arguments, Condition, FunctionCall, Operator};
use crate::error::{ExpressionError, ExpressionResult};
use crate::eval::MAX_RECURSION_DEPTH;
use literal::parse_value_at;

/// Parses a comma-separated argument list.
///
/// Keys are the trimmed source text of each argument. Fails on the first
/// argument that does not parse.
pub fn parse_arguments(text: &str) -> ExpressionResult<Arguments> {
    let mut arguments = Arguments::new();
    for part in split_top_level(text, ',') {
        let argument = parse_argument(&part)?;
        arguments.insert(part, argument);
    }
    trace!(count = arguments.len(), "parsed rule arguments");
    Ok(arguments)
}

/// Parses a single top-level argument.
pub fn parse_argument(text: &str) -> ExpressionResult<Argument> {
    let text = text.trim();
    if is_condition(text) {
        parse_condition(text, 0)
    } else if is_function_call(text) {
        parse_function_call(text, 0)
    } else if is_field(text) {
        Ok(parse_field(text))
    } else if is_escaped(text) {
        Ok(Argument::Literal(unescape(text).into()))
    } else {
        parse_value(text).map(Argument::Literal)
    }
}

/// Parses an operand nested `depth` levels inside calls and conditions.
fn parse_operand(text: &str, depth: usize) -> ExpressionResult<Argument> {
    if depth > MAX_RECURSION_DEPTH {
        return Err(ExpressionError::RecursionLimit(MAX_RECURSION_DEPTH));
    }

    let text = text.trim();
    if is_field(text) {
        Ok(parse_field(text))
    } else if is_function_call(text) {
        parse_function_call(text, depth)
    } else if is_condition(text) {
        parse_condition(text, depth)
    } else if is_escaped(text) {
        Ok(Argument::Literal(unescape(text).into()))
    } else {
        parse_value_at(text, depth).map(Argument::Literal)
    }
}

// ============================================================================
// Classification
// ============================================================================

fn is_condition(text: &str) -> bool {
    Operator::PRIORITY
        .iter()
        .any(|op| text.contains(op.as_str()))
}

fn is_function_call(text: &str) -> bool {
    text.starts_with('$') && text.contains('(')
}

/// A bare `$Name`. Text that also holds brackets, braces or an operator
/// belongs to another form.
fn is_field(text: &str) -> bool {
    text.starts_with('$') && !text.contains(['(', '[', '{']) && !is_condition(text)
}

fn is_escaped(text: &str) -> bool {
    text.starts_with('\\')
}

// ============================================================================
// Forms
// ============================================================================

fn parse_field(text: &str) -> Argument {
    Argument::FieldRef(text[1..].to_owned())
}

/// Splits at the first occurrence of the highest-priority operator present.
fn parse_condition(text: &str, depth: usize) -> ExpressionResult<Argument> {
    for op in Operator::PRIORITY {
        if let Some((lhs, rhs)) = text.split_once(op.as_str()) {
            let lhs = parse_operand(lhs, depth + 1)?;
            let rhs = parse_operand(rhs, depth + 1)?;
            return Ok(Argument::Condition(Condition::new(lhs, op, rhs)));
        }
    }
    Err(ExpressionError::InvalidCondition(text.to_owned()))
}

/// `$name(args)`: the name runs up to the first `(`, the arguments up to
/// the last `)`.
fn parse_function_call(text: &str, depth: usize) -> ExpressionResult<Argument> {
    let invalid = || ExpressionError::InvalidFunctionFormat(text.to_owned());

    let open = text.find('(').ok_or_else(invalid)?;
    let close = text.rfind(')').ok_or_else(invalid)?;
    if close < open {
        return Err(invalid());
    }

    let name = text[1..open].trim();
    let args = split_top_level(&text[open + 1..close], ',')
        .iter()
        .map(|arg| parse_operand(arg, depth + 1))
        .collect::<ExpressionResult<Vec<_>>>()?;

    Ok(Argument::FunctionCall(FunctionCall::new(name, args)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use pretty_assertions::assert_eq;

    fn call(name: &str, args: Vec<Argument>) -> Argument {
        Argument::FunctionCall(FunctionCall::new(name, args))
    }

    fn cond(lhs: Argument, op: Operator, rhs: Argument) -> Argument {
        Argument::Condition(Condition::new(lhs, op, rhs))
    }

    #[test]
    fn test_literal_arguments_keep_order() {
        let args = parse_arguments("c, a, b").unwrap();
        let keys: Vec<_> = args.keys().map(String::as_str).collect();
        assert_eq!(keys, ["c", "a", "b"]);
        assert_eq!(args["a"], Argument::literal("a"));
    }

    #[test]
    fn test_duplicate_text_collapses() {
        let args = parse_arguments("a,a,b").unwrap();
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_field_reference() {
        assert_eq!(parse_argument("$Age").unwrap(), Argument::field("Age"));
    }

    #[test]
    fn test_dollar_text_with_brackets_is_literal() {
        assert_eq!(
            parse_argument("$Items[0]").unwrap(),
            Argument::literal("$Items[0]")
        );
        assert_eq!(
            parse_argument("$Cfg{a}").unwrap(),
            Argument::literal("$Cfg{a}")
        );
    }

    #[test]
    fn test_escaped_field() {
        assert_eq!(
            parse_argument(r"\$Age").unwrap(),
            Argument::literal("$Age")
        );
    }

    #[test]
    fn test_function_call() {
        assert_eq!(
            parse_argument("$len($Name)").unwrap(),
            call("len", vec![Argument::field("Name")])
        );
        assert_eq!(
            parse_argument("$max(1, [2,3])").unwrap(),
            call(
                "max",
                vec![Argument::literal(1), Argument::literal(vec![2, 3])]
            )
        );
        assert_eq!(parse_argument("$now()").unwrap(), call("now", vec![]));
    }

    #[test]
    fn test_nested_function_call() {
        assert_eq!(
            parse_argument("$int($len($Tags))").unwrap(),
            call("int", vec![call("len", vec![Argument::field("Tags")])])
        );
    }

    #[test]
    fn test_unclosed_function_call() {
        assert_eq!(
            parse_argument("$len($Name").unwrap_err(),
            ExpressionError::InvalidFunctionFormat("$len($Name".into())
        );
    }

    #[test]
    fn test_condition() {
        assert_eq!(
            parse_argument("$len($Name)>3").unwrap(),
            cond(
                call("len", vec![Argument::field("Name")]),
                Operator::Greater,
                Argument::literal(3)
            )
        );
    }

    #[test]
    fn test_two_char_operators_win() {
        assert_eq!(
            parse_argument("$A<=$B").unwrap(),
            cond(Argument::field("A"), Operator::LessEqual, Argument::field("B"))
        );
        assert_eq!(
            parse_argument("$A != 0").unwrap(),
            cond(Argument::field("A"), Operator::NotEqual, Argument::literal(0))
        );
    }

    #[test]
    fn test_chained_condition_nests_on_the_right() {
        assert_eq!(
            parse_argument("$A<$B>3").unwrap(),
            cond(
                Argument::field("A"),
                Operator::Less,
                cond(Argument::field("B"), Operator::Greater, Argument::literal(3))
            )
        );
    }

    #[test]
    fn test_condition_inside_function_call() {
        assert_eq!(
            parse_argument("$not($A==1)").unwrap(),
            call(
                "not",
                vec![cond(Argument::field("A"), Operator::Equal, Argument::literal(1))]
            )
        );
    }

    #[test]
    fn test_condition_with_quoted_literal() {
        assert_eq!(
            parse_argument(r#"$Status=="active""#).unwrap(),
            cond(
                Argument::field("Status"),
                Operator::Equal,
                Argument::literal("active")
            )
        );
    }

    #[test]
    fn test_condition_with_missing_operand() {
        assert_eq!(
            parse_argument("$A>").unwrap_err(),
            ExpressionError::EmptyValue
        );
    }

    #[test]
    fn test_literal_forms() {
        assert_eq!(parse_argument("18").unwrap(), Argument::literal(18));
        assert_eq!(parse_argument("1.5").unwrap(), Argument::literal(1.5));
        assert_eq!(
            parse_argument("{a:1}").unwrap(),
            Argument::Literal([("a", 1)].into_iter().collect::<Value>())
        );
    }

    #[test]
    fn test_failed_argument_fails_the_list() {
        assert!(parse_arguments("1,[2").is_err());
        assert!(parse_arguments("1,,2").is_err());
    }

    #[test]
    fn test_deeply_nested_calls_are_rejected() {
        let deep = format!("{}1{}", "$f(".repeat(20_000), ")".repeat(20_000));
        assert_eq!(
            parse_argument(&deep).unwrap_err(),
            ExpressionError::RecursionLimit(MAX_RECURSION_DEPTH)
        );
    }

    #[test]
    fn test_deeply_chained_conditions_are_rejected() {
        let deep = format!("{}1", "$A<".repeat(20_000));
        assert_eq!(
            parse_argument(&deep).unwrap_err(),
            ExpressionError::RecursionLimit(MAX_RECURSION_DEPTH)
        );
    }

    #[test]
    fn test_literal_depth_counts_from_enclosing_call() {
        let levels = MAX_RECURSION_DEPTH + 1;
        let list = format!("{}{}", "[".repeat(levels), "]".repeat(levels));
        assert!(parse_argument(&list).is_ok());
        assert_eq!(
            parse_argument(&format!("$len({list})")).unwrap_err(),
            ExpressionError::RecursionLimit(MAX_RECURSION_DEPTH)
        );
    }
}
