//! Property-based tests for runval-expression.

use proptest::prelude::*;
use runval_expression::parser::split_top_level;
use runval_expression::{Argument, Context, Value, parse_argument, parse_arguments, parse_value};

// ============================================================================
// PARSING: integers and plain words survive the value parser
// ============================================================================

proptest! {
    #[test]
    fn integers_parse_as_int(n in any::<i64>()) {
        prop_assert_eq!(parse_value(&n.to_string()).unwrap(), Value::Int(n));
    }

    #[test]
    fn lowercase_words_parse_as_strings(s in "[a-z]{1,12}") {
        prop_assume!(s != "true" && s != "false" && s != "inf" && s != "infinity" && s != "nan");
        prop_assert_eq!(parse_value(&s).unwrap(), Value::String(s.clone()));
    }

    #[test]
    fn integer_lists_keep_length(items in prop::collection::vec(any::<i32>(), 0..8)) {
        let text = format!(
            "[{}]",
            items.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
        );
        let parsed = parse_value(&text).unwrap();
        prop_assert_eq!(parsed.as_list().map(<[Value]>::len), Some(items.len()));
    }
}

// ============================================================================
// SPLITTING: flat lists split into one segment per item
// ============================================================================

proptest! {
    #[test]
    fn split_flat_words(words in prop::collection::vec("[a-z0-9]{1,6}", 1..6)) {
        let joined = words.join(",");
        prop_assert_eq!(split_top_level(&joined, ','), words);
    }

    #[test]
    fn split_never_breaks_brackets(a in "[a-z]{1,4}", b in "[a-z]{1,4}") {
        let text = format!("[{a},{b}],{{{a}:{b}}}");
        let parts = split_top_level(&text, ',');
        prop_assert_eq!(parts.len(), 2);
    }
}

// ============================================================================
// EVALUATION: determinism and agreement with native comparison
// ============================================================================

proptest! {
    #[test]
    fn evaluation_is_deterministic(age in any::<i64>(), bound in any::<i64>()) {
        let ctx = Context::builder().field("Age", age).build();
        let arg = parse_argument(&format!("$Age>={bound}")).unwrap();
        let first = arg.evaluate(Some(&ctx)).unwrap();
        let second = arg.evaluate(Some(&ctx)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn condition_matches_native_ordering(a in any::<i64>(), b in any::<i64>()) {
        let ctx = Context::builder().field("A", a).field("B", b).build();
        for (op, expected) in [("<", a < b), ("<=", a <= b), (">", a > b), (">=", a >= b), ("==", a == b), ("!=", a != b)] {
            let arg = parse_argument(&format!("$A{op}$B")).unwrap();
            prop_assert_eq!(arg.evaluate(Some(&ctx)).unwrap(), Value::Bool(expected));
        }
    }

    #[test]
    fn len_counts_chars(s in "\\PC{0,16}") {
        let ctx = Context::builder().field("S", s.clone()).build();
        let args = parse_arguments("$len($S)").unwrap();
        let value = args.values().next().map(|arg| arg.evaluate(Some(&ctx)));
        prop_assert_eq!(value, Some(Ok(Value::Int(s.chars().count() as i64))));
    }

    #[test]
    fn literal_arguments_need_no_context(n in any::<i64>()) {
        let arg = parse_argument(&n.to_string()).unwrap();
        prop_assert!(arg.is_constant());
        prop_assert_eq!(arg.evaluate(None).unwrap(), Value::Int(n));
        prop_assert_eq!(arg, Argument::literal(n));
    }
}
