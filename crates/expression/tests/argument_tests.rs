//! End-to-end parse and evaluate tests for rule arguments.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use runval_expression::{
    Argument, Condition, ExpressionError, FieldLookup, FunctionCall, Operator, Value,
    field_lookup, parse_arguments,
};
use serde_json::json;

struct Person {
    name: String,
    age: i64,
    nicknames: Vec<String>,
}

field_lookup!(Person {
    "Name" => name,
    "Age" => age,
    "Nicknames" => nicknames,
});

fn alice() -> Person {
    Person {
        name: "Alice".into(),
        age: 30,
        nicknames: vec!["Al".into(), "Ally".into()],
    }
}

fn evaluate_all(text: &str, ctx: Option<&dyn FieldLookup>) -> Vec<Value> {
    parse_arguments(text)
        .unwrap()
        .values()
        .map(|arg| arg.evaluate(ctx).unwrap())
        .collect()
}

#[test]
fn mixed_argument_list() {
    let args = parse_arguments(r#"18, $Age, $len($Name)>3, "quoted, text", \$Age"#).unwrap();

    let keys: Vec<_> = args.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["18", "$Age", "$len($Name)>3", r#""quoted, text""#, r"\$Age"]
    );

    let values: Vec<_> = args.values().cloned().collect();
    assert_eq!(
        values,
        [
            Argument::literal(18),
            Argument::field("Age"),
            Argument::Condition(Condition::new(
                Argument::FunctionCall(FunctionCall::new("len", vec![Argument::field("Name")])),
                Operator::Greater,
                Argument::literal(3),
            )),
            Argument::literal("quoted, text"),
            Argument::literal("$Age"),
        ]
    );
}

#[test]
fn evaluate_against_struct() {
    let person = alice();
    let values = evaluate_all("$Age, $len($Nicknames), $Name==\"Alice\"", Some(&person));
    assert_eq!(values, [Value::Int(30), Value::Int(2), Value::Bool(true)]);
}

#[test]
fn evaluate_against_json_object() {
    let json = json!({"limit": 10, "tags": ["x", "y", "z"]});
    let object = json.as_object().unwrap();
    let values = evaluate_all("$limit>5, $len($tags)", Some(object));
    assert_eq!(values, [Value::Bool(true), Value::Int(3)]);
}

#[test]
fn evaluate_against_hash_map() {
    let mut map = HashMap::new();
    map.insert("Count".to_owned(), Value::Uint(7));
    let values = evaluate_all("$Count, $int($Count)", Some(&map));
    assert_eq!(values, [Value::Uint(7), Value::Int(7)]);
}

#[test]
fn field_reference_errors() {
    let args = parse_arguments("$Height").unwrap();
    let arg = &args["$Height"];

    assert_eq!(arg.evaluate(None).unwrap_err(), ExpressionError::NilObject);
    assert_eq!(
        arg.evaluate(Some(&alice())).unwrap_err().to_string(),
        "field Height not found in input"
    );
}

#[test]
fn nested_literals() {
    let values = evaluate_all("[1,[2,3]], {a:[1,2], b:{c:true}}", None);
    assert_eq!(values[0], Value::from(vec![Value::Int(1), Value::from(vec![2, 3])]));
    assert_eq!(
        values[1].to_json(),
        json!({"a": [1, 2], "b": {"c": true}})
    );
}

#[test]
fn malformed_arguments_fail_parsing() {
    for text in ["[1,2", "{a:1", "{a}", "$len($Name", "1,,2", "$A>"] {
        let err = parse_arguments(text).unwrap_err();
        assert!(err.is_parse_error(), "{text}: {err}");
    }
}

#[test]
fn condition_operand_kinds_must_match() {
    let person = alice();
    let args = parse_arguments("$Age>1.5").unwrap();
    let err = args[0].evaluate(Some(&person)).unwrap_err();
    assert_eq!(err.to_string(), "type mismatch: lhs is int, rhs is float");
}
