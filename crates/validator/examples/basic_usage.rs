//! Basic usage example for runval-validator

use runval_expression::{Context, Value};
use runval_validator::ValidationRules;

fn main() {
    let rules = ValidationRules::parse("required && between:$MinAge,$MaxAge || oneof:0");
    if let Some(error) = rules.parse_error() {
        println!("✗ rules do not parse:\n{error}");
        return;
    }

    let limits = Context::builder()
        .field("MinAge", 18)
        .field("MaxAge", 65)
        .build();

    for age in [30, 0, 70] {
        let errors = rules.validate(&Value::Int(age), Some(&limits));
        if errors.is_empty() {
            println!("✓ {age} is valid");
        } else {
            println!("✗ {age} is invalid:\n{errors}");
        }
    }
}
