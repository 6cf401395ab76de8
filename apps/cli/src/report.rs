//! Writing results to stdout.

use std::io::{self, Write};

use runval_validator::{Tag, ValidationErrors};
use serde_json::json;

use crate::OutputFormat;

/// Prints the validation result: `valid`, or one line per failure.
pub fn errors(format: OutputFormat, errors: &ValidationErrors) -> io::Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text if errors.is_empty() => writeln!(out, "valid"),
        OutputFormat::Text => writeln!(out, "{errors}"),
        OutputFormat::Json => {
            let body = json!({
                "valid": errors.is_empty(),
                "errors": errors.to_json_value(),
            });
            writeln!(out, "{body:#}")
        }
    }
}

/// Prints every rule name with its arity.
pub fn rules(format: OutputFormat) -> io::Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => {
            for tag in Tag::known() {
                let arity = if tag.takes_arguments() {
                    "arguments"
                } else {
                    "no arguments"
                };
                writeln!(out, "{:<16}{arity}", tag.as_str())?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let body: Vec<_> = Tag::known()
                .map(|tag| json!({"name": tag.as_str(), "arguments": tag.takes_arguments()}))
                .collect();
            writeln!(out, "{:#}", serde_json::Value::Array(body))
        }
    }
}
