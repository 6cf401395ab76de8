//! Loading the value under validation and the context object.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, bail};
use runval_expression::{Context, Value};

/// Parses `--value`: a JSON literal, or the raw text when it is not JSON.
pub fn parse_value(text: &str) -> anyhow::Result<Value> {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(json) => Value::try_from(json).with_context(|| format!("unsupported value: {text}")),
        Err(_) => Ok(Value::String(text.to_owned())),
    }
}

/// Loads `--context`: an inline JSON object, or the path of a file holding one.
///
/// `null` members are left out, so rules referencing them see a missing field.
/// Nested `null` items are dropped the same way.
pub fn load_context(source: &str) -> anyhow::Result<Context> {
    let text = if source.trim_start().starts_with('{') {
        source.to_owned()
    } else {
        fs::read_to_string(Path::new(source))
            .with_context(|| format!("failed to read context file {source}"))?
    };

    let json: serde_json::Value =
        serde_json::from_str(&text).context("context is not valid JSON")?;
    let serde_json::Value::Object(members) = json else {
        bail!("context must be a JSON object");
    };

    let mut context = Context::new();
    for (name, member) in members {
        if let Some(value) = Value::from_json_lossy(member) {
            context.set(name, value);
        }
    }
    Ok(context)
}
