//! Utility functions

use super::single_arg;
use crate::error::ExpressionResult;
use crate::value::Value;
use crate::value_utils::as_length;

/// Character count of a string, element count of a list or map
pub fn len(args: &[Value]) -> ExpressionResult<Value> {
    let value = single_arg("len", args)?;
    as_length(value).map(|n| Value::Int(n as i64))
}
