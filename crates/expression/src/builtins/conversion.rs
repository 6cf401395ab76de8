//! Type conversion functions

use super::single_arg;
use crate::error::ExpressionResult;
use crate::value::Value;
use crate::value_utils::{as_float64, as_int64};

/// Convert value to a signed integer
pub fn int(args: &[Value]) -> ExpressionResult<Value> {
    let value = single_arg("int", args)?;
    as_int64(value).map(Value::Int)
}

/// Convert value to a float
pub fn float(args: &[Value]) -> ExpressionResult<Value> {
    let value = single_arg("float", args)?;
    as_float64(value).map(Value::Float)
}
