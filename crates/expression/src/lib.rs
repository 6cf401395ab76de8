//! # runval-expression
//!
//! Parser and evaluator for the argument language used by runval rule
//! strings.
//!
//! Arguments are the text after a rule name's colon: `between:18,$MaxAge`,
//! `requiredif:$len($Name)>0`, `oneof:[1,2],{a:1}`. Each argument parses
//! into an [`Argument`] tree and evaluates to a dynamic [`Value`] against an
//! optional context object implementing [`FieldLookup`].
//!
//! ```
//! use runval_expression::{Context, Value, parse_arguments};
//!
//! let args = parse_arguments("$len($Name)>3, 42").unwrap();
//! let ctx = Context::builder().field("Name", "Alice").build();
//!
//! let results: Vec<Value> = args
//!     .values()
//!     .map(|arg| arg.evaluate(Some(&ctx)).unwrap())
//!     .collect();
//! assert_eq!(results, [Value::Bool(true), Value::Int(42)]);
//! ```

pub mod builtins;
pub mod context;
pub mod core;
pub mod error;
pub mod eval;
pub mod parser;
pub mod value;
pub mod value_utils;

pub use builtins::BuiltinRegistry;
pub use context::{Context, ContextBuilder, FieldLookup};
pub use crate::core::ast::{Argument, Arguments, Condition, FunctionCall, Operator};
pub use error::{ExpressionError, ExpressionResult};
pub use eval::{Evaluator, compare};
pub use parser::{parse_argument, parse_arguments, parse_value};
pub use value::{Value, ValueMap};
pub use value_utils::{as_float64, as_int64, as_length, as_string};
