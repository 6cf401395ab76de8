//! # runval-validator
//!
//! Validates dynamic values against rule strings such as
//! `required && between:18,$MaxAge || oneof:0`.
//!
//! ## Quick Start
//!
//! ```rust
//! use runval_expression::{Context, Value};
//! use runval_validator::ValidationRules;
//!
//! let rules: ValidationRules = "required && between:18,$MaxAge".parse().unwrap();
//! let person = Context::builder().field("MaxAge", 65).build();
//!
//! assert!(rules.validate(&Value::Int(30), Some(&person)).is_empty());
//!
//! let errors = rules.validate(&Value::Int(70), Some(&person));
//! assert_eq!(
//!     errors.to_string(),
//!     "between:18,$MaxAge: between validation failed: 70 is not inclusively between 18 and 65"
//! );
//! ```
//!
//! ## Rule Strings
//!
//! - `&&` separates groups; every group must pass.
//! - `||` separates alternatives within a group; one must pass.
//! - `name` or `name:arguments`; only the first `:` is significant.
//!
//! Arguments use the expression language of `runval-expression`: literals,
//! `$Field` references, `$len(...)` calls and comparisons.
//!
//! A rule string with any parse problem can still be inspected through
//! [`ValidationRules::parse`], but validating with it always yields a single
//! error listing every problem.

pub mod error;
mod macros;
mod patterns;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod tags;
pub mod validators;

pub use error::{
    ParseError, RuleError, RuleParseError, RuleResult, UNPARSABLE_RULES, ValidationError,
    ValidationErrors,
};
pub use rule::ValidationRule;
pub use rules::ValidationRules;
pub use tags::{Tag, UnknownTag};
pub use validators::{ArgumentRule, SimpleRule};
