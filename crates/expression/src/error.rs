//! Error types for argument parsing and evaluation
//!
//! A single [`ExpressionError`] enum covers both phases. Parse-time variants
//! are produced while turning argument text into an [`Argument`](crate::Argument)
//! tree, evaluation-time variants while resolving that tree against a context
//! object.

use crate::value::Value;

/// Result type for expression operations
pub type ExpressionResult<T> = Result<T, ExpressionError>;

/// Errors raised by the value parser, the argument parser and the evaluator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ExpressionError {
    // ========================================================================
    // Parse errors
    // ========================================================================
    /// Literal text was empty after trimming.
    #[error("empty value")]
    EmptyValue,

    /// A `{...}` literal that does not close.
    #[error("invalid map format: {0}")]
    InvalidMap(String),

    /// A map entry without exactly one top-level colon.
    #[error("invalid map entry: {0}")]
    InvalidMapEntry(String),

    /// A `[...]` literal that does not close.
    #[error("invalid array format: {0}")]
    InvalidArray(String),

    /// Text classified as a function call whose parentheses are unbalanced.
    #[error("invalid function format: {0}")]
    InvalidFunctionFormat(String),

    /// Text classified as a condition without a usable operator.
    #[error("invalid condition: {0}")]
    InvalidCondition(String),

    /// Operator text outside the supported comparison set.
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    // ========================================================================
    // Evaluation errors
    // ========================================================================
    /// A field reference was evaluated without a context object.
    #[error("object is nil")]
    NilObject,

    /// The context object has no member with the requested name.
    #[error("field {0} not found in input")]
    FieldNotFound(String),

    /// Condition operands of different dynamic types.
    #[error("type mismatch: lhs is {lhs}, rhs is {rhs}")]
    TypeMismatch {
        /// Left operand type name
        lhs: &'static str,
        /// Right operand type name
        rhs: &'static str,
    },

    /// Ordering requested on a non-numeric type.
    #[error("unsupported type for comparison: {0}")]
    UnsupportedComparison(&'static str),

    /// Function name missing from the builtin registry.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// Builtin called with the wrong number of arguments.
    #[error("{function} expects {expected} argument, got {actual}")]
    ArgumentCount {
        /// Function name
        function: String,
        /// Required argument count
        expected: usize,
        /// Supplied argument count
        actual: usize,
    },

    /// `len` applied to a value without a length.
    #[error("unsupported type for len: {0}")]
    UnsupportedLength(&'static str),

    /// A value that cannot be coerced into the requested target type.
    #[error("failed to parse {value:?} of type {type_name} as {target}")]
    Coercion {
        /// Rendered source value
        value: String,
        /// Source type name
        type_name: &'static str,
        /// Target type name
        target: &'static str,
    },

    /// A coercion whose result does not fit the target type.
    #[error("value {value} of type {type_name} overflows {target}")]
    Overflow {
        /// Rendered source value
        value: String,
        /// Source type name
        type_name: &'static str,
        /// Target type name
        target: &'static str,
    },

    /// Evaluation nested deeper than the evaluator allows.
    #[error("maximum recursion depth ({0}) exceeded")]
    RecursionLimit(usize),

    /// JSON input that has no counterpart in the dynamic value model.
    #[error("unsupported JSON value: {0}")]
    UnsupportedJson(String),
}

impl ExpressionError {
    /// Creates a [`FieldNotFound`](Self::FieldNotFound) error.
    pub fn field_not_found(name: impl Into<String>) -> Self {
        Self::FieldNotFound(name.into())
    }

    /// Creates a [`TypeMismatch`](Self::TypeMismatch) error from two operands.
    pub fn type_mismatch(lhs: &Value, rhs: &Value) -> Self {
        Self::TypeMismatch {
            lhs: lhs.type_name(),
            rhs: rhs.type_name(),
        }
    }

    /// Creates a [`Coercion`](Self::Coercion) error for `value`.
    pub fn coercion(value: &Value, target: &'static str) -> Self {
        Self::Coercion {
            value: value.to_string(),
            type_name: value.type_name(),
            target,
        }
    }

    /// Creates an [`Overflow`](Self::Overflow) error for `value`.
    pub fn overflow(value: &Value, target: &'static str) -> Self {
        Self::Overflow {
            value: value.to_string(),
            type_name: value.type_name(),
            target,
        }
    }

    /// Creates an [`ArgumentCount`](Self::ArgumentCount) error.
    pub fn argument_count(function: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ArgumentCount {
            function: function.into(),
            expected,
            actual,
        }
    }

    /// Returns true for errors raised while parsing argument text.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyValue
                | Self::InvalidMap(_)
                | Self::InvalidMapEntry(_)
                | Self::InvalidArray(_)
                | Self::InvalidFunctionFormat(_)
                | Self::InvalidCondition(_)
                | Self::UnknownOperator(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ExpressionError::EmptyValue.to_string(), "empty value");
        assert_eq!(ExpressionError::NilObject.to_string(), "object is nil");
        assert_eq!(
            ExpressionError::field_not_found("Age").to_string(),
            "field Age not found in input"
        );
        assert_eq!(
            ExpressionError::argument_count("len", 1, 2).to_string(),
            "len expects 1 argument, got 2"
        );
    }

    #[test]
    fn test_type_mismatch_names_both_sides() {
        let err = ExpressionError::type_mismatch(&Value::Int(1), &Value::Float(1.0));
        assert_eq!(err.to_string(), "type mismatch: lhs is int, rhs is float");
    }

    #[test]
    fn test_coercion_message() {
        let err = ExpressionError::coercion(&Value::from("abc"), "int64");
        assert_eq!(
            err.to_string(),
            r#"failed to parse "abc" of type string as int64"#
        );
    }

    #[test]
    fn test_is_parse_error() {
        assert!(ExpressionError::EmptyValue.is_parse_error());
        assert!(ExpressionError::InvalidMapEntry("a".into()).is_parse_error());
        assert!(!ExpressionError::NilObject.is_parse_error());
        assert!(!ExpressionError::UnknownFunction("max".into()).is_parse_error());
    }
}
