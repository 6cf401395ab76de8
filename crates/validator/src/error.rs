//! Rule-level error types
//!
//! [`RuleError`] is the single cause type for everything that can go wrong
//! with a rule: predicate failures, argument evaluation failures and grammar
//! problems found while parsing. [`ParseError`] aggregates the grammar
//! problems of a whole rule string.

use std::fmt;

use runval_expression::ExpressionError;

/// Result type for rule predicates
pub type RuleResult<T = ()> = Result<T, RuleError>;

// ============================================================================
// RULE ERROR
// ============================================================================

/// Why a rule did not pass, or could not be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// A string-only predicate received another type.
    #[error("expected a string, got {0}")]
    ExpectedString(&'static str),

    /// The value does not have the format a predicate checks for.
    #[error("invalid {label}: {value}")]
    InvalidFormat {
        /// Human name of the format
        label: &'static str,
        /// Offending value
        value: String,
    },

    /// The value is the zero value of its type.
    #[error("value is required")]
    Required,

    /// A predicate received the wrong number of arguments.
    #[error("{rule} expects {expected}, got {actual}")]
    ArgumentCount {
        /// Rule name
        rule: &'static str,
        /// Expected count, worded
        expected: &'static str,
        /// Supplied count
        actual: usize,
    },

    /// The input or an argument could not be coerced.
    #[error("unsupported type for {target}: {source}")]
    UnsupportedType {
        /// What was being coerced
        target: &'static str,
        /// Coercion failure
        source: ExpressionError,
    },

    /// Argument evaluation failed.
    #[error(transparent)]
    Expression(#[from] ExpressionError),

    /// A pattern argument is not a valid regular expression.
    #[error("invalid regex: {0}")]
    InvalidRegex(String),

    /// Predicate-specific failure with a preformatted message.
    #[error("{0}")]
    Failed(String),

    // ========================================================================
    // Grammar errors
    // ========================================================================
    /// An alternative with no text.
    #[error("empty rule")]
    EmptyRule,

    /// Rule name not present in either registry.
    #[error("unknown rule: {0}")]
    UnknownRule(String),

    /// Argument-taking rule written without arguments.
    #[error("missing arguments for rule: {0}")]
    MissingArguments(String),

    /// Argument-free rule written with arguments.
    #[error("rule: {0} accepts no arguments")]
    UnexpectedArguments(String),

    /// One or more rules of the rule string failed to parse.
    #[error("{0}")]
    Parse(ParseError),
}

impl RuleError {
    /// Creates an [`InvalidFormat`](Self::InvalidFormat) error.
    pub fn invalid(label: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidFormat {
            label,
            value: value.into(),
        }
    }

    /// Creates a [`Failed`](Self::Failed) error.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Creates an [`ArgumentCount`](Self::ArgumentCount) error.
    pub fn argument_count(rule: &'static str, expected: &'static str, actual: usize) -> Self {
        Self::ArgumentCount {
            rule,
            expected,
            actual,
        }
    }

    /// Creates an [`UnsupportedType`](Self::UnsupportedType) error.
    pub fn unsupported(target: &'static str, source: ExpressionError) -> Self {
        Self::UnsupportedType { target, source }
    }

    /// Returns true for errors produced by the rule grammar parser.
    pub fn is_grammar_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyRule
                | Self::UnknownRule(_)
                | Self::MissingArguments(_)
                | Self::UnexpectedArguments(_)
                | Self::Parse(_)
        ) || matches!(self, Self::Expression(e) if e.is_parse_error())
    }
}

// ============================================================================
// PARSE ERRORS
// ============================================================================

/// A single rule that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleParseError {
    /// Source text of the rule
    pub rule_text: String,
    /// What went wrong
    pub error: RuleError,
}

impl RuleParseError {
    pub fn new(rule_text: impl Into<String>, error: RuleError) -> Self {
        Self {
            rule_text: rule_text.into(),
            error,
        }
    }
}

impl fmt::Display for RuleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error parsing rule '{}' with error '{}'",
            self.rule_text, self.error
        )
    }
}

impl std::error::Error for RuleParseError {}

/// Aggregate of every grammar problem in a rule string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The rule string produced no groups at all.
    NoRules,
    /// Individual rules failed; rendered one per line in source order.
    Rules(Vec<RuleParseError>),
}

impl ParseError {
    /// The failing rules, empty for [`NoRules`](Self::NoRules).
    pub fn rules(&self) -> &[RuleParseError] {
        match self {
            Self::NoRules => &[],
            Self::Rules(errors) => errors,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRules => f.write_str("no rules found"),
            Self::Rules(errors) => {
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ParseError {}

// ============================================================================
// VALIDATION ERRORS
// ============================================================================

/// Rule text of the single error reported when a rule string has parse errors.
pub const UNPARSABLE_RULES: &str = "one or more validation rules cannot be parsed";

/// A failed rule: its source text and the cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Source text of the rule that failed
    pub rule: String,
    /// Why it failed
    pub cause: RuleError,
}

impl ValidationError {
    pub fn new(rule: impl Into<String>, cause: RuleError) -> Self {
        Self {
            rule: rule.into(),
            cause,
        }
    }

    /// Converts the error to a JSON object with `rule` and `error` members.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "rule": self.rule,
            "error": self.cause.to_string(),
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule, self.cause)
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// Failures of one validate call, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub(crate) fn append(&mut self, other: &mut Self) {
        self.errors.append(&mut other.errors);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// JSON array of [`ValidationError::to_json_value`] objects.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::Array(self.errors.iter().map(ValidationError::to_json_value).collect())
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
