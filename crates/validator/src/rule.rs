//! A single parsed alternative of a rule string

use std::fmt;

use runval_expression::{FieldLookup, Value, parse_arguments};

use crate::error::{RuleError, RuleParseError, RuleResult};
use crate::registry::{argument_rule, simple_rule};
use crate::tags::Tag;

type Check = Box<dyn Fn(&Value, Option<&dyn FieldLookup>) -> RuleResult + Send + Sync>;

/// One alternative of one AND-group, bound to its predicate.
///
/// A rule whose text could not be parsed still exists: it carries the
/// [`RuleParseError`] and its check returns the same cause, so the group
/// keeps its size and order.
pub struct ValidationRule {
    tag: Tag,
    text: String,
    group: usize,
    error: Option<RuleParseError>,
    check: Check,
}

impl ValidationRule {
    fn new(tag: Tag, text: &str, group: usize, check: Check) -> Self {
        Self {
            tag,
            text: text.to_owned(),
            group,
            error: None,
            check,
        }
    }

    fn bad(tag: Tag, text: &str, group: usize, error: RuleError) -> Self {
        let cause = error.clone();
        Self {
            tag,
            text: text.to_owned(),
            group,
            error: Some(RuleParseError::new(text, error)),
            check: Box::new(move |_, _| Err(cause.clone())),
        }
    }

    /// Parses one alternative belonging to AND-group `group`.
    ///
    /// Only the first `:` separates the name from the argument text; the
    /// name is matched case-insensitively. Problems are recorded on the
    /// returned rule rather than returned as an error.
    pub fn parse(text: &str, group: usize) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return Self::bad(Tag::Unknown, text, group, RuleError::EmptyRule);
        }

        let (name, args) = text.split_once(':').unwrap_or((text, ""));
        let name = name.trim().to_lowercase();
        let args = args.trim();
        let tag = name.parse::<Tag>().unwrap_or(Tag::Unknown);

        if args.is_empty() {
            if let Some(rule) = simple_rule(tag) {
                return Self::new(tag, text, group, Box::new(move |value, _| rule(value)));
            }
            let error = if tag.takes_arguments() {
                RuleError::MissingArguments(name)
            } else {
                RuleError::UnknownRule(name)
            };
            return Self::bad(tag, text, group, error);
        }

        let Some(rule) = argument_rule(tag) else {
            let error = if tag == Tag::Unknown {
                RuleError::UnknownRule(name)
            } else {
                RuleError::UnexpectedArguments(name)
            };
            return Self::bad(tag, text, group, error);
        };

        match parse_arguments(args) {
            Ok(arguments) => Self::new(
                tag,
                text,
                group,
                Box::new(move |value, context| rule(value, context, &arguments)),
            ),
            Err(e) => Self::bad(tag, text, group, RuleError::Expression(e)),
        }
    }

    /// Rule name, [`Tag::Unknown`] when unrecognized.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Trimmed source text of the alternative.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Index of the AND-group this rule belongs to.
    pub fn group(&self) -> usize {
        self.group
    }

    /// Parse problem recorded for this rule, if any.
    pub fn error(&self) -> Option<&RuleParseError> {
        self.error.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Runs the predicate against `value`.
    pub fn check(&self, value: &Value, context: Option<&dyn FieldLookup>) -> RuleResult {
        (self.check)(value, context)
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("tag", &self.tag)
            .field("text", &self.text)
            .field("group", &self.group)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use runval_expression::{Context, ExpressionError};

    fn parse_error(text: &str) -> RuleError {
        ValidationRule::parse(text, 0)
            .error()
            .map(|e| e.error.clone())
            .expect("rule should not parse")
    }

    #[test]
    fn test_simple_rule() {
        let rule = ValidationRule::parse(" Required ", 2);
        assert!(rule.is_valid());
        assert_eq!(rule.tag(), Tag::Required);
        assert_eq!(rule.text(), "Required");
        assert_eq!(rule.group(), 2);
        assert!(rule.check(&Value::from("x"), None).is_ok());
        assert_eq!(rule.check(&Value::from(""), None), Err(RuleError::Required));
    }

    #[test]
    fn test_argument_rule() {
        let rule = ValidationRule::parse("between:1, $Max", 0);
        assert!(rule.is_valid());
        assert_eq!(rule.tag(), Tag::Between);

        let ctx = Context::builder().field("Max", 10).build();
        assert!(rule.check(&Value::Int(5), Some(&ctx)).is_ok());
        assert!(rule.check(&Value::Int(11), Some(&ctx)).is_err());
    }

    #[test]
    fn test_only_first_colon_splits() {
        let rule = ValidationRule::parse("regex:^a:b$", 0);
        assert!(rule.is_valid());
        assert!(rule.check(&Value::from("a:b"), None).is_ok());
    }

    #[test]
    fn test_grammar_errors() {
        assert_eq!(parse_error(""), RuleError::EmptyRule);
        assert_eq!(parse_error("   "), RuleError::EmptyRule);
        assert_eq!(
            parse_error("nosuchrule"),
            RuleError::UnknownRule("nosuchrule".into())
        );
        assert_eq!(
            parse_error("nosuchrule:1"),
            RuleError::UnknownRule("nosuchrule".into())
        );
        assert_eq!(
            parse_error("between"),
            RuleError::MissingArguments("between".into())
        );
        assert_eq!(
            parse_error("between:  "),
            RuleError::MissingArguments("between".into())
        );
        assert_eq!(
            parse_error("alpha:1"),
            RuleError::UnexpectedArguments("alpha".into())
        );
    }

    #[test]
    fn test_bad_arguments_are_recorded() {
        let rule = ValidationRule::parse("oneof:[1,2", 1);
        assert_eq!(rule.tag(), Tag::OneOf);
        assert_eq!(rule.group(), 1);

        let error = rule.error().expect("argument text should not parse");
        assert_eq!(error.rule_text, "oneof:[1,2");
        assert!(matches!(
            error.error,
            RuleError::Expression(ExpressionError::InvalidArray(_))
        ));
        assert_eq!(rule.check(&Value::Int(1), None), Err(error.error.clone()));
    }

    #[test]
    fn test_parse_error_display() {
        let rule = ValidationRule::parse("alpha:1", 0);
        assert_eq!(
            rule.error().map(ToString::to_string).as_deref(),
            Some("error parsing rule 'alpha:1' with error 'rule: alpha accepts no arguments'")
        );
    }

    #[test]
    fn test_debug_omits_check() {
        let debug = format!("{:?}", ValidationRule::parse("alpha", 0));
        assert!(debug.starts_with("ValidationRule { tag: Alpha"));
        assert!(debug.ends_with(".. }"));
    }
}
