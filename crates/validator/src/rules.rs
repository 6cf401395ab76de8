//! Rule strings: AND-groups of OR-alternatives

use std::str::FromStr;

use runval_expression::{FieldLookup, Value};
use tracing::{debug, trace};

use crate::error::{
    ParseError, RuleError, UNPARSABLE_RULES, ValidationError, ValidationErrors,
};
use crate::rule::ValidationRule;

const AND: &str = "&&";
const OR: &str = "||";

/// A parsed rule string.
///
/// `required && between:1,10 || oneof:0` holds two groups: the first with a
/// single alternative, the second with two. A value passes when every group
/// has at least one passing alternative.
///
/// Parsed rules are immutable and may be shared across threads; one rule
/// string is typically parsed once and validated many times.
#[derive(Debug, Default)]
pub struct ValidationRules {
    groups: Vec<Vec<ValidationRule>>,
}

impl ValidationRules {
    /// Parses `text` without failing.
    ///
    /// Every group and alternative is kept, including those that did not
    /// parse; check [`parse_error`](Self::parse_error) to find out whether the
    /// rules are usable. Use [`str::parse`] for the strict form.
    pub fn parse(text: &str) -> Self {
        let groups = if text.trim().is_empty() {
            Vec::new()
        } else {
            text.split(AND)
                .enumerate()
                .map(|(index, group)| {
                    group
                        .split(OR)
                        .map(|alternative| ValidationRule::parse(alternative, index))
                        .collect()
                })
                .collect()
        };

        let rules = Self { groups };
        debug!(
            groups = rules.groups.len(),
            alternatives = rules.iter().count(),
            valid = rules.is_valid(),
            "parsed validation rules"
        );
        rules
    }

    /// Aggregate of every rule that failed to parse, in source order.
    pub fn parse_error(&self) -> Option<ParseError> {
        if self.groups.is_empty() {
            return Some(ParseError::NoRules);
        }
        let errors: Vec<_> = self.iter().filter_map(ValidationRule::error).cloned().collect();
        if errors.is_empty() {
            None
        } else {
            Some(ParseError::Rules(errors))
        }
    }

    /// Returns true when every alternative parsed.
    pub fn is_valid(&self) -> bool {
        self.iter().all(ValidationRule::is_valid)
    }

    /// AND-groups in source order.
    pub fn groups(&self) -> &[Vec<ValidationRule>] {
        &self.groups
    }

    /// All alternatives, group by group.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationRule> {
        self.groups.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Validates `value`, reading `$Field` references from `context`.
    ///
    /// Within a group the first passing alternative wins and the failures of
    /// the alternatives tried before it are dropped. A group with no passing
    /// alternative reports every one of its failures. If any rule failed to
    /// parse, the result is a single error describing all parse problems.
    pub fn validate(&self, value: &Value, context: Option<&dyn FieldLookup>) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for (index, group) in self.groups.iter().enumerate() {
            let mut failures = ValidationErrors::new();
            let mut passed = false;

            for rule in group {
                if !rule.is_valid() {
                    return self.poisoned();
                }
                match rule.check(value, context) {
                    Ok(()) => {
                        trace!(group = index, rule = rule.text(), "rule passed");
                        passed = true;
                        break;
                    }
                    Err(cause) => {
                        trace!(group = index, rule = rule.text(), %cause, "rule failed");
                        failures.add(ValidationError::new(rule.text(), cause));
                    }
                }
            }

            if !passed {
                errors.append(&mut failures);
            }
        }

        errors
    }

    /// [`validate`](Self::validate) as a `Result`.
    pub fn validate_result(
        &self,
        value: &Value,
        context: Option<&dyn FieldLookup>,
    ) -> Result<(), ValidationErrors> {
        self.validate(value, context).into_result()
    }

    fn poisoned(&self) -> ValidationErrors {
        let error = self.parse_error().unwrap_or(ParseError::NoRules);
        debug!(rules = error.rules().len(), "validation blocked by unparsable rules");
        std::iter::once(ValidationError::new(UNPARSABLE_RULES, RuleError::Parse(error))).collect()
    }
}

impl FromStr for ValidationRules {
    type Err = ParseError;

    /// Parses `text`, failing if it is empty or any rule does not parse.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rules = Self::parse(text);
        match rules.parse_error() {
            Some(error) => Err(error),
            None => Ok(rules),
        }
    }
}

impl<'a> IntoIterator for &'a ValidationRules {
    type Item = &'a Vec<ValidationRule>;
    type IntoIter = std::slice::Iter<'a, Vec<ValidationRule>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
