//! Macros for declaring rule predicates with minimal boilerplate.

// ============================================================================
// REGEX RULES
// ============================================================================

/// Declares string-only predicates that match a compiled pattern.
///
/// Each entry expands to `pub fn name(value: &Value) -> RuleResult` which
/// rejects non-strings with [`RuleError::ExpectedString`] and reports a
/// mismatch as [`RuleError::InvalidFormat`] with the given label.
///
/// ```rust,ignore
/// regex_rules! {
///     /// Letters only.
///     alpha => ALPHA, "alpha";
/// }
/// ```
///
/// [`RuleError::ExpectedString`]: crate::RuleError::ExpectedString
/// [`RuleError::InvalidFormat`]: crate::RuleError::InvalidFormat
macro_rules! regex_rules {
    ($($(#[$meta:meta])* $name:ident => $pattern:path, $label:literal;)+) => {
        $(
            $(#[$meta])*
            pub fn $name(value: &runval_expression::Value) -> $crate::RuleResult {
                let input = $crate::validators::expect_string(value)?;
                if $pattern.is_match(input) {
                    Ok(())
                } else {
                    Err($crate::RuleError::invalid($label, input))
                }
            }
        )+
    };
}

pub(crate) use regex_rules;
