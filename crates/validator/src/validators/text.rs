//! Character class rules
//!
//! String-only predicates over the characters of the input.

use runval_expression::Value;

use super::expect_string;
use crate::error::{RuleError, RuleResult};
use crate::macros::regex_rules;
use crate::patterns::{
    ALPHA, ALPHA_NUMERIC, ALPHA_NUMERIC_UNICODE, ALPHA_UNICODE, ASCII, HEXADECIMAL, MULTIBYTE,
    NUMERIC, NUMERIC_UNSIGNED, PRINTABLE_ASCII,
};

regex_rules! {
    /// ASCII letters only.
    alpha => ALPHA, "alpha";
    /// ASCII letters and digits only.
    alpha_numeric => ALPHA_NUMERIC, "alphanumeric";
    /// Unicode letters only.
    alpha_unicode => ALPHA_UNICODE, "alpha unicode";
    /// Unicode letters and numbers only.
    alpha_numeric_unicode => ALPHA_NUMERIC_UNICODE, "alpha unicode numeric";
    /// Optionally signed decimal number, e.g. `-12.5`.
    numeric => NUMERIC, "numeric";
    /// Unsigned decimal number.
    numeric_unsigned => NUMERIC_UNSIGNED, "unsigned numeric";
    /// Hex digits with an optional `0x` prefix.
    hexadecimal => HEXADECIMAL, "hexadecimal";
    ascii => ASCII, "ASCII";
    printable_ascii => PRINTABLE_ASCII, "Printable ASCII";
    /// Spaces and characters outside ASCII only.
    multi_byte => MULTIBYTE, "MultiByte";
}

/// Fails when any letter is not uppercase. Non-letters are ignored.
pub fn uppercase(value: &Value) -> RuleResult {
    let input = expect_string(value)?;
    if input.chars().any(|c| c.is_alphabetic() && !c.is_uppercase()) {
        return Err(RuleError::invalid("uppercase", input));
    }
    Ok(())
}

/// Fails when any letter is not lowercase. Non-letters are ignored.
pub fn lowercase(value: &Value) -> RuleResult {
    let input = expect_string(value)?;
    if input.chars().any(|c| c.is_alphabetic() && !c.is_lowercase()) {
        return Err(RuleError::invalid("lowercase", input));
    }
    Ok(())
}
