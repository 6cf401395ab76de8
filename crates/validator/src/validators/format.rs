//! Identifier and notation formats
//!
//! Colors, contact details, registry identifiers, digests and coordinates.

use runval_expression::Value;

use super::expect_string;
use crate::error::{RuleError, RuleResult};
use crate::macros::regex_rules;
use crate::patterns::{
    BIC, CVE, DATA_URI, E164, EMAIL, HEX_COLOR, HSL, HSLA, ISSN, LATITUDE, LONGITUDE, MD4, MD5,
    RGB, RGBA, SEMVER, SHA, SHA3, SHA160, SHA224, SHA256, SHA384, SHA512, SSN, ULID, UUID, UUID3,
    UUID4, UUID5,
};

// ============================================================================
// COLORS
// ============================================================================

regex_rules! {
    /// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    hex_color => HEX_COLOR, "hex color";
    /// `rgb(r, g, b)` with components in `0..=255`.
    rgb => RGB, "rgb value";
    /// `rgba(r, g, b, a)` with alpha in `0..=1`.
    rgba => RGBA, "rgba value";
    /// `hsl(h, s%, l%)`.
    hsl => HSL, "hsl value";
    /// `hsla(h, s%, l%, a)`.
    hsla => HSLA, "hsla value";
}

// ============================================================================
// CONTACT AND REGISTRY IDENTIFIERS
// ============================================================================

regex_rules! {
    /// RFC 5322 address including quoted local parts and internationalized domains.
    email => EMAIL, "email";
    /// `+` followed by up to 15 digits.
    e164 => E164, "E.164 phone number";
    issn => ISSN, "issn value";
    /// US social security number, with or without separators.
    ssn => SSN, "SSN value";
    /// Any RFC 4122 layout.
    uuid => UUID, "UUID value";
    uuid3 => UUID3, "UUID3 value";
    uuid4 => UUID4, "UUID4 value";
    uuid5 => UUID5, "UUID5 value";
    /// Crockford base32, case-insensitive.
    ulid => ULID, "ULID value";
    cve => CVE, "cve";
}

regex_rules! {
    md4 => MD4, "MD4 value";
    md5 => MD5, "MD5 value";
    /// Any hex digest from 160 to 512 bits.
    sha => SHA, "SHA value";
    sha160 => SHA160, "SHA160 value";
    /// Any hex digest from 224 to 512 bits.
    sha3 => SHA3, "SHA3 value";
    sha224 => SHA224, "SHA224 value";
    sha256 => SHA256, "SHA256 value";
    sha384 => SHA384, "SHA384 value";
    sha512 => SHA512, "SHA512 value";
}

regex_rules! {
    /// `data:` URI with an optional media type.
    data_uri => DATA_URI, "data uri";
    /// Decimal degrees in `-90..=90`.
    latitude => LATITUDE, "latitude value";
    /// Decimal degrees in `-180..=180`.
    longitude => LONGITUDE, "longitude value";
}

/// Business identifier code (SWIFT).
///
/// Scalars are rendered to text first.
pub fn bic(value: &Value) -> RuleResult {
    let input = coerced_string(value)?;
    if BIC.is_match(&input) {
        Ok(())
    } else {
        Err(RuleError::invalid("bic", input))
    }
}

/// Semantic version 2.0.0, with optional pre-release and build metadata.
///
/// Scalars are rendered to text first.
pub fn semver(value: &Value) -> RuleResult {
    let input = coerced_string(value)?;
    if SEMVER.is_match(&input) {
        Ok(())
    } else {
        Err(RuleError::invalid("semver", input))
    }
}

fn coerced_string(value: &Value) -> RuleResult<String> {
    runval_expression::as_string(value).map_err(|_| RuleError::ExpectedString(value.type_name()))
}

// ============================================================================
// ISBN
// ============================================================================

/// ISBN-10: ten digits, separators ignored, weighted sum divisible by 11.
pub fn isbn10(value: &Value) -> RuleResult {
    let digits = isbn_digits(value, 10)?;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (10 - i as u32))
        .sum();
    if sum % 11 == 0 {
        Ok(())
    } else {
        Err(RuleError::failed("invalid ISBN10: checksum failed"))
    }
}

/// ISBN-13: thirteen digits, separators ignored, alternating 1/3 weights.
pub fn isbn13(value: &Value) -> RuleResult {
    let digits = isbn_digits(value, 13)?;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    if sum % 10 == 0 {
        Ok(())
    } else {
        Err(RuleError::failed("invalid ISBN13: checksum failed"))
    }
}

fn isbn_digits(value: &Value, count: usize) -> RuleResult<Vec<u32>> {
    let input = expect_string(value)?;
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() == count {
        Ok(digits)
    } else {
        Err(RuleError::failed(format!(
            "invalid ISBN{count}: must contain exactly {count} digits"
        )))
    }
}
