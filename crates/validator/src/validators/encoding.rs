//! Encoded-content rules
//!
//! Base32 and Base64 rules check that the input actually decodes in the
//! named alphabet and padding mode. Line breaks are ignored, as MIME
//! wrapping inserts them. The web-encoding rules render scalars to text
//! first and reject empty input.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use regex::Regex;
use runval_expression::Value;

use super::{expect_string, input_string};
use crate::error::{RuleError, RuleResult};
use crate::patterns::{HTML, HTML_ENCODED, JWT, URL_ENCODED};

// ============================================================================
// BASE32
// ============================================================================

const BASE32_STD: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const BASE32_HEX: &[u8; 32] = b"0123456789ABCDEFGHIJKLMNOPQRSTUV";

/// RFC 4648 base32, padded.
pub fn base32(value: &Value) -> RuleResult {
    let input = expect_string(value)?;
    if decodes_base32(input, BASE32_STD) {
        Ok(())
    } else {
        Err(RuleError::invalid("Base32 string", input))
    }
}

/// RFC 4648 base32 with the extended hex alphabet, padded.
pub fn base32_hex(value: &Value) -> RuleResult {
    let input = expect_string(value)?;
    if decodes_base32(input, BASE32_HEX) {
        Ok(())
    } else {
        Err(RuleError::invalid("Base32Hex string", input))
    }
}

/// Input is decoded in 8-character blocks. Only the last block may carry
/// padding, and only after 2, 4, 5 or 7 data characters.
fn decodes_base32(input: &str, alphabet: &[u8; 32]) -> bool {
    let bytes: Vec<u8> = input
        .bytes()
        .filter(|b| !matches!(b, b'\r' | b'\n'))
        .collect();
    if bytes.len() % 8 != 0 {
        return false;
    }

    let blocks = bytes.len() / 8;
    bytes.chunks(8).enumerate().all(|(i, block)| {
        let data = block.iter().take_while(|b| **b != b'=').count();
        let padded_ok = data == 8 || (i + 1 == blocks && matches!(data, 2 | 4 | 5 | 7));
        padded_ok
            && block[data..].iter().all(|b| *b == b'=')
            && block[..data].iter().all(|b| alphabet.contains(b))
    })
}

// ============================================================================
// BASE64
// ============================================================================

const fn engine(symbols: &alphabet::Alphabet, padding: DecodePaddingMode) -> GeneralPurpose {
    GeneralPurpose::new(
        symbols,
        GeneralPurposeConfig::new()
            .with_decode_allow_trailing_bits(true)
            .with_decode_padding_mode(padding),
    )
}

const STANDARD: GeneralPurpose = engine(&alphabet::STANDARD, DecodePaddingMode::RequireCanonical);
const STANDARD_RAW: GeneralPurpose = engine(&alphabet::STANDARD, DecodePaddingMode::RequireNone);
const URL_SAFE: GeneralPurpose = engine(&alphabet::URL_SAFE, DecodePaddingMode::RequireCanonical);
const URL_SAFE_RAW: GeneralPurpose = engine(&alphabet::URL_SAFE, DecodePaddingMode::RequireNone);

fn check_base64(value: &Value, engine: &GeneralPurpose, label: &'static str) -> RuleResult {
    let input = expect_string(value)?;
    let stripped: String = input.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    engine
        .decode(stripped)
        .map(drop)
        .map_err(|_| RuleError::invalid(label, input))
}

/// Standard alphabet, padded.
pub fn base64(value: &Value) -> RuleResult {
    check_base64(value, &STANDARD, "Base64 string")
}

/// Standard alphabet, no padding.
pub fn base64_raw(value: &Value) -> RuleResult {
    check_base64(value, &STANDARD_RAW, "Base64Raw string")
}

/// URL-safe alphabet, padded.
pub fn base64_url(value: &Value) -> RuleResult {
    check_base64(value, &URL_SAFE, "Base64Url string")
}

/// URL-safe alphabet, no padding.
pub fn base64_raw_url(value: &Value) -> RuleResult {
    check_base64(value, &URL_SAFE_RAW, "Base64RawUrl string")
}

// ============================================================================
// WEB ENCODINGS
// ============================================================================

fn check_non_empty(value: &Value, pattern: &Regex, label: &'static str) -> RuleResult {
    let input = input_string(value)?;
    if !input.is_empty() && pattern.is_match(&input) {
        Ok(())
    } else {
        Err(RuleError::invalid(label, input))
    }
}

/// Unreserved characters and `%XX` escapes only.
pub fn url_encoded(value: &Value) -> RuleResult {
    check_non_empty(value, &URL_ENCODED, "url encoded value")
}

/// Contains at least one tag or named entity.
pub fn html(value: &Value) -> RuleResult {
    check_non_empty(value, &HTML, "html")
}

/// Contains at least one numeric or named character reference.
pub fn html_encoded(value: &Value) -> RuleResult {
    check_non_empty(value, &HTML_ENCODED, "html encoded")
}

/// Three dot-separated base64url segments; the signature may be empty.
pub fn jwt(value: &Value) -> RuleResult {
    check_non_empty(value, &JWT, "jwt")
}
