//! Compiled patterns for the format rules
//!
//! Patterns are anchored unless noted. `HTML` and `HTML_ENCODED` search
//! anywhere in the input.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! patterns {
    ($($name:ident = $pattern:literal;)+) => {
        $(pub(crate) static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($pattern).unwrap());)+
    };
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

patterns! {
    ALPHA = r"^[a-zA-Z]+$";
    ALPHA_NUMERIC = r"^[a-zA-Z0-9]+$";
    ALPHA_UNICODE = r"^[\p{L}]+$";
    ALPHA_NUMERIC_UNICODE = r"^[\p{L}\p{N}]+$";
    NUMERIC = r"^[-+]?[0-9]+(?:\.[0-9]+)?$";
    NUMERIC_UNSIGNED = r"^[0-9]+(?:\.[0-9]+)?$";
    HEXADECIMAL = r"^(0[xX])?[0-9a-fA-F]+$";
    ASCII = r"^[\x00-\x7F]*$";
    PRINTABLE_ASCII = r"^[\x20-\x7E]*$";
    MULTIBYTE = r"^[^\x00-\x1F\x21-\x7F]*$";
}

// ============================================================================
// COLORS
// ============================================================================

patterns! {
    HEX_COLOR = r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$";
    RGB = r"^rgb\(\s*(?:(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])\s*,\s*(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])\s*,\s*(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])\s*)\)$";
    RGBA = r"^rgba\(\s*(?:(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])\s*,\s*(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])\s*,\s*(?:0|[1-9][0-9]?|1[0-9][0-9]?|2[0-4][0-9]|25[0-5])\s*,\s*(?:0|1(?:\.0)?|0?\.[0-9]+)\s*)\)$";
    HSL = r"^hsl\(\s*(?:(360|[1-9]?[0-9]|1[0-9][0-9]|2[0-9][0-9])\s*,\s*(100|[1-9]?[0-9])%\s*,\s*(100|[1-9]?[0-9])%\s*)\)$";
    HSLA = r"^hsla\(\s*(?:(360|[1-9]?[0-9]|1[0-9][0-9]|2[0-9][0-9])\s*,\s*(100|[1-9]?[0-9])%\s*,\s*(100|[1-9]?[0-9])%\s*,\s*(?:0|1(?:\.0)?|0?\.[0-9]+)\s*)\)$";
}

// ============================================================================
// IDENTIFIERS
// ============================================================================

patterns! {
    EMAIL = r"^(?:(?:(?:(?:[a-zA-Z]|[0-9]|[!#\$%&'\*\+\-/=\?\^_`{\|}~]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])+(?:\.([a-zA-Z]|[0-9]|[!#\$%&'\*\+\-/=\?\^_`{\|}~]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])+)*)|(?:(?:\x22)(?:(?:(?:(?:\x20|\x09)*(?:\x0d\x0a))?(?:\x20|\x09)+)?(?:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x7f]|\x21|[\x23-\x5b]|[\x5d-\x7e]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])|(?:(?:[\x01-\x09\x0b\x0c\x0d-\x7f]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]))))*(?:(?:(?:\x20|\x09)*(?:\x0d\x0a))?(\x20|\x09)+)?(?:\x22))))@(?:(?:(?:[a-zA-Z]|[0-9]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])|(?:(?:[a-zA-Z]|[0-9]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])(?:[a-zA-Z]|[0-9]|-|\.|~|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])*(?:[a-zA-Z]|[0-9]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])))\.)+(?:(?:[a-zA-Z]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])|(?:(?:[a-zA-Z]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])(?:[a-zA-Z]|[0-9]|-|\.|~|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])*(?:[a-zA-Z]|[\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}])))\.?$";
    E164 = r"^\+[1-9][0-9]{6,14}$";
    ISSN = r"^(?:[0-9]{4}-[0-9]{3}[0-9X])$";
    SSN = r"^[0-9]{3}[ -]?(0[1-9]|[1-9][0-9])[ -]?([1-9][0-9]{3}|[0-9][1-9][0-9]{2}|[0-9]{2}[1-9][0-9]|[0-9]{3}[1-9])$";
    UUID = r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";
    UUID3 = r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-3[0-9a-fA-F]{3}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";
    UUID4 = r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$";
    UUID5 = r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-5[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$";
    ULID = r"^(?i)[A-HJKMNP-TV-Z0-9]{26}$";
    BIC = r"^[A-Z]{4}[A-Z]{2}[A-Z0-9]{2}([A-Z0-9]{3})?$";
    SEMVER = r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$";
    CVE = r"^CVE-(1999|2[0-9]{3})-(0[^0][0-9]{2}|0[0-9][^0][0-9]{1}|0[0-9]{2}[^0]|[1-9]{1}[0-9]{3,})$";
}

// ============================================================================
// DIGESTS
// ============================================================================

patterns! {
    MD4 = r"^[0-9a-fA-F]{32}$";
    MD5 = r"^[0-9a-fA-F]{32}$";
    SHA = r"^[0-9a-fA-F]{40,128}$";
    SHA160 = r"^[0-9a-fA-F]{40}$";
    SHA3 = r"^[0-9a-fA-F]{56,128}$";
    SHA224 = r"^[0-9a-fA-F]{56}$";
    SHA256 = r"^[0-9a-fA-F]{64}$";
    SHA384 = r"^[0-9a-fA-F]{96}$";
    SHA512 = r"^[0-9a-fA-F]{128}$";
}

// ============================================================================
// WEB
// ============================================================================

patterns! {
    DATA_URI = r"^data:((?:\w+/(?:([^;]|;[^;]).)+)?)";
    LATITUDE = r"^[-+]?([1-8]?[0-9](\.[0-9]+)?|90(\.0+)?)$";
    LONGITUDE = r"^[-+]?(180(\.0+)?|((1[0-7][0-9])|([1-9]?[0-9]))(\.[0-9]+)?)$";
    HOSTNAME = r"^([a-zA-Z0-9]{1}[a-zA-Z0-9-]{0,61}[a-zA-Z0-9]{1}){1}(\.[a-zA-Z0-9]{1}[a-zA-Z0-9-]{0,61}[a-zA-Z0-9]{1})*?$";
    FQDN = r"^([a-zA-Z0-9]{1}[a-zA-Z0-9-]{0,61}[a-zA-Z0-9]{1}){1}(\.[a-zA-Z0-9]{1}[a-zA-Z0-9-]{0,61}[a-zA-Z0-9]{1})*?(\.[a-zA-Z]{1}[a-zA-Z0-9]{0,61}[a-zA-Z0-9]{1})\.?$";
    DNS = r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?$";
    URL_ENCODED = r"^(?:[a-zA-Z0-9\-_.~]|%[0-9A-Fa-f]{2})*$";
    HTML_ENCODED = r"&#[xX]?[0-9a-fA-F]{1,5};|&[a-zA-Z0-9]+;";
    HTML = r"(<[/]?([a-zA-Z]+).*?>|&[a-zA-Z]+;)";
    JWT = r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]*$";
}
