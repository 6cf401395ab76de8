//! Rule registries
//!
//! Two fixed tables map a [`Tag`] to its predicate. The rule parser consults
//! the simple table for rules written without arguments and the argument
//! table for rules written as `name:args`.

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::tags::Tag;
use crate::validators::{
    ArgumentRule, SimpleRule, affix, choice, cron, encoding, format, network, presence, range, text,
};

/// Predicates for rules written without arguments.
pub static SIMPLE_RULES: LazyLock<IndexMap<Tag, SimpleRule>> = LazyLock::new(|| {
    let entries: [(Tag, SimpleRule); 60] = [
        (Tag::Required, presence::required),
        (Tag::Alpha, text::alpha),
        (Tag::AlphaNumeric, text::alpha_numeric),
        (Tag::AlphaUnicode, text::alpha_unicode),
        (Tag::AlphaNumericUnicode, text::alpha_numeric_unicode),
        (Tag::Numeric, text::numeric),
        (Tag::NumericUnsigned, text::numeric_unsigned),
        (Tag::Hexadecimal, text::hexadecimal),
        (Tag::HexColor, format::hex_color),
        (Tag::Rgb, format::rgb),
        (Tag::Rgba, format::rgba),
        (Tag::Hsl, format::hsl),
        (Tag::Hsla, format::hsla),
        (Tag::Email, format::email),
        (Tag::Issn, format::issn),
        (Tag::E164, format::e164),
        (Tag::Base32, encoding::base32),
        (Tag::Base32Hex, encoding::base32_hex),
        (Tag::Base64, encoding::base64),
        (Tag::Base64Raw, encoding::base64_raw),
        (Tag::Base64Url, encoding::base64_url),
        (Tag::Base64RawUrl, encoding::base64_raw_url),
        (Tag::Isbn10, format::isbn10),
        (Tag::Isbn13, format::isbn13),
        (Tag::Ssn, format::ssn),
        (Tag::Uuid, format::uuid),
        (Tag::Uuid3, format::uuid3),
        (Tag::Uuid4, format::uuid4),
        (Tag::Uuid5, format::uuid5),
        (Tag::Ulid, format::ulid),
        (Tag::Md4, format::md4),
        (Tag::Md5, format::md5),
        (Tag::Sha, format::sha),
        (Tag::Sha0, format::sha160),
        (Tag::Sha1, format::sha160),
        (Tag::Sha2, format::sha3),
        (Tag::Sha3, format::sha3),
        (Tag::Sha224, format::sha224),
        (Tag::Sha256, format::sha256),
        (Tag::Sha384, format::sha384),
        (Tag::Sha512, format::sha512),
        (Tag::Ascii, text::ascii),
        (Tag::PrintableAscii, text::printable_ascii),
        (Tag::MultiByte, text::multi_byte),
        (Tag::Uppercase, text::uppercase),
        (Tag::Lowercase, text::lowercase),
        (Tag::DataUri, format::data_uri),
        (Tag::Latitude, format::latitude),
        (Tag::Longitude, format::longitude),
        (Tag::Hostname, network::hostname),
        (Tag::Fqdn, network::fqdn),
        (Tag::UrlEncoded, encoding::url_encoded),
        (Tag::Html, encoding::html),
        (Tag::HtmlEncoded, encoding::html_encoded),
        (Tag::Jwt, encoding::jwt),
        (Tag::Bic, format::bic),
        (Tag::SemVer, format::semver),
        (Tag::Dns, network::dns),
        (Tag::Cve, format::cve),
        (Tag::Cron, cron::cron),
    ];
    IndexMap::from(entries)
});

/// Predicates for rules written as `name:args`.
pub static ARGUMENT_RULES: LazyLock<IndexMap<Tag, ArgumentRule>> = LazyLock::new(|| {
    let entries: [(Tag, ArgumentRule); 16] = [
        (Tag::Regex, choice::regex),
        (Tag::RequiredIf, presence::required_if),
        (Tag::Between, range::between),
        (Tag::XBetween, range::xbetween),
        (Tag::BetweenF, range::betweenf),
        (Tag::XBetweenF, range::xbetweenf),
        (Tag::Min, range::min),
        (Tag::Max, range::max),
        (Tag::Length, range::length),
        (Tag::OneOf, choice::one_of),
        (Tag::StartsWith, affix::starts_with),
        (Tag::StartsNotWith, affix::starts_not_with),
        (Tag::EndsWith, affix::ends_with),
        (Tag::EndsNotWith, affix::ends_not_with),
        (Tag::Contains, affix::contains),
        (Tag::ContainsNot, affix::contains_not),
    ];
    IndexMap::from(entries)
});

/// Looks up a rule written without arguments.
pub fn simple_rule(tag: Tag) -> Option<SimpleRule> {
    SIMPLE_RULES.get(&tag).copied()
}

/// Looks up a rule written with arguments.
pub fn argument_rule(tag: Tag) -> Option<ArgumentRule> {
    ARGUMENT_RULES.get(&tag).copied()
}
