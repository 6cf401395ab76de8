//! Rule names
//!
//! Every rule a rule string may name is a [`Tag`]. The tag decides which
//! registry a rule is looked up in: argument-taking tags live in the argument
//! registry, everything else in the simple registry.

use std::fmt;
use std::str::FromStr;

macro_rules! tags {
    ($($(#[$meta:meta])* $variant:ident => $name:literal,)+) => {
        /// A known rule name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum Tag {
            $($(#[$meta])* $variant,)+
        }

        impl Tag {
            /// Every tag, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// The name used in rule strings.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl FromStr for Tag {
            type Err = UnknownTag;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(UnknownTag(s.to_owned())),
                }
            }
        }
    };
}

tags! {
    /// Placeholder carried by rules whose name could not be resolved.
    Unknown => "unknown",
    Required => "required",
    Alpha => "alpha",
    AlphaNumeric => "alphanum",
    AlphaUnicode => "alphaunicode",
    AlphaNumericUnicode => "alphanumunicode",
    Numeric => "num",
    NumericUnsigned => "unum",
    Hexadecimal => "hex",
    HexColor => "hexcolor",
    Rgb => "rgb",
    Rgba => "rgba",
    Hsl => "hsl",
    Hsla => "hsla",
    Email => "email",
    Issn => "issn",
    E164 => "e164",
    Base32 => "base32",
    Base32Hex => "base32hex",
    Base64 => "base64",
    Base64Raw => "base64raw",
    Base64Url => "base64url",
    Base64RawUrl => "base64rawurl",
    Isbn10 => "isbn10",
    Isbn13 => "isbn13",
    Ssn => "ssn",
    Uuid => "uuid",
    Uuid3 => "uuid3",
    Uuid4 => "uuid4",
    Uuid5 => "uuid5",
    Ulid => "ulid",
    Md4 => "md4",
    Md5 => "md5",
    Sha => "sha",
    Sha0 => "sha0",
    Sha1 => "sha1",
    Sha2 => "sha2",
    Sha3 => "sha3",
    Sha224 => "sha224",
    Sha256 => "sha256",
    Sha384 => "sha384",
    Sha512 => "sha512",
    Ascii => "ascii",
    PrintableAscii => "asciiprint",
    MultiByte => "multibyte",
    Uppercase => "upper",
    Lowercase => "lower",
    DataUri => "datauri",
    Latitude => "lat",
    Longitude => "long",
    Hostname => "hostname",
    Fqdn => "fqdn",
    UrlEncoded => "urlencoded",
    Html => "html",
    HtmlEncoded => "htmlencoded",
    Jwt => "jwt",
    Bic => "bic",
    SemVer => "semver",
    Dns => "dns",
    Cve => "cve",
    Cron => "cron",
    Regex => "regex",
    RequiredIf => "requiredif",
    Between => "between",
    XBetween => "xbetween",
    BetweenF => "betweenf",
    XBetweenF => "xbetweenf",
    Min => "min",
    Max => "max",
    Length => "length",
    OneOf => "oneof",
    StartsWith => "startswith",
    StartsNotWith => "startsnotwith",
    EndsWith => "endswith",
    EndsNotWith => "endsnotwith",
    Contains => "contains",
    ContainsNot => "containsnot",
}

impl Tag {
    /// Returns true for rules written as `name:args`.
    pub const fn takes_arguments(self) -> bool {
        matches!(
            self,
            Self::Regex
                | Self::RequiredIf
                | Self::Between
                | Self::XBetween
                | Self::BetweenF
                | Self::XBetweenF
                | Self::Min
                | Self::Max
                | Self::Length
                | Self::OneOf
                | Self::StartsWith
                | Self::StartsNotWith
                | Self::EndsWith
                | Self::EndsNotWith
                | Self::Contains
                | Self::ContainsNot
        )
    }

    /// Every tag except [`Tag::Unknown`].
    pub fn known() -> impl Iterator<Item = Self> {
        Self::ALL.iter().copied().filter(|tag| *tag != Self::Unknown)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`Tag::from_str`] for names that are not rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule name: {0}")]
pub struct UnknownTag(pub String);
