//! Host name rules

use crate::macros::regex_rules;
use crate::patterns::{DNS, FQDN, HOSTNAME};

regex_rules! {
    /// Dot-separated labels of letters, digits and inner hyphens.
    hostname => HOSTNAME, "hostname";
    /// Host name whose last label starts with a letter, optionally dot-terminated.
    fqdn => FQDN, "fqdn";
    /// A single DNS label of at most 63 characters.
    dns => DNS, "dns";
}
