//! Field validator predicates for the job posting form.
//!
//! Every validator takes the raw field value and answers `true` when the value
//! is acceptable. Validators never see trimmed input; the form stores exactly
//! what the user typed.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;
use url::{Host, Url};
use validator::ValidateEmail;

/// URL schemes accepted by [`is_valid_url`].
const URL_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Browsers refuse URLs at or beyond this length.
const MAX_URL_LEN: usize = 2083;

/// Optional `+1`/`1` country code, then area code, exchange, and line number.
/// A single space or dash may separate the groups; the area code may be
/// parenthesized.
static US_MOBILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((\+1|1)?( |-)?)?(\([2-9][0-9]{2}\)|[2-9][0-9]{2})( |-)?[2-9][0-9]{2}( |-)?[0-9]{4}$")
        .expect("valid phone regex")
});

static TLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\p{Alphabetic}{2,}|xn--[a-z0-9-]{2,})$").expect("valid tld regex"));

/// Wrap `validator` so that an empty value is always rejected.
pub fn make_required<F>(validator: F) -> impl Fn(&str) -> bool
where
    F: Fn(&str) -> bool,
{
    move |value: &str| !value.is_empty() && validator(value)
}

/// Non-empty and ASCII-only.
pub fn is_ascii(value: &str) -> bool {
    !value.is_empty() && value.is_ascii()
}

/// RFC 5322-ish address whose domain has a TLD and whose local part is a
/// dot-atom.
pub fn is_email(value: &str) -> bool {
    if !value.validate_email() {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    let dot_atom = !local.starts_with('.') && !local.ends_with('.') && !local.contains("..");
    dot_atom && has_tld(domain)
}

/// US mobile number, e.g. `555-867-5309`, `(555) 867-5309` or
/// `+15558675309`. The exchange must not be an `N11` service code.
pub fn is_valid_phone(value: &str) -> bool {
    if !US_MOBILE.is_match(value) {
        return false;
    }
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    let national = &digits[digits.len() - 10..];
    &national[4..6] != "11"
}

/// Well-formed URL with an explicit `http`, `https` or `ftp` scheme and a
/// host that is a domain with a TLD or an IP address.
pub fn is_valid_url(value: &str) -> bool {
    if value.len() >= MAX_URL_LEN || value.chars().any(|c| c.is_whitespace() || c == '<' || c == '>') {
        return false;
    }
    let Ok(url) = Url::parse(value) else {
        return false;
    };
    if !URL_SCHEMES.contains(&url.scheme()) || url.port() == Some(0) {
        return false;
    }
    match url.host() {
        Some(Host::Domain(domain)) => has_tld(domain),
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Dotted domain whose labels do not start or end with `-` and whose last
/// label is a TLD.
fn has_tld(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.last().is_some_and(|tld| TLD.is_match(tld))
        && labels
            .iter()
            .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
}
