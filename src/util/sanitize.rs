//! Context-specific output filters for user-supplied job fields.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitted drafts are rendered by the preview page and by downstream job
//! listings, so values are filtered for the HTML context they end up in before
//! they leave the form. Text goes into element content; `url` and `logo` go
//! into single-quoted `href`/`src` attributes.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

/// Schemes that can execute or smuggle markup when followed from an attribute.
const BLOCKED_SCHEMES: [&str; 5] = ["javascript", "vbscript", "data", "mhtml", "x-schema"];

/// Filter `value` for insertion as HTML text content.
///
/// Only `<` can open markup inside element content, so it is the only
/// character rewritten.
pub fn in_html_data(value: &str) -> String {
    value.replace('<', "&lt;")
}

/// Filter `value` for insertion into a single-quoted URI attribute.
///
/// The value is URI-encoded, single quotes are entity-encoded, and any
/// blocked scheme is prefixed with `x-` so the browser treats it as an
/// unknown, inert scheme.
pub fn uri_in_single_quoted_attr(value: &str) -> String {
    let encoded = encode_uri(value).replace('\'', "&#39;");
    neutralize_scheme(encoded)
}

/// Percent-encode everything outside the `encodeURI` safe set.
fn encode_uri(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if is_uri_safe(ch) {
            out.push(ch);
            continue;
        }
        let mut buf = [0_u8; 4];
        for byte in ch.encode_utf8(&mut buf).bytes() {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn is_uri_safe(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || matches!(
            ch,
            ';' | ',' | '/' | '?' | ':' | '@' | '&' | '=' | '+' | '$' | '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')' | '#'
        )
}

fn neutralize_scheme(value: String) -> String {
    let blocked = scheme_of(&decode_char_refs(&value))
        .is_some_and(|scheme| BLOCKED_SCHEMES.contains(&scheme.as_str()));
    if blocked { format!("x-{value}") } else { value }
}

/// Lowercased scheme as a browser would read it: whitespace and control
/// characters anywhere before the colon are skipped.
fn scheme_of(value: &str) -> Option<String> {
    let mut scheme = String::new();
    for ch in value.chars() {
        match ch {
            ':' => return (!scheme.is_empty()).then_some(scheme),
            c if c.is_whitespace() || c.is_control() => {}
            c if c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.') => {
                scheme.push(c.to_ascii_lowercase());
            }
            _ => return None,
        }
    }
    None
}

/// Decode the character references a browser resolves inside attribute
/// values. Unknown references are left as-is.
fn decode_char_refs(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match parse_char_ref(rest) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parse a reference at the start of `input` (which begins with `&`).
/// Returns the decoded char and the number of bytes consumed.
fn parse_char_ref(input: &str) -> Option<(char, usize)> {
    let body = &input[1..];
    if let Some(numeric) = body.strip_prefix('#') {
        let (radix, digits_start) = match numeric.strip_prefix(['x', 'X']) {
            Some(_) => (16, 1),
            None => (10, 0),
        };
        let digits: String = numeric[digits_start..]
            .chars()
            .take_while(|c| c.is_digit(radix))
            .collect();
        if digits.is_empty() {
            return None;
        }
        let code = u32::from_str_radix(&digits, radix).ok()?;
        let ch = char::from_u32(code)?;
        let mut consumed = 2 + digits_start + digits.len();
        if input[consumed..].starts_with(';') {
            consumed += 1;
        }
        return Some((ch, consumed));
    }

    const NAMED: [(&str, char); 3] = [("colon;", ':'), ("tab;", '\t'), ("newline;", '\n')];
    let lowered = body.get(..8).unwrap_or(body).to_ascii_lowercase();
    NAMED
        .iter()
        .find(|(name, _)| lowered.starts_with(name))
        .map(|(name, ch)| (*ch, 1 + name.len()))
}
