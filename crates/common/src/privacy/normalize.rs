//! Canonical forms for free text, email addresses and phone numbers.
//!
//! Every normalizer is total: it accepts any input, never fails and maps the
//! empty string to the empty string. Re-normalizing a normalized value is a
//! no-op. No syntax validation happens here; a malformed email is lowercased
//! and stripped like any other.

/// Lowercases `value` one character at a time.
///
/// Each character maps to exactly one character: the context-sensitive
/// final-sigma rule does not apply, so `Σ` always becomes `σ`, and a
/// multi-character lowercase form keeps only its first character, so `İ`
/// becomes `i` rather than `i` followed by a combining dot.
fn lowercase(value: &str) -> String {
    value.chars().map(lowercase_char).collect()
}

fn lowercase_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Normalizes free text: lowercase, then trim leading and trailing whitespace.
///
/// Interior whitespace is preserved.
///
/// ```
/// use anonymize_common::privacy::normalize::normalize_string;
///
/// assert_eq!(normalize_string("  Foo BAR \t"), "foo bar");
/// ```
pub fn normalize_string(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let lowered = lowercase(value);
    lowered.trim().to_string()
}

/// Normalizes an email address: lowercase, then delete every whitespace
/// character wherever it appears.
///
/// ```
/// use anonymize_common::privacy::normalize::normalize_email;
///
/// assert_eq!(normalize_email(" Foo.BAR@Example.com "), "foo.bar@example.com");
/// assert_eq!(normalize_email("jane\t.doe @ mail.se"), "jane.doe@mail.se");
/// ```
pub fn normalize_email(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    value.chars().filter(|c| !c.is_whitespace()).map(lowercase_char).collect()
}

/// Normalizes a phone number to a bare digit string.
///
/// Two order-sensitive stages:
/// 1. The first character that is a digit or `+` decides the prefix. A `+`
///    is rewritten to `00` and everything before it is dropped. A digit means
///    no conversion, and any later `+` is treated as noise.
/// 2. Everything except ASCII `0`-`9` is removed.
///
/// ```
/// use anonymize_common::privacy::normalize::normalize_phone;
///
/// assert_eq!(normalize_phone("+46 70-123 45 67"), "0046701234567");
/// assert_eq!(normalize_phone("070-123 45+67"), "0701234567");
/// ```
pub fn normalize_phone(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let converted = leading_plus_to_zeros(value);
    digits_only(&converted)
}

/// Rewrites a `+` that precedes every digit into `00`.
///
/// Only the first qualifying `+` is converted. When a digit is seen first the
/// input is returned untouched; stage two strips whatever is not a digit.
fn leading_plus_to_zeros(value: &str) -> String {
    match value.char_indices().find(|(_, c)| c.is_ascii_digit() || *c == '+') {
        Some((idx, '+')) => {
            let rest = &value[idx + '+'.len_utf8()..];
            let mut out = String::with_capacity(rest.len() + 2);
            out.push_str("00");
            out.push_str(rest);
            out
        }
        _ => value.to_string(),
    }
}

fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}
