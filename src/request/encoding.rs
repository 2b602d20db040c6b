/// Text/number encoding helpers for the submission request
///
/// The issue body is read by people and by tooling that expects the exact
/// shape a browser would produce, so these helpers follow browser rules:
/// - `parse_float` behaves like JavaScript `parseFloat`
/// - `serialize_js_number` writes numbers the way `JSON.stringify` does
/// - `encode_uri_component` escapes like `encodeURIComponent`

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serializer;

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Largest integer an f64 represents exactly (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Percent-encode a query parameter value
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Parse the longest numeric prefix of `text`
///
/// Leading whitespace is skipped and trailing garbage ignored
/// (`"37.23abc"` → 37.23). Text with no numeric prefix yields NaN.
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if trimmed[end..].starts_with("Infinity") {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        // "5." is a valid prefix, a lone "." is not
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// serde `serialize_with` hook writing an f64 like `JSON.stringify`
///
/// NaN and infinities become `null`, integral values drop the fraction.
pub fn serialize_js_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = *value;
    if !value.is_finite() {
        serializer.serialize_none()
    } else if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}
