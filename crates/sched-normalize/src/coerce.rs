//! Scalar coercers for date-like and number-like raw values.
//!
//! Source systems encode dates and numbers inconsistently (ISO strings,
//! space-separated datetimes, epoch numbers). Coercers never fail: a value
//! that cannot be interpreted degrades to `None` so the normalizers can
//! substitute defaults instead of rejecting the whole record.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

/// Coerces a raw value into epoch milliseconds.
///
/// Numbers pass through unchanged (assumed already epoch milliseconds,
/// truncated to an integer). Strings tolerate both ISO 8601 and the
/// space-separated `YYYY-MM-DD HH:mm` form; naive values are read as UTC.
/// Anything unparseable yields `None`.
pub fn parse_date(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|millis| millis as i64)),
        Value::String(text) if !text.is_empty() => parse_date_text(text),
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<i64> {
    // Exports commonly separate date and time with a space instead of 'T'.
    let iso: Cow<'_, str> = if text.contains('T') {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.replacen(' ', "T", 1))
    };
    if let Ok(parsed) = DateTime::parse_from_rfc3339(&iso) {
        return Some(parsed.timestamp_millis());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&iso, format) {
            return Some(parsed.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(&iso, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
}

/// Coerces a raw value into a floating-point number, or `None` when the
/// value is absent, empty, or not numeric.
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) if !text.is_empty() => text.trim().parse().ok(),
        _ => None,
    }
}

/// Coerces a scalar raw value into text; arrays, objects, and null have no
/// textual form.
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Truthiness of a raw value: null, false, zero, and the empty string are
/// false; everything else is true.
pub fn to_flag(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Coerces a raw value into a list of id strings; anything but an array of
/// scalars yields an empty list.
pub fn to_id_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(to_text).collect(),
        _ => Vec::new(),
    }
}
