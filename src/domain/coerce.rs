// src/domain/coerce.rs

use serde_json::Value;

/// Safe numeric conversion for values like `3200`, `"3,200"` or `"$2,850,000"`.
///
/// Strings keep only digits and `.` before parsing, so minus signs and
/// exponents are dropped (`"-80.1"` reads as `80.1`). Non-finite numbers,
/// empty strings and every other JSON type give `None`.
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => parse_numeric_text(s),
        _ => None,
    }
}

/// The string half of [`to_number`].
pub fn parse_numeric_text(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Bathrooms sometimes arrive as an object such as
/// `{ "total": 3.5, "full": 3, "half": 1 }`. This collapses any of the
/// known shapes into a single count.
pub fn normalize_baths(value: &Value) -> Option<f64> {
    let Some(parts) = value.as_object() else {
        return to_number(value);
    };

    // A numeric total wins outright.
    if let Some(total) = parts
        .get("total")
        .and_then(Value::as_f64)
        .filter(|f| f.is_finite())
    {
        return Some(total);
    }

    let part = |keys: &[&str]| -> f64 {
        keys.iter()
            .find_map(|k| parts.get(*k).filter(|v| !v.is_null()))
            .and_then(to_number)
            .unwrap_or(0.0)
    };

    let full = part(&["full"]);
    let half = part(&["half"]);
    let quarter = part(&["quarter", "qtr"]);
    let three_quarter = part(&["threeQuarter", "three_quarter"]);

    let total = full + half * 0.5 + quarter * 0.25 + three_quarter * 0.75;
    (total > 0.0).then_some(total)
}
