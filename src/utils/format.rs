//! Presentation-layer formatting. The core emits raw `f64`s (including the
//! infinity convention); everything locale-specific lives here.

use serde_json::Value;

pub const INFINITY_GLYPH: &str = "∞";

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    out
}

/// EUR amount in the `1.234,56 €` style.
pub fn format_eur(value: f64) -> String {
    if !value.is_finite() {
        return format!("{} €", INFINITY_GLYPH);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = group_thousands(&(cents / 100).to_string());
    format!("{}{},{:02} €", sign, whole, cents % 100)
}

/// A decimal fraction rendered as a percentage with one decimal place.
pub fn format_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return INFINITY_GLYPH.to_string();
    }
    format!("{:.1}", fraction * 100.0).replace('.', ",") + " %"
}

/// Payback duration; infinity means the investment never pays back.
pub fn format_months(value: f64) -> String {
    if !value.is_finite() {
        return "no payback".to_string();
    }
    format!("{:.1}", value).replace('.', ",") + " months"
}

/// Cell value for CSV export. Finite values stay raw so the file remains
/// machine-readable.
pub fn csv_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        "Infinity".to_string()
    } else {
        value.to_string()
    }
}

/// JSON value with non-finite numbers spelled out instead of serde's null.
pub fn json_value(value: f64) -> Value {
    match serde_json::Number::from_f64(value) {
        Some(number) => Value::Number(number),
        None if value.is_nan() => Value::String("NaN".to_string()),
        None => Value::String("Infinity".to_string()),
    }
}
