//! Forgiving deserializers for records fetched from the statistics API.
//!
//! Upstream rows are loosely typed: counters arrive as numbers, numeric strings, `null`,
//! or not at all. Everything here degrades to zero/absent instead of failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a JSON value to a finite number. Numeric strings are parsed; anything else is `None`.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }?;
    n.is_finite().then_some(n)
}

/// Canonical form for comparing names and labels: trimmed and lowercased.
pub fn normalize_label(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Parse a percentage such as `"66.7%"`, `"66.7"` or `" 50 % "`. Unparsable text is 0.
pub fn parse_percentage(text: &str) -> f64 {
    let trimmed = text.trim();
    let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    digits
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Counter field: missing, `null` or malformed values become 0.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value).unwrap_or(0.0))
}

/// Precomputed rate field: `null` or malformed values are treated as absent.
pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value))
}

/// Score or tally: rounded to the nearest whole number, negatives and garbage become 0.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value)
        .map(|n| n.round().clamp(0.0, f64::from(u32::MAX)) as u32)
        .unwrap_or(0))
}

/// Signed difference such as point or goal difference; garbage becomes 0.
pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value)
        .map(|n| n.round().clamp(i64::MIN as f64, i64::MAX as f64) as i64)
        .unwrap_or(0))
}

/// Ranking position: only non-negative whole numbers are kept.
pub fn position<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_number(&value)
        .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32))
}

/// Win percentage as display text; bare numbers are kept as their decimal form.
pub fn percentage_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}
