//! Lenient field deserializers for the member and house models
//!
//! Records arrive from a JavaScript-facing API where fields may be missing,
//! `null`, numbers sent as strings, or strings sent as numbers. None of these
//! are errors: every helper here maps the raw value onto the documented
//! default instead of failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::member::Member;
use crate::models::types::{DawatCounts, DawatDuration, DawatStatus, EducationLevel, Gender, YesNo};

/// Render a scalar JSON value as text; `null`, arrays and objects become empty
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Interpret a JSON value as a non-negative whole number
///
/// Fractional numbers are truncated. Negative, non-finite and non-numeric
/// values yield `None`.
pub(crate) fn value_to_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v).ok()
            } else {
                n.as_f64()
                    .filter(|v| v.is_finite() && *v >= 0.0 && *v <= f64::from(u32::MAX))
                    .map(|v| v.trunc() as u32)
            }
        }
        Value::String(s) => parse_u32(s),
        _ => None,
    }
}

/// Parse text as a non-negative whole number, tolerating surrounding whitespace
pub(crate) fn parse_u32(s: &str) -> Option<u32> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(v) = trimmed.parse::<u32>() {
        return Some(v);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0 && *v <= f64::from(u32::MAX))
        .map(|v| v.trunc() as u32)
}

fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text) }
}

/// Any scalar as a string, `null` as empty
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value))
}

/// Age as a whole number; anything that is not one becomes `None`
pub fn deserialize_age<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_u32(&value))
}

/// Gender with synonym handling; blank becomes `None`
pub fn deserialize_gender<'de, D>(deserializer: D) -> Result<Option<Gender>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(non_blank(value_to_text(&value)).map(Gender::from))
}

/// Education level; blank becomes `None`
pub fn deserialize_education<'de, D>(deserializer: D) -> Result<Option<EducationLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(non_blank(value_to_text(&value)).map(EducationLevel::from))
}

fn value_to_yes_no(value: &Value) -> Option<YesNo> {
    match value {
        Value::Bool(b) => Some(YesNo::from(*b)),
        other => YesNo::parse(&value_to_text(other)),
    }
}

/// Optional yes/no flag; unrecognized text becomes `None`
pub fn deserialize_yes_no<'de, D>(deserializer: D) -> Result<Option<YesNo>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_yes_no(&value))
}

/// Yes/no flag that falls back to `No`
pub fn deserialize_yes_no_or_no<'de, D>(deserializer: D) -> Result<YesNo, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_yes_no(&value).unwrap_or_default())
}

/// Dawat status label; unknown labels fall back to `Nil`
pub fn deserialize_dawat_status<'de, D>(deserializer: D) -> Result<DawatStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(DawatStatus::parse(&value_to_text(&value)).unwrap_or_default())
}

/// Per-duration Dawat counts from a JSON object
///
/// Unknown keys are ignored and unparsable counts are treated as zero.
pub fn deserialize_dawat_counts<'de, D>(deserializer: D) -> Result<DawatCounts, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let mut counts = DawatCounts::default();
    if let Value::Object(map) = value {
        for (key, raw) in &map {
            match DawatDuration::parse(key) {
                Some(duration) => counts.set(duration, value_to_u32(raw).unwrap_or(0)),
                None => log::debug!("Ignoring unknown dawat count key '{key}'"),
            }
        }
    }
    Ok(counts)
}

/// Member list; a non-array becomes empty and non-object entries are skipped
pub fn deserialize_members<'de, D>(deserializer: D) -> Result<Vec<Member>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(entries) = value else {
        return Ok(Vec::new());
    };
    let mut members = Vec::with_capacity(entries.len());
    for entry in entries {
        if !entry.is_object() {
            log::warn!("Skipping member entry that is not an object");
            continue;
        }
        match serde_json::from_value::<Member>(entry) {
            Ok(member) => members.push(member),
            Err(e) => log::warn!("Skipping unreadable member entry: {e}"),
        }
    }
    Ok(members)
}
