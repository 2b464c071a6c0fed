//! Field deserializers for form values that arrive in loose shapes.
//!
//! Entry forms initialise unset fields to `""` and submit numbers and
//! yes/no answers as text. A value that cannot be read becomes `None`
//! instead of failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// An integer given as a number or numeric text, rounded to the nearest
/// whole value.
pub fn optional_int<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number
        .filter(|value| value.is_finite())
        .map(f64::round)
        .filter(|value| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(value))
        .map(|value| value as i32))
}

/// A yes/no answer given as a boolean, `0`/`1`, or text.
pub fn optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(flag)) => Some(flag),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(1) => Some(true),
            Some(0) => Some(false),
            _ => None,
        },
        Some(Value::String(text)) => parse_answer(&text),
        _ => None,
    })
}

fn parse_answer(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}
