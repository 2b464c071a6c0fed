//! Numbers that case forms submit either as JSON numbers or as strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric field as captured by the case-entry forms.
///
/// Data entry sends `"45"` as often as `45`, so both shapes deserialize.
/// Text that does not parse as a number is kept verbatim; the encoder
/// decides whether it can still use it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    Number(f64),
    Text(String),
}

impl Numeric {
    /// Returns the numeric value, parsing text input when needed.
    ///
    /// Blank text, non-numeric text and non-finite numbers yield `None`.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Numeric::Number(value) => *value,
            Numeric::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Returns the trimmed raw text, or `None` when blank.
    pub fn raw_text(&self) -> Option<String> {
        match self {
            Numeric::Number(value) => Some(value.to_string()),
            Numeric::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
        }
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Number(value)
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Numeric::Text(value.to_string())
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Number(value) => write!(f, "{value}"),
            Numeric::Text(text) => write!(f, "{text}"),
        }
    }
}
