//! Per-call encoder settings.

use chrono::{DateTime, Utc};
use e2b_vocab::oids::DEFAULT_SENDER_ORGANIZATION;
use e2b_xml::SerializeOptions;

/// Options for ICSR encoding.
///
/// Interoperability identifiers are constants and cannot be set here.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Creation timestamp stamped into the batch and message headers.
    /// The current time when `None`.
    pub creation_time: Option<DateTime<Utc>>,
    /// Pretty-print indentation width; `None` writes a single line.
    pub indent: Option<usize>,
    /// Organization named as the sender (C.3.2).
    pub sender_organization: String,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            creation_time: None,
            indent: Some(2),
            sender_organization: DEFAULT_SENDER_ORGANIZATION.to_string(),
        }
    }
}

impl EncodeOptions {
    /// Fix the creation timestamp, e.g. for reproducible output.
    #[must_use]
    pub fn with_creation_time(mut self, instant: DateTime<Utc>) -> Self {
        self.creation_time = Some(instant);
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_sender_organization(mut self, name: impl Into<String>) -> Self {
        self.sender_organization = name.into();
        self
    }

    pub(crate) fn serialize_options(&self) -> SerializeOptions {
        SerializeOptions {
            indent: self.indent,
        }
    }
}
