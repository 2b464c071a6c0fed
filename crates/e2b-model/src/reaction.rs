//! Reaction and event entries (ICH E2B section E).

use serde::{Deserialize, Serialize};

/// One adverse reaction or event, in the order the case lists them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReactionEntry {
    /// Verbatim term as reported.
    pub term: Option<String>,
    /// MedDRA preferred-term code, once the term has been coded.
    pub meddra_code: Option<String>,
    pub meddra_version: Option<String>,
    pub onset_date: Option<String>,
    pub stop_date: Option<String>,
    pub seriousness_criteria: Vec<String>,
    pub outcome: Option<String>,
    pub death_date: Option<String>,
    pub country: Option<String>,
}

impl ReactionEntry {
    /// An uncoded reaction known only by its verbatim description.
    pub fn verbatim(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            ..Self::default()
        }
    }
}
