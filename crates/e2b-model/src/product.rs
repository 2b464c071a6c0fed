//! Drug and product entries (ICH E2B section G).

use serde::{Deserialize, Serialize};

use crate::numeric::Numeric;

/// One drug involved in the case, in the order the case lists them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrugEntry {
    pub name: Option<String>,
    pub generic_name: Option<String>,
    pub authorization_number: Option<String>,
    pub authorization_country: Option<String>,
    pub dosage: Dosage,
    pub formulation: Option<String>,
    pub batch_number: Option<String>,
    pub indication: Option<String>,
    /// MedDRA code of the indication, when coded.
    pub indication_code: Option<String>,
    pub action_taken: Option<String>,
    pub dechallenge: Option<String>,
    pub rechallenge: Option<String>,
    /// Suspect, Concomitant or Interacting.
    pub role: Option<String>,
}

impl DrugEntry {
    /// A suspect drug known only by name, as captured at triage.
    pub fn suspect(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            role: Some("Suspect".to_string()),
            ..Self::default()
        }
    }
}

/// Dosage regimen of a single drug.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dosage {
    pub value: Option<Numeric>,
    pub unit: Option<String>,
    pub route: Option<String>,
    pub frequency: Option<String>,
    pub start_date: Option<String>,
    pub stop_date: Option<String>,
}
