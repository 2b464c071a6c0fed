//! Patient demographics, medical history and laboratory data.

use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::numeric::Numeric;

/// Patient section of a case record (ICH E2B section D).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Patient {
    pub initials: Option<String>,
    pub sex: Option<String>,
    /// ISO `YYYY-MM-DD`.
    pub birth_date: Option<String>,
    pub age: Option<Numeric>,
    /// Free-text unit label ("Years", "Months", ...). Years when absent.
    pub age_unit: Option<String>,
    pub weight_kg: Option<Numeric>,
    pub height_cm: Option<Numeric>,
    pub medical_history: Vec<MedicalHistoryEntry>,
    pub lab_results: Vec<LabResult>,
}

/// One relevant medical history episode or concurrent condition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MedicalHistoryEntry {
    pub term: Option<String>,
    /// MedDRA LLT code, when the term has been coded.
    pub meddra_code: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(deserialize_with = "lenient::optional_bool")]
    pub continuing: Option<bool>,
    pub comments: Option<String>,
}

/// One laboratory test result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabResult {
    pub test_name: Option<String>,
    pub meddra_code: Option<String>,
    pub date: Option<String>,
    pub value: Option<Numeric>,
    pub unit: Option<String>,
    pub normal_low: Option<Numeric>,
    pub normal_high: Option<Numeric>,
    pub comments: Option<String>,
}
