//! The case record snapshot handed to the encoder.
//!
//! A case is assembled by the workflow in steps (triage, data entry,
//! medical review), so any section may be missing or half-filled when an
//! export is requested. Every section therefore defaults to empty and every
//! field is optional; the encoder decides what to omit.

use std::borrow::Cow;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lenient;
use crate::patient::Patient;
use crate::product::DrugEntry;
use crate::reaction::ReactionEntry;

/// One pharmacovigilance case as stored by the case-management workflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseRecord {
    /// Sender's case number. Mandatory for encoding.
    pub case_id: Option<String>,
    /// Worldwide unique case identifier, when one has been assigned.
    pub worldwide_id: Option<String>,
    pub triage: Triage,
    pub general: General,
    pub patient: Patient,
    pub products: Vec<DrugEntry>,
    pub events: Vec<ReactionEntry>,
    pub medical: MedicalReview,
    pub narrative: Option<String>,
}

/// Minimum criteria captured when the case is first received.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Triage {
    pub received_date: Option<String>,
    pub reporter_name: Option<String>,
    pub patient_initials: Option<String>,
    pub product_name: Option<String>,
    pub event_description: Option<String>,
    pub country: Option<String>,
    pub seriousness_criteria: Vec<String>,
}

/// Report classification and primary source details from data entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct General {
    /// Spontaneous, Study, Other, Not available.
    pub report_type: Option<String>,
    pub most_recent_info_date: Option<String>,
    pub seriousness_criteria: Vec<String>,
    pub sender_type: Option<String>,
    pub reporter: Reporter,
}

/// Primary source of the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reporter {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub organization: Option<String>,
    pub department: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub qualification: Option<String>,
}

/// Conclusions of the medical review step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MedicalReview {
    /// Causality conclusion, e.g. a WHO-UMC category.
    pub causality: Option<String>,
    /// Assessment method; WHO-UMC when absent.
    pub causality_method: Option<String>,
    pub assessor: Option<String>,
    /// Naranjo adverse drug reaction probability score.
    #[serde(deserialize_with = "lenient::optional_int")]
    pub naranjo_score: Option<i32>,
    pub company_comment: Option<String>,
}

impl CaseRecord {
    /// Parse a case record from its JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a case record from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// The trimmed case number, or `None` when it is missing or blank.
    pub fn case_id(&self) -> Option<&str> {
        non_blank(&self.case_id)
    }

    /// Patient initials, falling back to those captured at triage.
    pub fn patient_initials(&self) -> Option<&str> {
        non_blank(&self.patient.initials).or_else(|| non_blank(&self.triage.patient_initials))
    }

    /// Case narrative, falling back to the triage event description.
    pub fn narrative(&self) -> Option<&str> {
        non_blank(&self.narrative).or_else(|| non_blank(&self.triage.event_description))
    }

    /// Drugs in input order.
    ///
    /// A triage-only case has no product list yet; its suspect product name
    /// stands in as a single suspect drug.
    pub fn drugs(&self) -> Cow<'_, [DrugEntry]> {
        if self.products.is_empty() {
            if let Some(name) = non_blank(&self.triage.product_name) {
                return Cow::Owned(vec![DrugEntry::suspect(name)]);
            }
        }
        Cow::Borrowed(&self.products)
    }

    /// Reactions in input order.
    ///
    /// A triage-only case has no coded events yet; its event description
    /// stands in as a single uncoded reaction.
    pub fn reactions(&self) -> Cow<'_, [ReactionEntry]> {
        if self.events.is_empty() {
            if let Some(description) = non_blank(&self.triage.event_description) {
                return Cow::Owned(vec![ReactionEntry::verbatim(description)]);
            }
        }
        Cow::Borrowed(&self.events)
    }

    /// Seriousness criteria declared for the case as a whole.
    ///
    /// Data entry criteria win over the ones recorded at triage.
    pub fn case_seriousness(&self) -> &[String] {
        if !any_label(&self.general.seriousness_criteria) {
            &self.triage.seriousness_criteria
        } else {
            &self.general.seriousness_criteria
        }
    }

    /// Country where the case occurred.
    pub fn occurrence_country(&self) -> Option<&str> {
        non_blank(&self.triage.country).or_else(|| non_blank(&self.general.reporter.country))
    }
}

/// Whether any label in the list is not blank.
pub fn any_label(labels: &[String]) -> bool {
    labels.iter().any(|label| !label.trim().is_empty())
}

/// Returns the trimmed value when present and not blank.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}
