//! Case record model for E2B(R3) ICSR export.
//!
//! The types mirror the sections of a case as the workflow persists them:
//! triage, general data entry, patient, products, events, medical review
//! and narrative. Everything is optional; see [`CaseRecord`].

pub mod case;
pub mod error;
mod lenient;
pub mod numeric;
pub mod patient;
pub mod product;
pub mod reaction;

pub use case::{CaseRecord, General, MedicalReview, Reporter, Triage, any_label, non_blank};
pub use error::{ModelError, Result};
pub use numeric::Numeric;
pub use patient::{LabResult, MedicalHistoryEntry, Patient};
pub use product::{Dosage, DrugEntry};
pub use reaction::ReactionEntry;
