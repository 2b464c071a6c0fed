//! ICH E2B(R3) vocabulary: code tables, object identifiers and the shared
//! registry used by the encoder.
//!
//! The tables are compiled in and never change at runtime. Unmapped labels
//! never fail a lookup; each table resolves them to its documented fallback
//! so that a partially completed case still exports.

pub mod data;
pub mod oids;
pub mod registry;
pub mod table;

pub use registry::{DosePeriod, UCUM_OID, VocabularyRegistry, default_registry};
pub use table::{Fallback, TableKind, VocabularyTable};
