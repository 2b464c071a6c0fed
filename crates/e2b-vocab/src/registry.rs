//! The process-wide vocabulary registry.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::data;
use crate::oids::{ISO3166_OID, ISO5218_OID, OBSERVATION_CODE_OID};
use crate::table::{Fallback, TableKind, VocabularyTable};

/// UCUM code system.
pub const UCUM_OID: &str = "2.16.840.1.113883.6.8";

/// Dosing interval of a frequency label, e.g. every 12 h.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DosePeriod {
    pub value: &'static str,
    pub unit: &'static str,
}

/// Immutable set of all code tables.
///
/// Built once and shared by reference; nothing in it is ever mutated, so it
/// can be read from any number of threads without locking.
#[derive(Debug, Clone)]
pub struct VocabularyRegistry {
    tables: BTreeMap<TableKind, VocabularyTable>,
    /// Key: uppercase trimmed label.
    frequencies: BTreeMap<String, DosePeriod>,
}

impl VocabularyRegistry {
    /// Build the registry with every supported table.
    pub fn new() -> Self {
        let tables = [
            VocabularyTable::new(TableKind::Sex, ISO5218_OID, data::SEX, Fallback::Code("0")),
            VocabularyTable::new(
                TableKind::Outcome,
                "2.16.840.1.113883.3.989.2.1.1.11",
                data::OUTCOME,
                Fallback::Code("0"),
            ),
            VocabularyTable::new(
                TableKind::Seriousness,
                OBSERVATION_CODE_OID,
                data::SERIOUSNESS,
                Fallback::Code("26"),
            ),
            VocabularyTable::new(
                TableKind::ActionTaken,
                "2.16.840.1.113883.3.989.2.1.1.15",
                data::ACTION_TAKEN,
                Fallback::Code("0"),
            ),
            VocabularyTable::new(
                TableKind::Dechallenge,
                "2.16.840.1.113883.3.989.2.1.1.16",
                data::CHALLENGE,
                Fallback::Code("3"),
            ),
            VocabularyTable::new(
                TableKind::Rechallenge,
                "2.16.840.1.113883.3.989.2.1.1.16",
                data::CHALLENGE,
                Fallback::Code("3"),
            ),
            VocabularyTable::new(
                TableKind::Qualification,
                "2.16.840.1.113883.3.989.2.1.1.6",
                data::QUALIFICATION,
                Fallback::Code("5"),
            ),
            VocabularyTable::new(
                TableKind::SenderType,
                "2.16.840.1.113883.3.989.2.1.1.7",
                data::SENDER_TYPE,
                Fallback::Code("1"),
            ),
            VocabularyTable::new(
                TableKind::DrugRole,
                "2.16.840.1.113883.3.989.2.1.1.13",
                data::DRUG_ROLE,
                Fallback::Code("1"),
            ),
            VocabularyTable::new(
                TableKind::ReportType,
                "2.16.840.1.113883.3.989.2.1.1.2",
                data::REPORT_TYPE,
                Fallback::Code("4"),
            ),
            VocabularyTable::new(
                TableKind::Route,
                "2.16.840.1.113883.3.989.2.1.1.14",
                data::ROUTE,
                Fallback::Code("065"),
            ),
            VocabularyTable::new(TableKind::AgeUnit, UCUM_OID, data::AGE_UNIT, Fallback::Code("a")),
            VocabularyTable::new(
                TableKind::Country,
                ISO3166_OID,
                data::COUNTRY,
                Fallback::LabelPrefix(2),
            ),
        ];

        let frequencies = data::FREQUENCY
            .iter()
            .map(|&(label, value, unit)| (label.to_uppercase(), DosePeriod { value, unit }))
            .collect();

        Self {
            tables: tables.into_iter().map(|table| (table.kind(), table)).collect(),
            frequencies,
        }
    }

    /// Returns the table for a coded field.
    pub fn table(&self, kind: TableKind) -> &VocabularyTable {
        // Every kind is inserted by `new`.
        &self.tables[&kind]
    }

    /// Iterate all tables in listing order.
    pub fn tables(&self) -> impl Iterator<Item = &VocabularyTable> {
        self.tables.values()
    }

    /// Resolve a label to its code, applying the table's fallback.
    pub fn lookup(&self, kind: TableKind, label: &str) -> Cow<'static, str> {
        let table = self.table(kind);
        if !table.contains(label) {
            debug!(table = %kind, "unmapped vocabulary label, using fallback");
        }
        table.lookup(label)
    }

    /// Code system OID of a table.
    pub fn code_system(&self, kind: TableKind) -> &'static str {
        self.table(kind).code_system()
    }

    /// Dosing interval for a frequency label, if it has a fixed one.
    pub fn frequency(&self, label: &str) -> Option<DosePeriod> {
        let period = self.frequencies.get(&label.trim().to_uppercase()).copied();
        if period.is_none() {
            debug!("unmapped dose frequency, omitting interval");
        }
        period
    }
}

impl Default for VocabularyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_REGISTRY: OnceLock<VocabularyRegistry> = OnceLock::new();

/// Returns the shared registry, building it on first access.
pub fn default_registry() -> &'static VocabularyRegistry {
    DEFAULT_REGISTRY.get_or_init(VocabularyRegistry::new)
}
