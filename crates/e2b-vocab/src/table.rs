//! Code tables mapping human-readable labels to E2B codes.
//!
//! Each table is a closed set of labels. Lookups are case-insensitive on the
//! trimmed label, and a code is also accepted as its own label so that
//! already-coded input passes through. Labels outside the table resolve to
//! the table's own [`Fallback`] instead of failing.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies one coded field of the ICSR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TableKind {
    Sex,
    Outcome,
    Seriousness,
    ActionTaken,
    Dechallenge,
    Rechallenge,
    Qualification,
    SenderType,
    DrugRole,
    ReportType,
    Route,
    AgeUnit,
    Country,
}

impl TableKind {
    /// All tables, in registry listing order.
    pub const ALL: [TableKind; 13] = [
        TableKind::Sex,
        TableKind::Outcome,
        TableKind::Seriousness,
        TableKind::ActionTaken,
        TableKind::Dechallenge,
        TableKind::Rechallenge,
        TableKind::Qualification,
        TableKind::SenderType,
        TableKind::DrugRole,
        TableKind::ReportType,
        TableKind::Route,
        TableKind::AgeUnit,
        TableKind::Country,
    ];

    /// Returns the table's canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Sex => "sex",
            TableKind::Outcome => "outcome",
            TableKind::Seriousness => "seriousness",
            TableKind::ActionTaken => "action-taken",
            TableKind::Dechallenge => "dechallenge",
            TableKind::Rechallenge => "rechallenge",
            TableKind::Qualification => "qualification",
            TableKind::SenderType => "sender-type",
            TableKind::DrugRole => "drug-role",
            TableKind::ReportType => "report-type",
            TableKind::Route => "route",
            TableKind::AgeUnit => "age-unit",
            TableKind::Country => "country",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TableKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        TableKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("Unknown vocabulary table: {s}"))
    }
}

/// What an unmapped label resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// A fixed code from the table, typically "unknown" or "not applicable".
    Code(&'static str),
    /// The first `n` characters of the label, uppercased.
    LabelPrefix(usize),
}

/// An immutable label-to-code table.
#[derive(Debug, Clone)]
pub struct VocabularyTable {
    kind: TableKind,
    code_system: &'static str,
    /// Key: uppercase trimmed label.
    entries: BTreeMap<String, &'static str>,
    codes: BTreeSet<&'static str>,
    labels: Vec<(&'static str, &'static str)>,
    fallback: Fallback,
}

impl VocabularyTable {
    /// Build a table from `(label, code)` rows.
    pub fn new(
        kind: TableKind,
        code_system: &'static str,
        rows: &[(&'static str, &'static str)],
        fallback: Fallback,
    ) -> Self {
        let mut entries = BTreeMap::new();
        let mut codes = BTreeSet::new();
        for (label, code) in rows {
            entries.entry(label.to_uppercase()).or_insert(*code);
            entries.entry(code.to_uppercase()).or_insert(*code);
            codes.insert(*code);
        }
        if let Fallback::Code(code) = fallback {
            codes.insert(code);
        }
        Self {
            kind,
            code_system,
            entries,
            codes,
            labels: rows.to_vec(),
            fallback,
        }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// OID (or code system name) the codes are drawn from.
    pub fn code_system(&self) -> &'static str {
        self.code_system
    }

    pub fn fallback(&self) -> Fallback {
        self.fallback
    }

    /// The `(label, code)` rows the table was built from.
    pub fn labels(&self) -> &[(&'static str, &'static str)] {
        &self.labels
    }

    /// Every code the table itself can return, fallback code included.
    pub fn codes(&self) -> &BTreeSet<&'static str> {
        &self.codes
    }

    /// Returns the mapped code, or `None` when the label is not in the table.
    pub fn get(&self, label: &str) -> Option<&'static str> {
        self.entries.get(&label.trim().to_uppercase()).copied()
    }

    /// Returns true if the label is mapped.
    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Resolve a label, applying the table's fallback when it is unmapped.
    pub fn lookup(&self, label: &str) -> Cow<'static, str> {
        if let Some(code) = self.get(label) {
            return Cow::Borrowed(code);
        }
        match self.fallback {
            Fallback::Code(code) => Cow::Borrowed(code),
            Fallback::LabelPrefix(len) => {
                let prefix: String = label.trim().chars().take(len).collect();
                Cow::Owned(prefix.to_uppercase())
            }
        }
    }
}
