//! Shared data models: extracted entries, enriched records, and the
//! module grouping both renderers consume.

use serde::Serialize;
use std::collections::BTreeMap;

/// A checklist entry as it appears in the audit document, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub file_path: String,
    pub line_number: String,
    pub element_type: String,
    pub description: String,
    pub html: String,
}

/// One flagged element with all derived fields filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    pub module: String,
    pub file_path: String,
    pub line_number: String,
    pub icon_type: String,
    pub suggested_text: String,
    pub context: String,
    pub element_type: String,
    pub description: String,
    pub html_snippet: String,
}

impl IssueRecord {
    /// Numeric line used for ordering; digits only by construction, but an
    /// out-of-range value sorts last rather than panicking.
    pub fn line(&self) -> u64 {
        self.line_number.parse().unwrap_or(u64::MAX)
    }
}

/// Records bucketed by module name (alphabetical), each bucket sorted by
/// file path then numeric line.
pub type ModuleGroups<'a> = BTreeMap<&'a str, Vec<&'a IssueRecord>>;

/// Group records by module without copying them.
pub fn group_by_module(records: &[IssueRecord]) -> ModuleGroups<'_> {
    let mut groups: ModuleGroups<'_> = BTreeMap::new();
    for rec in records {
        groups.entry(rec.module.as_str()).or_default().push(rec);
    }
    for bucket in groups.values_mut() {
        bucket.sort_by(|a, b| {
            a.file_path
                .cmp(&b.file_path)
                .then_with(|| a.line().cmp(&b.line()))
        });
    }
    groups
}

/// Per-module counts for console output.
#[derive(Debug, Serialize)]
pub struct ModuleCount {
    pub module: String,
    pub issues: usize,
}

/// Aggregated run summary used by printers.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub total: usize,
    pub modules: usize,
    pub per_module: Vec<ModuleCount>,
}

impl Summary {
    pub fn from_records(records: &[IssueRecord]) -> Self {
        let groups = group_by_module(records);
        Summary {
            total: records.len(),
            modules: groups.len(),
            per_module: groups
                .iter()
                .map(|(m, recs)| ModuleCount {
                    module: m.to_string(),
                    issues: recs.len(),
                })
                .collect(),
        }
    }
}
