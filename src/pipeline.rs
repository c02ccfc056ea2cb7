//! End-to-end run: read the audit, build records, write both artifacts.
//!
//! Each stage finishes before the next starts; the first I/O failure aborts
//! the run and is returned to the caller.

use crate::config::Effective;
use crate::enrich::enrich_all;
use crate::error::AuditError;
use crate::extract::extract_entries;
use crate::guide::render_guide;
use crate::models::{IssueRecord, Summary};
use crate::table::render_csv;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of a run, consumed by the output printers.
#[derive(Serialize)]
pub struct RunReport {
    pub summary: Summary,
    /// Artifact paths relative to the project root, in write order.
    pub written: Vec<String>,
}

/// Read the whole audit document. A missing file maps to `InputNotFound`.
pub fn read_document(path: &Path) -> Result<String, AuditError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            AuditError::InputNotFound(path.to_path_buf())
        } else {
            AuditError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Extract and enrich all records from document text.
pub fn build_records(document: &str, strip_prefix: &str) -> Vec<IssueRecord> {
    enrich_all(&extract_entries(document), strip_prefix)
}

/// Parse and summarize without writing anything.
pub fn scan(eff: &Effective) -> Result<RunReport, AuditError> {
    let doc = read_document(&eff.input)?;
    let records = build_records(&doc, &eff.strip_prefix);
    Ok(RunReport {
        summary: Summary::from_records(&records),
        written: Vec::new(),
    })
}

/// Full pipeline: CSV first, then the Markdown guide.
pub fn run(eff: &Effective, progress: bool) -> Result<RunReport, AuditError> {
    if progress {
        eprintln!(
            "{} reading {}",
            crate::utils::info_prefix(),
            display_path(&eff.input, &eff.repo_root)
        );
    }
    let doc = read_document(&eff.input)?;
    let records = build_records(&doc, &eff.strip_prefix);
    if progress {
        eprintln!(
            "{} extracted {} issues",
            crate::utils::info_prefix(),
            records.len()
        );
    }

    let mut written = Vec::new();
    let csv = render_csv(&records)?;
    write_artifact(&eff.csv, &csv)?;
    written.push(display_path(&eff.csv, &eff.repo_root));

    let guide = render_guide(&records);
    write_artifact(&eff.guide, guide.as_bytes())?;
    written.push(display_path(&eff.guide, &eff.repo_root));

    Ok(RunReport {
        summary: Summary::from_records(&records),
        written,
    })
}

fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), AuditError> {
    let wrap = |source: std::io::Error| AuditError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(path, bytes).map_err(wrap)
}

/// Path shown to the user: relative to the project root when possible.
fn display_path(path: &Path, root: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve_effective;
    use crate::table::CSV_HEADER;
    use tempfile::tempdir;

    const SCENARIO: &str = "### app/(modules)/billing/Invoice.tsx\n\n- [ ] Line 12 (button): no label\n```html\n<Trash2 className=\"h-4 w-4\" />\n```\n";

    fn setup(doc: Option<&str>) -> (tempfile::TempDir, Effective) {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        if let Some(doc) = doc {
            fs::write(dir.path().join(crate::config::DEFAULT_INPUT), doc).unwrap();
        }
        let eff = resolve_effective(dir.path().to_str(), None, None, None, None);
        (dir, eff)
    }

    #[test]
    fn test_scenario_single_record() {
        let records = build_records(SCENARIO, "");
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.module, "Billing");
        assert_eq!(r.icon_type, "Trash2");
        assert_eq!(r.suggested_text, "Delete");

        let (_dir, eff) = setup(Some(SCENARIO));
        let report = run(&eff, false).unwrap();
        assert_eq!(report.summary.total, 1);
        assert_eq!(report.summary.modules, 1);
        assert_eq!(
            report.written,
            vec![
                crate::config::DEFAULT_CSV.to_string(),
                crate::config::DEFAULT_GUIDE.to_string()
            ]
        );

        let csv = fs::read_to_string(&eff.csv).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("Billing,app/(modules)/billing/Invoice.tsx,12,Trash2,Delete,"));

        let guide = fs::read_to_string(&eff.guide).unwrap();
        assert_eq!(guide.matches("\n### `").count(), 1);
        assert!(guide.contains("### `app/(modules)/billing/Invoice.tsx`"));
    }

    #[test]
    fn test_empty_document_still_writes_outputs() {
        let (_dir, eff) = setup(Some("# Audit\n\nNothing flagged.\n"));
        let report = run(&eff, false).unwrap();
        assert_eq!(report.summary.total, 0);
        let csv = fs::read_to_string(&eff.csv).unwrap();
        assert_eq!(csv.lines().count(), 1);
        assert_eq!(csv.lines().next().unwrap(), CSV_HEADER.join(","));
        let guide = fs::read_to_string(&eff.guide).unwrap();
        assert!(guide.starts_with(crate::guide::GUIDE_TITLE));
        assert!(guide.contains("- **Total issues:** 0"));
    }

    #[test]
    fn test_missing_input_fails_without_outputs() {
        let (_dir, eff) = setup(None);
        let err = run(&eff, false).err().unwrap();
        assert!(matches!(err, AuditError::InputNotFound(_)));
        assert!(!eff.csv.exists());
        assert!(!eff.guide.exists());
        assert!(matches!(scan(&eff), Err(AuditError::InputNotFound(_))));
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let doc = format!(
            "{}\n### app/hr/leave/page.tsx\n- [ ] Line 10 (button): x\n```html\n<Eye className=\"h-4\" />\n```\n- [ ] Line 9 (button): y\n```html\n<Plus />\n```\n",
            SCENARIO
        );
        let (_dir, eff) = setup(Some(&doc));
        run(&eff, false).unwrap();
        let csv1 = fs::read(&eff.csv).unwrap();
        let guide1 = fs::read(&eff.guide).unwrap();
        run(&eff, false).unwrap();
        assert_eq!(fs::read(&eff.csv).unwrap(), csv1);
        assert_eq!(fs::read(&eff.guide).unwrap(), guide1);
    }

    #[test]
    fn test_scan_writes_nothing() {
        let (_dir, eff) = setup(Some(SCENARIO));
        let report = scan(&eff).unwrap();
        assert_eq!(report.summary.total, 1);
        assert!(report.written.is_empty());
        assert!(!eff.csv.exists());
    }

    #[test]
    fn test_outputs_into_nested_directory() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("audit.md"), SCENARIO).unwrap();
        let eff = resolve_effective(
            dir.path().to_str(),
            Some("audit.md"),
            Some("out/labels.csv"),
            Some("out/guide.md"),
            None,
        );
        let report = run(&eff, false).unwrap();
        assert_eq!(report.written[0], Path::new("out").join("labels.csv").to_string_lossy());
        assert!(dir.path().join("out/guide.md").exists());
    }
}
