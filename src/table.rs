//! Flat CSV work list: one row per record, grouped by module.

use crate::enrich::UNKNOWN_ICON;
use crate::error::AuditError;
use crate::models::{group_by_module, IssueRecord};

/// Fixed CSV header, always written even when there are no records.
pub const CSV_HEADER: [&str; 7] = [
    "Module",
    "File Path",
    "Line Number",
    "Icon Type",
    "Suggested Button Text",
    "Context",
    "Implementation Notes",
];

/// Render records as CSV bytes. Modules are alphabetical; rows inside a
/// module follow file path then numeric line.
pub fn render_csv(records: &[IssueRecord]) -> Result<Vec<u8>, AuditError> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)?;
    for recs in group_by_module(records).values() {
        for rec in recs {
            let note = implementation_note(rec);
            wtr.write_record([
                rec.module.as_str(),
                rec.file_path.as_str(),
                rec.line_number.as_str(),
                rec.icon_type.as_str(),
                rec.suggested_text.as_str(),
                rec.context.as_str(),
                note.as_str(),
            ])?;
        }
    }
    wtr.into_inner()
        .map_err(|e| AuditError::Csv(e.into_error().into()))
}

/// One-sentence instruction for the developer fixing this element.
pub fn implementation_note(rec: &IssueRecord) -> String {
    if rec.icon_type == UNKNOWN_ICON {
        format!(
            "Review the {} manually and add a descriptive aria-label",
            rec.element_type
        )
    } else {
        format!(
            "Add aria-label=\"{}\" to the {} and aria-hidden=\"true\" to the {} icon",
            rec.suggested_text, rec.element_type, rec.icon_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(module: &str, file: &str, line: &str, icon: &str, text: &str) -> IssueRecord {
        IssueRecord {
            module: module.into(),
            file_path: file.into(),
            line_number: line.into(),
            icon_type: icon.into(),
            suggested_text: text.into(),
            context: "leads > page".into(),
            element_type: "button".into(),
            description: "no label".into(),
            html_snippet: "<X />".into(),
        }
    }

    fn rows(bytes: &[u8]) -> Vec<Vec<String>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(bytes);
        rdr.records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_empty_records_write_header_only() {
        let out = render_csv(&[]).unwrap();
        let rows = rows(&out);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], CSV_HEADER.map(String::from).to_vec());
    }

    #[test]
    fn test_rows_grouped_and_sorted() {
        let records = vec![
            rec("Sales", "app/b.tsx", "10", "Eye", "View"),
            rec("Crm", "app/z.tsx", "1", "Plus", "Add"),
            rec("Sales", "app/b.tsx", "9", "Trash2", "Delete"),
            rec("Sales", "app/a.tsx", "42", "X", "Close"),
        ];
        let rows = rows(&render_csv(&records).unwrap());
        let keys: Vec<_> = rows[1..]
            .iter()
            .map(|r| (r[0].as_str(), r[1].as_str(), r[2].as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Crm", "app/z.tsx", "1"),
                ("Sales", "app/a.tsx", "42"),
                ("Sales", "app/b.tsx", "9"),
                ("Sales", "app/b.tsx", "10"),
            ]
        );
    }

    #[test]
    fn test_row_columns_and_note() {
        let records = vec![rec("Billing", "app/(modules)/billing/Invoice.tsx", "12", "Trash2", "Delete")];
        let rows = rows(&render_csv(&records).unwrap());
        assert_eq!(rows.len(), 2);
        let row = &rows[1];
        assert_eq!(row.len(), CSV_HEADER.len());
        assert_eq!(row[3], "Trash2");
        assert_eq!(row[4], "Delete");
        assert_eq!(row[5], "leads > page");
        assert!(row[6].contains("aria-label=\"Delete\""));
    }

    #[test]
    fn test_unknown_icon_note_asks_for_review() {
        let r = rec("Other", "x.tsx", "1", UNKNOWN_ICON, UNKNOWN_ICON);
        assert!(implementation_note(&r).starts_with("Review the button manually"));
    }
}
