//! Audit document extraction.
//!
//! The document is split at every `### <path>` heading; each section's first
//! line is the file path for the checklist entries beneath it. An entry is
//!
//! ~~~text
//! - [ ] Line 42 (button): Icon-only button without label
//!   ```html
//!   <button onClick={..}><Trash2 className="h-4 w-4" /></button>
//!   ```
//! ~~~
//!
//! Anything else (prose, nested headings, checked items, entries without an
//! `html` fence) is skipped without error.

use crate::models::RawEntry;
use regex::Regex;
use std::sync::LazyLock;

static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^###[ \t]+").unwrap());

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"- \[ \] Line (\d+) \(([^)\n]+)\):[ \t]*([^\n]*)\n[ \t]*```html[ \t]*\n((?:[^\n]*\n)*?)[ \t]*```",
    )
    .unwrap()
});

/// Extract every well-formed checklist entry, in document order.
pub fn extract_entries(document: &str) -> Vec<RawEntry> {
    let text = document.replace("\r\n", "\n");
    let mut entries = Vec::new();
    for (path, body) in split_sections(&text) {
        for cap in ENTRY_RE.captures_iter(body) {
            entries.push(RawEntry {
                file_path: path.to_string(),
                line_number: cap[1].to_string(),
                element_type: cap[2].trim().to_string(),
                description: cap[3].trim().to_string(),
                html: cap[4].strip_suffix('\n').unwrap_or(&cap[4]).to_string(),
            });
        }
    }
    entries
}

/// Split into `(file_path, body)` pairs. Text before the first heading is
/// preamble and dropped; sections with an empty path are dropped too.
fn split_sections(text: &str) -> Vec<(&str, &str)> {
    let heads: Vec<_> = SECTION_RE.find_iter(text).collect();
    let mut out = Vec::with_capacity(heads.len());
    for (i, head) in heads.iter().enumerate() {
        let end = heads.get(i + 1).map(|m| m.start()).unwrap_or(text.len());
        let section = &text[head.end()..end];
        let (first, body) = section.split_once('\n').unwrap_or((section, ""));
        let path = first.trim();
        if path.is_empty() {
            continue;
        }
        out.push((path, body));
    }
    out
}
