//! Markdown implementation guide grouped by module, then file.
//!
//! Output is a pure function of the record list (no timestamps), so two runs
//! over the same audit produce identical bytes.

use crate::enrich::UNKNOWN_ICON;
use crate::models::{group_by_module, IssueRecord};
use std::collections::BTreeMap;

pub const GUIDE_TITLE: &str = "# Button Accessibility Implementation Guide";

const PREAMBLE: &str = "This guide lists every icon-only button and link flagged by the \
accessibility audit, grouped by module and file, with a suggested accessible label for each.";

const HOW_TO: &str = r#"## How to Apply a Label

Put the `aria-label` on the interactive element that wraps the icon, and hide the
decorative icon from assistive technology:

```tsx
<button aria-label="Delete" onClick={handleDelete}>
  <Trash2 className="h-4 w-4" aria-hidden="true" />
</button>
```
"#;

/// Anchor for a module heading: lower-cased, spaces replaced by `-`.
pub fn module_anchor(module: &str) -> String {
    module.to_lowercase().replace(' ', "-")
}

/// Render the full guide document.
pub fn render_guide(records: &[IssueRecord]) -> String {
    let groups = group_by_module(records);
    let mut out = String::new();
    out.push_str(GUIDE_TITLE);
    out.push_str("\n\n");
    out.push_str(PREAMBLE);
    out.push_str("\n\n## Summary\n\n");
    out.push_str(&format!("- **Total issues:** {}\n", records.len()));
    out.push_str(&format!("- **Modules affected:** {}\n", groups.len()));

    out.push_str("\n## Table of Contents\n\n");
    if groups.is_empty() {
        out.push_str("_No issues found._\n");
    }
    for (module, recs) in &groups {
        out.push_str(&format!(
            "- [{}](#{}) ({})\n",
            module,
            module_anchor(module),
            issue_count(recs.len())
        ));
    }
    out.push('\n');
    out.push_str(HOW_TO);

    for (module, recs) in &groups {
        out.push_str(&format!("\n---\n\n## {}\n", module));
        let mut by_file: BTreeMap<&str, Vec<&IssueRecord>> = BTreeMap::new();
        for rec in recs.iter().copied() {
            by_file.entry(rec.file_path.as_str()).or_default().push(rec);
        }
        for (file, file_recs) in &by_file {
            out.push_str(&format!("\n### `{}`\n", file));
            for rec in file_recs {
                render_issue(&mut out, rec);
            }
        }
    }
    out
}

/// `1 issue`, `3 issues`.
fn issue_count(n: usize) -> String {
    if n == 1 {
        "1 issue".to_string()
    } else {
        format!("{} issues", n)
    }
}

fn render_issue(out: &mut String, rec: &IssueRecord) {
    out.push_str(&format!(
        "\n**Line {}** (`{}`)",
        rec.line_number, rec.element_type
    ));
    if !rec.description.is_empty() {
        out.push_str(&format!(": {}", rec.description));
    }
    out.push_str("\n\n");
    out.push_str(&format!("- **Icon:** `{}`\n", rec.icon_type));
    out.push_str(&format!("- **Suggested label:** {}\n", rec.suggested_text));
    out.push_str(&format!("- **Context:** {}\n", rec.context));
    out.push_str("\nCurrent code:\n\n```html\n");
    out.push_str(&rec.html_snippet);
    out.push_str("\n```\n\nSuggested change:\n\n```tsx\n");
    out.push_str(&fix_template(rec));
    out.push_str("```\n");
}

/// Code template showing the label applied to the flagged element.
fn fix_template(rec: &IssueRecord) -> String {
    // Only links keep their own component; every other element becomes a button.
    let tag = match rec.element_type.to_lowercase().as_str() {
        "link" | "a" => "Link",
        _ => "button",
    };
    let inner = if rec.icon_type == UNKNOWN_ICON {
        "  {/* existing content */}".to_string()
    } else {
        format!("  <{} aria-hidden=\"true\" />", rec.icon_type)
    };
    format!(
        "<{tag} aria-label=\"{label}\">\n{inner}\n</{tag}>\n",
        tag = tag,
        label = rec.suggested_text,
        inner = inner
    )
}
