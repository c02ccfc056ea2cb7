//! Field derivation for extracted entries.
//!
//! - `detect_icon`: capitalized JSX tag sniffing, styled tags first.
//! - `suggest_text`: fixed icon → action label table.
//! - `module_for`: path marker rules in fixed priority order.
//! - `context_for`: short breadcrumb of the trailing path segments.
//! - `truncate_snippet`: 100-character excerpt cap.

use crate::models::{IssueRecord, RawEntry};
use regex::Regex;
use std::sync::LazyLock;

/// Sentinel icon name when no component tag is found.
pub const UNKNOWN_ICON: &str = "Unknown";

/// Snippets longer than this many characters are cut and suffixed.
pub const SNIPPET_LIMIT: usize = 100;

const DEFAULT_EXTENSIONS: [&str; 4] = [".tsx", ".ts", ".jsx", ".js"];

/// Interactive wrappers that are never reported as the icon.
static WRAPPER_NAMES: [&str; 3] = ["Link", "Button", "IconButton"];

static STYLED_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Z][A-Za-z0-9]*)\s+className=").unwrap());

static ANY_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<([A-Z][A-Za-z0-9]*)").unwrap());

static ICON_LABELS: &[(&str, &str)] = &[
    ("Activity", "View Activity"),
    ("AlertCircle", "View Alert"),
    ("AlertTriangle", "View Warning"),
    ("ArrowLeft", "Go Back"),
    ("ArrowRight", "Next"),
    ("Bell", "Notifications"),
    ("Calendar", "Select Date"),
    ("Check", "Confirm"),
    ("CheckCircle", "Approve"),
    ("CheckCircle2", "Approve"),
    ("ChevronDown", "Expand"),
    ("ChevronLeft", "Previous"),
    ("ChevronRight", "Next"),
    ("ChevronUp", "Collapse"),
    ("Clock", "View History"),
    ("Copy", "Copy"),
    ("Download", "Download"),
    ("Edit", "Edit"),
    ("Edit2", "Edit"),
    ("Edit3", "Edit"),
    ("ExternalLink", "Open in New Tab"),
    ("Eye", "View"),
    ("EyeOff", "Hide"),
    ("FileText", "View Document"),
    ("Filter", "Filter"),
    ("Info", "More Information"),
    ("Lock", "Lock"),
    ("Mail", "Send Email"),
    ("Menu", "Open Menu"),
    ("MessageSquare", "Add Comment"),
    ("Minus", "Remove"),
    ("MoreHorizontal", "More Actions"),
    ("MoreVertical", "More Actions"),
    ("Pencil", "Edit"),
    ("Phone", "Call"),
    ("Play", "Start"),
    ("Plus", "Add"),
    ("Printer", "Print"),
    ("RefreshCw", "Refresh"),
    ("RotateCcw", "Reset"),
    ("Save", "Save"),
    ("Search", "Search"),
    ("Send", "Send"),
    ("Settings", "Settings"),
    ("Share2", "Share"),
    ("Star", "Add to Favorites"),
    ("Trash", "Delete"),
    ("Trash2", "Delete"),
    ("Unlock", "Unlock"),
    ("Upload", "Upload"),
    ("X", "Close"),
    ("XCircle", "Reject"),
];

/// Build a full record from an extracted entry.
pub fn enrich(entry: &RawEntry, strip_prefix: &str) -> IssueRecord {
    let icon = detect_icon(&entry.html);
    IssueRecord {
        module: module_for(&entry.file_path),
        file_path: entry.file_path.clone(),
        line_number: entry.line_number.clone(),
        suggested_text: suggest_text(&icon).to_string(),
        icon_type: icon,
        context: context_for(&entry.file_path, strip_prefix),
        element_type: entry.element_type.clone(),
        description: entry.description.clone(),
        html_snippet: truncate_snippet(&entry.html),
    }
}

/// Enrich a batch, preserving order.
pub fn enrich_all(entries: &[RawEntry], strip_prefix: &str) -> Vec<IssueRecord> {
    entries.iter().map(|e| enrich(e, strip_prefix)).collect()
}

/// Find the icon component in a JSX excerpt.
///
/// Pass 1 only considers tags carrying a `className` right after the name;
/// pass 2 accepts any capitalized tag. Wrapper components are skipped in
/// both passes.
pub fn detect_icon(html: &str) -> String {
    for re in [&*STYLED_TAG_RE, &*ANY_TAG_RE] {
        let hit = re
            .captures_iter(html)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .find(|name| !WRAPPER_NAMES.contains(name));
        if let Some(name) = hit {
            return name.to_string();
        }
    }
    UNKNOWN_ICON.to_string()
}

/// Human-readable label for an icon; unmapped names pass through.
pub fn suggest_text(icon: &str) -> &str {
    ICON_LABELS
        .iter()
        .find(|(name, _)| *name == icon)
        .map(|(_, label)| *label)
        .unwrap_or(icon)
}

/// Module grouping for a path. First matching marker wins:
/// `(modules)/<name>`, then `(dashboard)`, then an `hr` segment.
pub fn module_for(file_path: &str) -> String {
    let parts: Vec<&str> = file_path.split('/').collect();
    let raw = if let Some(name) = parts
        .iter()
        .position(|p| *p == "(modules)")
        .and_then(|i| parts.get(i + 1).copied())
        .filter(|name| !name.is_empty())
    {
        name
    } else if parts.contains(&"(dashboard)") {
        "dashboard"
    } else if parts.contains(&"hr") {
        "hr"
    } else {
        "other"
    };
    capitalize(raw)
}

/// Breadcrumb of at most the last three segments, extension stripped.
pub fn context_for(file_path: &str, strip_prefix: &str) -> String {
    let rel = if strip_prefix.is_empty() {
        file_path
    } else {
        file_path.strip_prefix(strip_prefix).unwrap_or(file_path)
    };
    let parts: Vec<&str> = rel.split('/').filter(|s| !s.is_empty()).collect();
    let tail = &parts[parts.len().saturating_sub(3)..];
    let mut crumbs: Vec<&str> = tail.to_vec();
    if let Some(last) = crumbs.pop() {
        let stem = DEFAULT_EXTENSIONS
            .iter()
            .find_map(|ext| last.strip_suffix(ext))
            .unwrap_or(last);
        crumbs.push(stem);
    }
    crumbs.join(" > ")
}

/// Trim and cap an excerpt at `SNIPPET_LIMIT` characters plus `...`.
pub fn truncate_snippet(html: &str) -> String {
    let trimmed = html.trim();
    match trimmed.char_indices().nth(SNIPPET_LIMIT) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
