//! Configuration discovery and effective settings resolution.
//!
//! ariafix reads `ariafix.toml|yaml|yml` from the project root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `input`: `BUTTON_ACCESSIBILITY_AUDIT.md`
//! - `outputs.csv`: `button-labels.csv`
//! - `outputs.guide`: `BUTTON_LABEL_IMPLEMENTATION_GUIDE.md`
//! - `paths.strip_prefix`: `b3-erp/frontend/src/`
//! - `output`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "BUTTON_ACCESSIBILITY_AUDIT.md";
pub const DEFAULT_CSV: &str = "button-labels.csv";
pub const DEFAULT_GUIDE: &str = "BUTTON_LABEL_IMPLEMENTATION_GUIDE.md";
pub const DEFAULT_STRIP_PREFIX: &str = "b3-erp/frontend/src/";

const CONFIG_NAMES: [&str; 3] = ["ariafix.toml", "ariafix.yaml", "ariafix.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Output locations under `[outputs]`.
pub struct OutputsCfg {
    pub csv: Option<String>,
    pub guide: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Path handling under `[paths]`.
pub struct PathsCfg {
    /// Leading path removed before building the context breadcrumb.
    pub strip_prefix: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `ariafix.toml|yaml`.
pub struct AriafixConfig {
    pub input: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub outputs: Option<OutputsCfg>,
    #[serde(default)]
    pub paths: Option<PathsCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub input: PathBuf,
    pub csv: PathBuf,
    pub guide: PathBuf,
    pub strip_prefix: String,
    pub output: String,
}

/// Walk upward from `start` to detect the project root.
///
/// Stops when an `ariafix.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Path of the first config file present under `root`, if any.
pub fn config_path(root: &Path) -> Option<PathBuf> {
    CONFIG_NAMES
        .iter()
        .map(|n| root.join(n))
        .find(|p| p.exists())
}

/// Load `AriafixConfig` from `ariafix.toml` or `ariafix.yaml|yml` if present
/// and parseable.
pub fn load_config(root: &Path) -> Option<AriafixConfig> {
    let path = config_path(root)?;
    let s = fs::read_to_string(&path).ok()?;
    if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&s).ok()
    } else {
        serde_yaml::from_str(&s).ok()
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// Relative paths are anchored at the detected project root.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_input: Option<&str>,
    cli_csv: Option<&str>,
    cli_guide: Option<&str>,
    cli_output: Option<&str>,
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let input = cli_input
        .map(|s| s.to_string())
        .or(cfg.input)
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let csv = cli_csv
        .map(|s| s.to_string())
        .or_else(|| cfg.outputs.as_ref().and_then(|o| o.csv.clone()))
        .unwrap_or_else(|| DEFAULT_CSV.to_string());
    let guide = cli_guide
        .map(|s| s.to_string())
        .or_else(|| cfg.outputs.as_ref().and_then(|o| o.guide.clone()))
        .unwrap_or_else(|| DEFAULT_GUIDE.to_string());
    let strip_prefix = cfg
        .paths
        .as_ref()
        .and_then(|p| p.strip_prefix.clone())
        .unwrap_or_else(|| DEFAULT_STRIP_PREFIX.to_string());
    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    Effective {
        input: repo_root.join(input),
        csv: repo_root.join(csv),
        guide: repo_root.join(guide),
        repo_root,
        strip_prefix,
        output,
    }
}
