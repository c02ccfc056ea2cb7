//! Console message prefixes shared by the binary and the pipeline.
//!
//! Colors are dropped when `NO_COLOR` is set.

use owo_colors::OwoColorize;

pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if colors_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if colors_enabled() {
        "note:".yellow().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn info_prefix() -> String {
    if colors_enabled() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

pub fn ok_prefix() -> String {
    if colors_enabled() {
        "✔".green().bold().to_string()
    } else {
        "✔".to_string()
    }
}
