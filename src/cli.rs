//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ariafix",
    version,
    about = "Turn a button accessibility audit into a CSV work list and an implementation guide",
    long_about = "ariafix reads a markdown audit of unlabeled buttons, derives an icon, a suggested aria-label, and a module for each entry, and writes a CSV plus a Markdown guide.\n\nRunning without a subcommand is the same as `ariafix run`.\n\nConfiguration precedence: CLI > ariafix.toml > defaults.",
    after_help = "Examples:\n  ariafix\n  ariafix run --input docs/BUTTON_AUDIT.md --csv out/labels.csv\n  ariafix scan --output json"
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Args, Default)]
/// Flags shared by commands that read the audit document.
pub struct InputArgs {
    #[arg(long, help = "Project root (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Audit document (default: BUTTON_ACCESSIBILITY_AUDIT.md)")]
    pub input: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current ariafix version.")]
    Version,
    /// Extract records and write both artifacts
    #[command(
        about = "Generate the CSV and the guide",
        long_about = "Parse the audit document, enrich every entry, and write the CSV work list and the Markdown implementation guide.",
        after_help = "Examples:\n  ariafix run\n  ariafix run --guide docs/GUIDE.md --output json"
    )]
    Run {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, help = "CSV output path (default: button-labels.csv)")]
        csv: Option<String>,
        #[arg(long, help = "Guide output path (default: BUTTON_LABEL_IMPLEMENTATION_GUIDE.md)")]
        guide: Option<String>,
    },
    /// Parse and summarize without writing
    #[command(
        about = "Summarize the audit without writing files",
        long_about = "Parse the audit document and print per-module counts. No files are written."
    )]
    Scan {
        #[command(flatten)]
        input: InputArgs,
    },
}
