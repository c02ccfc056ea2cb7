//! ariafix CLI binary entry point.
//! Resolves configuration, runs the pipeline, and prints results.

use ariafix::cli::{Cli, Commands, InputArgs};
use ariafix::config::{self, Effective};
use ariafix::error::AuditError;
use ariafix::pipeline::{self, RunReport};
use ariafix::{output, utils};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Some(Commands::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Scan { input }) => {
            let eff = resolve(&input, None, None);
            finish(pipeline::scan(&eff), &eff);
        }
        Some(Commands::Run { input, csv, guide }) => {
            let eff = resolve(&input, csv.as_deref(), guide.as_deref());
            finish(pipeline::run(&eff, eff.output != "json"), &eff);
        }
        None => {
            let eff = resolve(&InputArgs::default(), None, None);
            finish(pipeline::run(&eff, eff.output != "json"), &eff);
        }
    }
}

fn resolve(input: &InputArgs, csv: Option<&str>, guide: Option<&str>) -> Effective {
    let eff = config::resolve_effective(
        input.repo_root.as_deref(),
        input.input.as_deref(),
        csv,
        guide,
        input.output.as_deref(),
    );
    if eff.output != "json" {
        match config::config_path(&eff.repo_root) {
            None => eprintln!(
                "{} No ariafix.toml found; using defaults.",
                utils::note_prefix()
            ),
            Some(p) if config::load_config(&eff.repo_root).is_none() => eprintln!(
                "{} {} could not be parsed; using defaults.",
                utils::note_prefix(),
                p.to_string_lossy()
            ),
            Some(_) => {}
        }
    }
    eff
}

fn finish(res: Result<RunReport, AuditError>, eff: &Effective) {
    match res {
        Ok(report) => {
            output::print_report(&report, &eff.output);
            if eff.output != "json" && !report.written.is_empty() {
                eprintln!("{} done", utils::ok_prefix());
            }
        }
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    }
}
