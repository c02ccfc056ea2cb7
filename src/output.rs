//! Console rendering of run results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form carries the
//! summary plus the artifact paths written during the run.

use crate::models::Summary;
use crate::pipeline::RunReport;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && crate::utils::colors_enabled()
}

/// Print the run report in the requested format.
pub fn print_report(report: &RunReport, output: &str) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_report_json(report)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        _ => {
            let color = use_colors(output);
            for path in &report.written {
                if color {
                    println!("{} {}", "written:".green().bold(), path.bold());
                } else {
                    println!("written: {}", path);
                }
            }
            print_summary_human(&report.summary, color);
        }
    }
}

fn print_summary_human(summary: &Summary, color: bool) {
    let head = format!(
        "— Summary — issues={} modules={}",
        summary.total, summary.modules
    );
    if color {
        println!("{}", head.bold());
    } else {
        println!("{}", head);
    }
    for m in &summary.per_module {
        if color {
            println!("  {:<24} {}", m.module.cyan().to_string(), m.issues);
        } else {
            println!("  {:<24} {}", m.module, m.issues);
        }
    }
}

/// Compose the report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &RunReport) -> JsonVal {
    // Serialize RunReport directly, keeping a stable shape
    serde_json::to_value(report).unwrap_or(JsonVal::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModuleCount;

    #[test]
    fn test_compose_report_json_shape() {
        let report = RunReport {
            summary: Summary {
                total: 3,
                modules: 2,
                per_module: vec![
                    ModuleCount { module: "Crm".into(), issues: 1 },
                    ModuleCount { module: "Hr".into(), issues: 2 },
                ],
            },
            written: vec!["button-labels.csv".into(), "GUIDE.md".into()],
        };
        let out = compose_report_json(&report);
        assert_eq!(out["summary"]["total"], 3);
        assert_eq!(out["summary"]["modules"], 2);
        assert_eq!(out["summary"]["per_module"][1]["module"], "Hr");
        assert_eq!(out["summary"]["per_module"][1]["issues"], 2);
        assert_eq!(out["written"][0], "button-labels.csv");
    }

    #[test]
    fn test_compose_report_json_scan_has_no_writes() {
        let report = RunReport {
            summary: Summary { total: 0, modules: 0, per_module: vec![] },
            written: vec![],
        };
        let out = compose_report_json(&report);
        assert_eq!(out["summary"]["total"], 0);
        assert!(out["written"].as_array().unwrap().is_empty());
    }
}
