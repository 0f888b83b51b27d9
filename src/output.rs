//! Output rendering for lint results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-diagnostic fields and a top-level summary. File paths are shown
//! relative to the repo root where possible.

use crate::models::{LintResult, Severity};
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;
use std::path::Path;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Colored `error:` prefix for host-level failure messages.
pub fn error_prefix() -> String {
    if std::env::var_os("NO_COLOR").is_none() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

fn display_path(file: &str, root: &Path) -> String {
    pathdiff::diff_paths(file, root)
        .map(|p| p.to_string_lossy().to_string())
        .filter(|p| !p.starts_with(".."))
        .unwrap_or_else(|| file.to_string())
}

/// Print lint results in the requested format.
pub fn print_lint(res: &LintResult, output: &str, root: &Path) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_lint_json(res)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for d in &res.diagnostics {
                let sev = match d.severity {
                    Severity::Error => {
                        if color {
                            "⟦error⟧".red().bold().to_string()
                        } else {
                            "⟦error⟧".to_string()
                        }
                    }
                    Severity::Warning => {
                        if color {
                            "⟦warn⟧".yellow().bold().to_string()
                        } else {
                            "⟦warn⟧".to_string()
                        }
                    }
                };
                let icon = match d.severity {
                    Severity::Error => {
                        if color {
                            "✖".red().to_string()
                        } else {
                            "✖".to_string()
                        }
                    }
                    Severity::Warning => {
                        if color {
                            "▲".yellow().to_string()
                        } else {
                            "▲".to_string()
                        }
                    }
                };
                let mut loc = display_path(&d.file, root);
                if let Some(line) = d.line {
                    loc.push_str(&format!(":{}", line));
                    if let Some(col) = d.column {
                        loc.push_str(&format!(":{}", col));
                    }
                }
                let loc = if color { loc.bold().to_string() } else { loc };
                println!("{} {} {} ❲{}❳ — {}", icon, sev, loc, d.label, d.message);
            }
            let summary = format!(
                "— Summary — errors={} warnings={} files={}",
                res.summary.errors, res.summary.warnings, res.summary.files
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult) -> JsonVal {
    // Directly serialize LintResult as JSON, keeping stable shape
    serde_json::to_value(res).unwrap()
}
