//! Lintmux CLI binary entry point.
//! Delegates to the library for checker orchestration and prints results.

use clap::Parser;
use glob::glob;
use lintmux::checkers::all_checkers;
use lintmux::cli::{Cli, Commands};
use lintmux::context::LintContext;
use lintmux::models::Severity;
use lintmux::{config, lint, output};
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Lint {
            paths,
            repo_root,
            output: out_mode,
        } => {
            let eff = config::resolve_effective(repo_root.as_deref(), out_mode.as_deref());
            let files = expand_paths(&eff.repo_root, &paths);
            if files.is_empty() {
                eprintln!(
                    "{} {}",
                    output::error_prefix(),
                    "No files matched the given paths."
                );
                std::process::exit(2);
            }
            let ctx = LintContext::new(eff.repo_root.clone(), eff.config.clone());
            match lint::run_lint(&ctx, &files) {
                Ok(result) => {
                    output::print_lint(&result, &eff.output, &eff.repo_root);
                    if result.summary.errors > 0 {
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("{} {}", output::error_prefix(), e);
                    std::process::exit(2);
                }
            }
        }
        Commands::Checkers => {
            for checker in all_checkers() {
                println!("{}", checker.name());
                for spec in checker.codes() {
                    let sev = match spec.severity {
                        Severity::Error => "error",
                        Severity::Warning => "warning",
                    };
                    println!("  {:>3}  {:<8}  {}", spec.code, sev, spec.label);
                }
            }
        }
    }
}

/// Expand CLI paths/globs against the repo root into a deterministic,
/// deduplicated file list.
fn expand_paths(root: &PathBuf, patterns: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        let abs = root.join(pat);
        let pattern = abs.to_string_lossy().to_string();
        match glob(&pattern) {
            Ok(entries) => {
                for p in entries.flatten() {
                    if p.is_file() {
                        files.push(p);
                    }
                }
            }
            Err(_) => {
                // Not a valid glob; accept it as a literal path if present.
                if abs.is_file() {
                    files.push(abs);
                }
            }
        }
    }
    files.sort();
    files.dedup();
    files
}
