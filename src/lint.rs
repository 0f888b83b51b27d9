//! Lint orchestrator: drives each checker through dispatch then collection.
//!
//! Produces a `LintResult` with diagnostics and a summary. Checkers whose
//! codes are all disabled are skipped outright and emit nothing. Each
//! checker's `prepare` runs once over its routed slice of the file set;
//! `lint_path` then runs once per file. Severity accounting contributes to
//! the final summary; errors affect typical CI exit behavior upstream.

use crate::checkers::{all_checkers, Checker};
use crate::context::LintContext;
use crate::error::Result;
use crate::models::{Diagnostic, Diagnostics, LintResult, Severity, Summary};
use std::collections::HashSet;
use std::path::PathBuf;

/// Run every registered checker over `files`.
pub fn run_lint(ctx: &LintContext, files: &[PathBuf]) -> Result<LintResult> {
    run_checkers(ctx, files, all_checkers())
}

/// Same as [`run_lint`] but with an explicit checker set.
pub fn run_checkers(
    ctx: &LintContext,
    files: &[PathBuf],
    mut checkers: Vec<Box<dyn Checker>>,
) -> Result<LintResult> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let mut seen: HashSet<&PathBuf> = HashSet::new();

    for checker in &mut checkers {
        let any_enabled = checker
            .codes()
            .iter()
            .any(|c| ctx.is_code_enabled(checker.name(), c.code));
        if !any_enabled {
            continue;
        }

        let routed: Vec<PathBuf> = files
            .iter()
            .filter(|f| checker.wants(f))
            .cloned()
            .collect();
        if routed.is_empty() {
            continue;
        }
        seen.extend(files.iter().filter(|f| checker.wants(f)));

        checker.prepare(ctx, &routed)?;
        let mut sink = Diagnostics::new(checker.codes());
        for file in &routed {
            checker.lint_path(ctx, file, &mut sink)?;
        }
        diagnostics.extend(sink.into_vec());
    }

    let mut errors = 0usize;
    let mut warnings = 0usize;
    for d in &diagnostics {
        match d.severity {
            Severity::Error => errors += 1,
            Severity::Warning => warnings += 1,
        }
    }
    Ok(LintResult {
        diagnostics,
        summary: Summary {
            errors,
            warnings,
            files: seen.len(),
        },
    })
}
