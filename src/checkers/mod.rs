//! Checker implementations and the capability interface they share.
//!
//! The orchestrator depends only on the [`Checker`] trait, never on the
//! concrete variants. Process-backed checkers do their subprocess fan-out
//! in `prepare` and read a result cache in `lint_path`; pure scanners
//! leave `prepare` empty and do everything in `lint_path`.

pub mod coffeelint;
pub mod jsonlint;
pub mod mocha;

use crate::context::LintContext;
use crate::error::Result;
use crate::models::{CodeSpec, Diagnostics};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
/// How a process-backed checker interprets a non-zero tool exit code.
///
/// The two tool families genuinely disagree here; this stays a per-checker
/// flag and is deliberately never unified.
pub enum ExitPolicy {
    /// Non-zero means the tool itself failed; the run aborts.
    FailRun,
    /// Non-zero is the normal "diagnostics exist" signal.
    SignalsFindings,
}

/// A pluggable unit that, given files, produces diagnostics either via an
/// external process or by in-process scanning.
pub trait Checker {
    /// Stable checker name; doubles as the config section key.
    fn name(&self) -> &'static str;

    /// Total code table: every code this checker can emit, with severity
    /// and display label.
    fn codes(&self) -> &'static [CodeSpec];

    /// Filename-based routing; the orchestrator only hands this checker
    /// files it wants.
    fn wants(&self, path: &Path) -> bool;

    /// Dispatch phase: submit and fully drain any subprocess work for
    /// `files`. By the time this returns, every per-file result this
    /// checker needs during collection is cached.
    fn prepare(&mut self, ctx: &LintContext, files: &[PathBuf]) -> Result<()>;

    /// Collect phase: turn this file's cached results (or its contents,
    /// for scanners) into diagnostics. Called once per file after
    /// `prepare` returned.
    fn lint_path(&mut self, ctx: &LintContext, file: &Path, out: &mut Diagnostics) -> Result<()>;
}

/// All registered checkers, in the order they run.
pub fn all_checkers() -> Vec<Box<dyn Checker>> {
    vec![
        Box::new(coffeelint::CoffeeLint::new()),
        Box::new(jsonlint::JsonLint::new()),
        Box::new(mocha::MochaSpec::new()),
    ]
}

/// Case-sensitive filename suffix test used by checker routing.
pub(crate) fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().ends_with(suffix))
        .unwrap_or(false)
}
