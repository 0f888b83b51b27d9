//! Jsonlint adapter.
//!
//! Runs `jsonlint -q -c` once per `.json` file. Exit 0 means the file is
//! clean; a non-zero exit is the normal signal that diagnostics exist
//! ([`ExitPolicy::SignalsFindings`]), with one finding per stderr line of
//! the form `<prefix>:<line-field>,<column-field>,<message>`. The line and
//! column fields carry descriptive text ("line 3", "col 7"); only their
//! trailing numeric run matters.

use crate::checkers::{has_suffix, Checker, ExitPolicy};
use crate::context::LintContext;
use crate::error::Result;
use crate::models::{CodeSpec, Diagnostics, Severity};
use crate::process::{self, ResultCache, ToolInvocation};
use crate::resolver::{resolve_tool, ToolSpec};
use regex::Regex;
use std::path::{Path, PathBuf};

pub const JSONLINT_ERROR: u32 = 1;

const CODES: &[CodeSpec] = &[CodeSpec {
    code: JSONLINT_ERROR,
    severity: Severity::Error,
    label: "Jsonlint Error",
}];

const TOOL: ToolSpec = ToolSpec {
    name: "jsonlint",
    install: "npm install jsonlint -g",
};

pub struct JsonLint {
    policy: ExitPolicy,
    trailing_number: Regex,
    results: ResultCache,
}

impl JsonLint {
    pub fn new() -> Self {
        JsonLint {
            policy: ExitPolicy::SignalsFindings,
            trailing_number: Regex::new(r"[0-9]+$").expect("trailing number pattern"),
            results: ResultCache::new(),
        }
    }

    /// Trailing numeric run of a field like `line 3` or `col 17`.
    fn extract_number(&self, field: &str) -> Option<u32> {
        self.trailing_number
            .find(field.trim())?
            .as_str()
            .parse()
            .ok()
    }
}

impl Default for JsonLint {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for JsonLint {
    fn name(&self) -> &'static str {
        TOOL.name
    }

    fn codes(&self) -> &'static [CodeSpec] {
        CODES
    }

    fn wants(&self, path: &Path) -> bool {
        has_suffix(path, ".json")
    }

    fn prepare(&mut self, ctx: &LintContext, files: &[PathBuf]) -> Result<()> {
        let bin = resolve_tool(ctx, &TOOL)?;
        let invocations = files
            .iter()
            .map(|file| ToolInvocation {
                bin: bin.clone(),
                // jsonlint takes its options before the file.
                args: vec![
                    "-q".to_string(),
                    "-c".to_string(),
                    file.to_string_lossy().to_string(),
                ],
                file: file.clone(),
            })
            .collect();
        self.results = process::run_all(TOOL.name, invocations);
        Ok(())
    }

    fn lint_path(&mut self, _ctx: &LintContext, file: &Path, out: &mut Diagnostics) -> Result<()> {
        let Some(cached) = self.results.remove(file) else {
            return Ok(());
        };
        let res = cached?;

        debug_assert_eq!(self.policy, ExitPolicy::SignalsFindings);
        if res.exited_cleanly() {
            // No problems found.
            return Ok(());
        }

        for record in res.stderr.lines() {
            if record.is_empty() {
                continue;
            }
            let Some((_prefix, rest)) = record.split_once(':') else {
                continue;
            };
            let mut fields = rest.splitn(3, ',');
            let (Some(line_field), Some(col_field), Some(message)) =
                (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };
            let (Some(line), Some(column)) = (
                self.extract_number(line_field),
                self.extract_number(col_field),
            ) else {
                continue;
            };
            out.raise(
                file,
                Some(line),
                Some(column),
                JSONLINT_ERROR,
                message.trim_start(),
            );
        }
        Ok(())
    }
}
