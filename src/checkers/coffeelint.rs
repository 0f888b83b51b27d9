//! CoffeeLint adapter.
//!
//! Runs `coffeelint --csv` once per `.coffee` file. A non-zero exit means
//! the tool itself blew up ([`ExitPolicy::FailRun`]); on exit 0, stdout
//! holds comma-delimited records `(path, line, severityWord, message)`.
//! Severity word `error` maps to ERROR, anything else to WARNING. The
//! optional `tools.coffeelint.config` override points at a CoffeeLint
//! options file passed through via `--file`.

use crate::checkers::{has_suffix, Checker, ExitPolicy};
use crate::context::LintContext;
use crate::error::{LintError, Result};
use crate::models::{CodeSpec, Diagnostics, Severity};
use crate::process::{self, ResultCache, ToolInvocation};
use crate::resolver::{resolve_tool, ToolSpec};
use std::path::{Path, PathBuf};

pub const COFFEELINT_ERROR: u32 = 1;
pub const COFFEELINT_WARNING: u32 = 2;

const CODES: &[CodeSpec] = &[
    CodeSpec {
        code: COFFEELINT_ERROR,
        severity: Severity::Error,
        label: "CoffeeLint Error",
    },
    CodeSpec {
        code: COFFEELINT_WARNING,
        severity: Severity::Warning,
        label: "CoffeeLint Warning",
    },
];

const TOOL: ToolSpec = ToolSpec {
    name: "coffeelint",
    install: "npm install coffeelint -g",
};

pub struct CoffeeLint {
    policy: ExitPolicy,
    results: ResultCache,
}

impl CoffeeLint {
    pub fn new() -> Self {
        CoffeeLint {
            policy: ExitPolicy::FailRun,
            results: ResultCache::new(),
        }
    }

    /// Fixed option string, plus `--file <config>` when an options file is
    /// configured. The configured path must exist.
    fn options(&self, ctx: &LintContext) -> Result<Vec<String>> {
        let mut opts = vec!["--csv".to_string()];
        if let Some(cfg) = ctx
            .tool_override(TOOL.name)
            .and_then(|o| o.config.as_deref())
        {
            let resolved = ctx.resolve_against_root(cfg);
            if !resolved.exists() {
                return Err(LintError::Configuration(format!(
                    "Unable to find the options file set by 'tools.coffeelint.config' \
                     ('{}'). Make sure the path is correct.",
                    resolved.display()
                )));
            }
            opts.push("--file".to_string());
            opts.push(resolved.to_string_lossy().to_string());
        }
        Ok(opts)
    }
}

impl Default for CoffeeLint {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for CoffeeLint {
    fn name(&self) -> &'static str {
        TOOL.name
    }

    fn codes(&self) -> &'static [CodeSpec] {
        CODES
    }

    fn wants(&self, path: &Path) -> bool {
        has_suffix(path, ".coffee")
    }

    fn prepare(&mut self, ctx: &LintContext, files: &[PathBuf]) -> Result<()> {
        let bin = resolve_tool(ctx, &TOOL)?;
        let options = self.options(ctx)?;
        let invocations = files
            .iter()
            .map(|file| {
                // coffeelint takes the file before its options.
                let mut args = vec![file.to_string_lossy().to_string()];
                args.extend(options.iter().cloned());
                ToolInvocation {
                    bin: bin.clone(),
                    args,
                    file: file.clone(),
                }
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

        if self.policy == ExitPolicy::FailRun && !res.exited_cleanly() {
            return Err(LintError::ToolExecution {
                tool: TOOL.name,
                file: file.to_string_lossy().to_string(),
                stdout: res.stdout,
                stderr: res.stderr,
            });
        }

        for record in res.stdout.lines() {
            if record.is_empty() {
                continue;
            }
            // path,line,severityWord,message — message keeps its commas.
            let mut fields = record.splitn(4, ',');
            let _path = fields.next();
            let (Some(line_field), Some(sev_word), Some(message)) =
                (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };
            let Ok(line) = line_field.trim().parse::<u32>() else {
                continue;
            };
            let code = if sev_word == "error" {
                COFFEELINT_ERROR
            } else {
                COFFEELINT_WARNING
            };
            out.raise(file, Some(line), None, code, message);
        }
        Ok(())
    }
}
