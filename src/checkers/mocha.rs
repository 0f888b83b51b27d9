//! In-process scanner for Mocha specification problems.
//!
//! No subprocess: each physical line is matched against an ordered rule
//! list, first match wins, at most one diagnostic per line (column 0).
//! Binary and unreadable files produce zero diagnostics.
//!
//! The assertion-chain rules are heuristics over chai-style chains. The
//! non-terminal word list deliberately leaves out `at` because
//! `Array.prototype.at` is an ordinary collection lookup that legitimately
//! ends lines; `.has` only warns rather than errors for the same reason
//! (`Map`/`Set` lookups read fine, asserting through it does not).

use crate::checkers::{has_suffix, Checker};
use crate::context::LintContext;
use crate::error::Result;
use crate::models::{CodeSpec, Diagnostics, Severity};
use regex::Regex;
use std::path::{Path, PathBuf};

pub const ONLY_DIRECTIVE: u32 = 0;
pub const INCOMPLETE_CHAIN: u32 = 1;
pub const AMBIGUOUS_HAS: u32 = 2;

const CODES: &[CodeSpec] = &[
    CodeSpec {
        code: ONLY_DIRECTIVE,
        severity: Severity::Error,
        label: "\"only\" directive left in Mocha specification",
    },
    CodeSpec {
        code: INCOMPLETE_CHAIN,
        severity: Severity::Error,
        label: "Incomplete assertion chain",
    },
    CodeSpec {
        code: AMBIGUOUS_HAS,
        severity: Severity::Warning,
        label: "Ambiguous 'has' in assertion chain",
    },
];

/// One line-level rule: trigger pattern, code to raise, message.
struct PatternRule {
    trigger: Regex,
    code: u32,
    message: &'static str,
}

pub struct MochaSpec {
    /// Evaluated top to bottom per line; order matters. The exclusivity
    /// rule must precede the chaining rules since both can match the same
    /// line.
    rules: Vec<PatternRule>,
}

impl MochaSpec {
    pub fn new() -> Self {
        let rules = vec![
            PatternRule {
                trigger: Regex::new(r"^\s*(it|describe)\.only").expect("only pattern"),
                code: ONLY_DIRECTIVE,
                message: "This directive will cause other tests to be skipped",
            },
            PatternRule {
                trigger: Regex::new(
                    r"expect\(.*\.(to|be|been|is|that|which|and|have|with|of|not|same)\s*;?\s*$",
                )
                .expect("chain pattern"),
                code: INCOMPLETE_CHAIN,
                message: "This assertion chain is incomplete and always succeeds",
            },
            PatternRule {
                // `.has` as a chain link after the call, not inside the
                // expect subject (where it is a plain Map/Set lookup).
                trigger: Regex::new(r"expect\(.*\)\.([\w$]+\.)*has\b").expect("has pattern"),
                code: AMBIGUOUS_HAS,
                message: "'has' is not an assertion word; use 'have' unless this is a Map/Set lookup",
            },
        ];
        MochaSpec { rules }
    }
}

impl Default for MochaSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl Checker for MochaSpec {
    fn name(&self) -> &'static str {
        "mocha"
    }

    fn codes(&self) -> &'static [CodeSpec] {
        CODES
    }

    fn wants(&self, path: &Path) -> bool {
        has_suffix(path, ".spec.js") || has_suffix(path, ".test.js")
    }

    fn prepare(&mut self, _ctx: &LintContext, _files: &[PathBuf]) -> Result<()> {
        // Pure scanner; all work happens during collection.
        Ok(())
    }

    fn lint_path(&mut self, ctx: &LintContext, file: &Path, out: &mut Diagnostics) -> Result<()> {
        if ctx.is_binary_file(file) {
            return Ok(());
        }
        let Ok(data) = ctx.file_contents(file) else {
            // Unreadable files produce zero diagnostics, not an error.
            return Ok(());
        };
        let text = String::from_utf8_lossy(&data);

        for (idx, line) in text.lines().enumerate() {
            for rule in &self.rules {
                if !ctx.is_code_enabled(self.name(), rule.code) {
                    continue;
                }
                if rule.trigger.is_match(line) {
                    out.raise(file, Some(idx as u32 + 1), Some(0), rule.code, rule.message);
                    break;
                }
            }
        }
        Ok(())
    }
}
