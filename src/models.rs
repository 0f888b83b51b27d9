//! Shared data models for diagnostics and lint output.
//!
//! Every checker declares a table of [`CodeSpec`] entries mapping its
//! internal codes to a severity level and a display label. Diagnostics are
//! only ever constructed through [`Diagnostics::raise`], which routes the
//! code through that table; this keeps the mapping total by construction.

use serde::Serialize;
use std::path::Path;

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
/// Severity level attached to a diagnostic.
pub enum Severity {
    Error,
    Warning,
}

#[derive(Clone, Copy, Debug)]
/// One entry of a checker's code table: code, severity, display label.
pub struct CodeSpec {
    pub code: u32,
    pub severity: Severity,
    pub label: &'static str,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
/// A single reported problem with file/line/column/severity/message.
///
/// `line` is 1-based and `None` for file-level diagnostics.
pub struct Diagnostic {
    pub file: String,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub code: u32,
    pub severity: Severity,
    pub label: String,
    pub message: String,
}

/// Ordered, append-only collection of diagnostics for one checker.
///
/// Holds the checker's code table so that `raise` can fill in severity and
/// label. Prior entries are never mutated or removed.
pub struct Diagnostics<'a> {
    codes: &'a [CodeSpec],
    items: Vec<Diagnostic>,
}

impl<'a> Diagnostics<'a> {
    pub fn new(codes: &'a [CodeSpec]) -> Self {
        Diagnostics {
            codes,
            items: Vec::new(),
        }
    }

    /// Construct a diagnostic for `code` and append it.
    ///
    /// The code must appear in the checker's code table; checkers only pass
    /// their own declared constants here.
    pub fn raise(
        &mut self,
        file: &Path,
        line: Option<u32>,
        column: Option<u32>,
        code: u32,
        message: impl Into<String>,
    ) {
        let spec = self
            .codes
            .iter()
            .find(|c| c.code == code)
            .expect("severity code missing from checker code table");
        self.items.push(Diagnostic {
            file: file.to_string_lossy().to_string(),
            line,
            column,
            code,
            severity: spec.severity,
            label: spec.label.to_string(),
            message: message.into(),
        });
    }

    pub fn items(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
/// Aggregated lint summary used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub files: usize,
}

#[derive(Serialize)]
/// Lint results container.
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
    pub summary: Summary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const CODES: &[CodeSpec] = &[
        CodeSpec {
            code: 1,
            severity: Severity::Error,
            label: "Demo Error",
        },
        CodeSpec {
            code: 2,
            severity: Severity::Warning,
            label: "Demo Warning",
        },
    ];

    #[test]
    fn test_raise_maps_code_through_table() {
        let mut d = Diagnostics::new(CODES);
        let f = PathBuf::from("a.json");
        d.raise(&f, Some(3), Some(7), 1, "bad");
        d.raise(&f, Some(5), None, 2, "meh");
        let items = d.into_vec();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].severity, Severity::Error);
        assert_eq!(items[0].label, "Demo Error");
        assert_eq!(items[0].line, Some(3));
        assert_eq!(items[0].column, Some(7));
        assert_eq!(items[1].severity, Severity::Warning);
        assert_eq!(items[1].line, Some(5));
    }

    #[test]
    fn test_order_is_discovery_order() {
        let mut d = Diagnostics::new(CODES);
        let f = PathBuf::from("a.json");
        // Raised out of line order on purpose; the sink must not reorder.
        d.raise(&f, Some(9), None, 1, "later line first");
        d.raise(&f, Some(2), None, 1, "earlier line second");
        let items = d.items();
        assert_eq!(items[0].line, Some(9));
        assert_eq!(items[1].line, Some(2));
    }
}
