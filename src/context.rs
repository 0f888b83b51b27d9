//! Per-run context injected into checkers.
//!
//! Bundles the repository root and loaded configuration so checkers never
//! reach for ambient state: file access, binary detection, tool overrides,
//! and code enablement all go through here.

use crate::config::{Config, ToolOverride};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Bytes inspected by the binary-file heuristic.
const BINARY_SNIFF_LEN: usize = 8000;

pub struct LintContext {
    pub repo_root: PathBuf,
    config: Config,
}

impl LintContext {
    pub fn new(repo_root: PathBuf, config: Config) -> Self {
        LintContext { repo_root, config }
    }

    /// Configured overrides for an external tool, if any.
    pub fn tool_override(&self, tool: &str) -> Option<&ToolOverride> {
        self.config.tools.get(tool)
    }

    /// Resolve a config-supplied relative path against the repo root.
    pub fn resolve_against_root(&self, rel: &str) -> PathBuf {
        let p = Path::new(rel);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.repo_root.join(p)
        }
    }

    pub fn file_contents(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    /// Heuristic binary detection: a NUL byte in the leading chunk.
    pub fn is_binary_file(&self, path: &Path) -> bool {
        match self.file_contents(path) {
            Ok(data) => data.iter().take(BINARY_SNIFF_LEN).any(|b| *b == 0),
            Err(_) => false,
        }
    }

    /// Whether a checker's diagnostic code is enabled for this run.
    ///
    /// All codes are enabled unless listed in
    /// `[checkers.<name>] disabled_codes`.
    pub fn is_code_enabled(&self, checker: &str, code: u32) -> bool {
        !self
            .config
            .checkers
            .get(checker)
            .map(|c| c.disabled_codes.contains(&code))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckerCfg;
    use tempfile::tempdir;

    #[test]
    fn test_binary_detection() {
        let dir = tempdir().unwrap();
        let text = dir.path().join("a.txt");
        fs::write(&text, "plain text\n").unwrap();
        let bin = dir.path().join("a.bin");
        fs::write(&bin, b"\x00\x01\x02rest").unwrap();

        let ctx = LintContext::new(dir.path().to_path_buf(), Config::default());
        assert!(!ctx.is_binary_file(&text));
        assert!(ctx.is_binary_file(&bin));
        // Missing files are not "binary"; readers handle them as empty.
        assert!(!ctx.is_binary_file(&dir.path().join("nope")));
    }

    #[test]
    fn test_code_enablement() {
        let mut cfg = Config::default();
        cfg.checkers.insert(
            "mocha".to_string(),
            CheckerCfg {
                disabled_codes: vec![2],
            },
        );
        let ctx = LintContext::new(PathBuf::from("."), cfg);
        assert!(ctx.is_code_enabled("mocha", 0));
        assert!(!ctx.is_code_enabled("mocha", 2));
        assert!(ctx.is_code_enabled("coffeelint", 1));
    }

    #[test]
    fn test_resolve_against_root() {
        let ctx = LintContext::new(PathBuf::from("/repo"), Config::default());
        assert_eq!(
            ctx.resolve_against_root("conf/x.json"),
            PathBuf::from("/repo/conf/x.json")
        );
        assert_eq!(
            ctx.resolve_against_root("/abs/x.json"),
            PathBuf::from("/abs/x.json")
        );
    }
}
