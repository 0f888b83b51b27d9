//! External tool binary resolution.
//!
//! Resolution order:
//! 1. `tools.<name>.prefix` configured: join it with the binary name
//!    (override or canonical) and require the file to exist there. No
//!    PATH fallback in this branch.
//! 2. Otherwise search the system executable path for the binary name
//!    (`where` on Windows, `which` elsewhere).
//!
//! Resolution runs at most once per checker per run: checkers call this
//! from their dispatch phase and cache the result, never per file.

use crate::context::LintContext;
use crate::error::{LintError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Clone, Copy, Debug)]
/// Identity of an external tool: canonical binary name (doubles as the
/// config key) and the install command suggested on resolution failure.
pub struct ToolSpec {
    pub name: &'static str,
    pub install: &'static str,
}

/// Produce a validated executable path for `spec`.
pub fn resolve_tool(ctx: &LintContext, spec: &ToolSpec) -> Result<PathBuf> {
    let ov = ctx.tool_override(spec.name);
    let bin = ov
        .and_then(|o| o.bin.clone())
        .unwrap_or_else(|| spec.name.to_string());

    if let Some(prefix) = ov.and_then(|o| o.prefix.clone()) {
        let joined = Path::new(&prefix).join(&bin);
        if !joined.exists() {
            return Err(LintError::Configuration(format!(
                "Unable to find the {} binary at '{}'. Make sure 'tools.{}.prefix' \
                 and 'tools.{}.bin' are set correctly, or remove them to use a \
                 copy installed on PATH.",
                spec.name,
                joined.display(),
                spec.name,
                spec.name,
            )));
        }
        return Ok(joined);
    }

    path_search(&bin).ok_or(LintError::ToolNotInstalled {
        tool: spec.name,
        install: spec.install,
    })
}

/// Look up `bin` on the executable search path, platform-appropriately.
fn path_search(bin: &str) -> Option<PathBuf> {
    let lookup = if cfg!(windows) { "where" } else { "which" };
    let out = Command::new(lookup).arg(bin).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let first = String::from_utf8_lossy(&out.stdout)
        .lines()
        .next()
        .map(|l| l.trim().to_string())
        .unwrap_or_default();
    if first.is_empty() {
        None
    } else {
        Some(PathBuf::from(first))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ToolOverride};
    use std::fs;
    use tempfile::tempdir;

    fn ctx_with_override(root: &Path, tool: &str, ov: ToolOverride) -> LintContext {
        let mut cfg = Config::default();
        cfg.tools.insert(tool.to_string(), ov);
        LintContext::new(root.to_path_buf(), cfg)
    }

    #[test]
    fn test_prefix_and_bin_pointing_nowhere_is_config_error() {
        let dir = tempdir().unwrap();
        let ctx = ctx_with_override(
            dir.path(),
            "coffeelint",
            ToolOverride {
                prefix: Some(dir.path().join("missing").to_string_lossy().to_string()),
                bin: Some("coffeelint".to_string()),
                config: None,
            },
        );
        let spec = ToolSpec {
            name: "coffeelint",
            install: "npm install coffeelint -g",
        };
        // Must fail as configuration error and never fall back to PATH search,
        // even if a same-named binary happens to be installed.
        match resolve_tool(&ctx, &spec) {
            Err(LintError::Configuration(msg)) => {
                assert!(msg.contains("tools.coffeelint.prefix"));
            }
            other => panic!("expected Configuration error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_prefix_with_existing_binary_resolves() {
        let dir = tempdir().unwrap();
        let bin = dir.path().join("fakelint");
        fs::write(&bin, "#!/bin/sh\nexit 0\n").unwrap();
        let ctx = ctx_with_override(
            dir.path(),
            "fakelint",
            ToolOverride {
                prefix: Some(dir.path().to_string_lossy().to_string()),
                bin: None,
                config: None,
            },
        );
        let spec = ToolSpec {
            name: "fakelint",
            install: "npm install fakelint -g",
        };
        assert_eq!(resolve_tool(&ctx, &spec).unwrap(), bin);
    }

    #[cfg(unix)]
    #[test]
    fn test_path_search_finds_sh() {
        let dir = tempdir().unwrap();
        let ctx = LintContext::new(dir.path().to_path_buf(), Config::default());
        let spec = ToolSpec {
            name: "sh",
            install: "already part of the base system",
        };
        let path = resolve_tool(&ctx, &spec).unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("sh"));
    }

    #[test]
    fn test_unresolvable_tool_is_not_installed() {
        let dir = tempdir().unwrap();
        let ctx = LintContext::new(dir.path().to_path_buf(), Config::default());
        let spec = ToolSpec {
            name: "definitely-not-a-real-linter-binary",
            install: "npm install definitely-not-a-real-linter-binary -g",
        };
        match resolve_tool(&ctx, &spec) {
            Err(LintError::ToolNotInstalled { tool, .. }) => {
                assert_eq!(tool, "definitely-not-a-real-linter-binary");
            }
            other => panic!("expected ToolNotInstalled, got {:?}", other.err()),
        }
    }
}
