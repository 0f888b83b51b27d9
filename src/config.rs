//! Configuration discovery and effective settings resolution.
//!
//! Lintmux reads `lintmux.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags.
//! Sections:
//! - `[tools.<name>]`: `prefix`, `bin`, `config` overrides for external
//!   tool resolution.
//! - `[checkers.<name>]`: `disabled_codes` to switch off individual
//!   diagnostic codes.
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Per-tool resolution overrides under `[tools.<name>]`.
pub struct ToolOverride {
    /// Directory holding the tool binary; disables PATH search.
    pub prefix: Option<String>,
    /// Binary name, defaulting to the tool's canonical name.
    pub bin: Option<String>,
    /// Tool-specific options file, resolved against the repo root.
    pub config: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Per-checker settings under `[checkers.<name>]`.
pub struct CheckerCfg {
    #[serde(default)]
    pub disabled_codes: Vec<u32>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `lintmux.toml|yaml`.
pub struct Config {
    pub output: Option<String>,
    #[serde(default)]
    pub tools: HashMap<String, ToolOverride>,
    #[serde(default)]
    pub checkers: HashMap<String, CheckerCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub output: String,
    pub config: Config,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `lintmux.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("lintmux.toml").exists()
            || cur.join("lintmux.yaml").exists()
            || cur.join("lintmux.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `Config` from `lintmux.toml` or `lintmux.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<Config> {
    let toml_path = root.join("lintmux.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: Config = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["lintmux.yaml", "lintmux.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: Config = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli_repo_root: Option<&str>, cli_output: Option<&str>) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root).unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or_else(|| cfg.output.clone())
        .unwrap_or_else(|| "human".to_string());

    Effective {
        repo_root,
        output,
        config: cfg,
    }
}
