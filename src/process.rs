//! Bounded-concurrency subprocess execution for external tools.
//!
//! The dispatch phase builds one [`ToolInvocation`] per file and drains
//! them all through a fixed-size worker pool before returning, so every
//! [`ToolResult`] is materialized and cached before any collection reads
//! it. A spawn failure is recorded against its own file only; sibling
//! invocations keep running.

use crate::error::{LintError, Result};
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Command;

/// Hard ceiling on simultaneously running external tool processes.
pub const MAX_CONCURRENT_TOOLS: usize = 8;

#[derive(Clone, Debug)]
/// One external tool run: binary, full argument vector, target file.
pub struct ToolInvocation {
    pub bin: PathBuf,
    pub args: Vec<String>,
    pub file: PathBuf,
}

#[derive(Clone, Debug)]
/// Captured outcome of one tool run.
pub struct ToolResult {
    /// `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolResult {
    pub fn exited_cleanly(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Per-checker result cache, keyed by target file path. Populated entirely
/// during dispatch, consumed during collection.
pub type ResultCache = HashMap<PathBuf, Result<ToolResult>>;

/// Run every invocation to completion on a pool capped at
/// [`MAX_CONCURRENT_TOOLS`] workers and return the filled cache.
///
/// Invocations beyond the ceiling queue until a worker frees up. Blocks
/// until the whole set has drained.
pub fn run_all(tool: &'static str, invocations: Vec<ToolInvocation>) -> ResultCache {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(MAX_CONCURRENT_TOOLS)
        .build()
        .expect("failed to build tool worker pool");
    pool.install(|| {
        invocations
            .into_par_iter()
            .map(|inv| {
                let res = run_one(tool, &inv);
                (inv.file, res)
            })
            .collect()
    })
}

fn run_one(tool: &'static str, inv: &ToolInvocation) -> Result<ToolResult> {
    match Command::new(&inv.bin).args(&inv.args).output() {
        Ok(out) => Ok(ToolResult {
            exit_code: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).to_string(),
        }),
        Err(e) => Err(LintError::ToolExecution {
            tool,
            file: inv.file.to_string_lossy().to_string(),
            stdout: String::new(),
            stderr: format!("failed to launch '{}': {}", inv.bin.display(), e),
        }),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::tempdir;

    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_all_results_cached_before_return() {
        let dir = tempdir().unwrap();
        let bin = write_script(dir.path(), "echoer", r#"printf 'out:%s' "$1""#);
        // More files than pool slots to exercise queueing.
        let invocations: Vec<ToolInvocation> = (0..20)
            .map(|i| ToolInvocation {
                bin: bin.clone(),
                args: vec![format!("f{}.json", i)],
                file: PathBuf::from(format!("f{}.json", i)),
            })
            .collect();
        let cache = run_all("echoer", invocations);
        assert_eq!(cache.len(), 20);
        for i in 0..20 {
            let res = cache
                .get(Path::new(&format!("f{}.json", i)))
                .unwrap()
                .as_ref()
                .unwrap();
            assert!(res.exited_cleanly());
            assert_eq!(res.stdout, format!("out:f{}.json", i));
        }
    }

    #[test]
    fn test_exit_code_and_streams_captured() {
        let dir = tempdir().unwrap();
        let bin = write_script(dir.path(), "whiner", "echo problem >&2; exit 3");
        let cache = run_all(
            "whiner",
            vec![ToolInvocation {
                bin,
                args: vec![],
                file: PathBuf::from("x"),
            }],
        );
        let res = cache.get(Path::new("x")).unwrap().as_ref().unwrap();
        assert_eq!(res.exit_code, Some(3));
        assert_eq!(res.stderr.trim(), "problem");
    }

    #[test]
    fn test_spawn_failure_is_per_file() {
        let dir = tempdir().unwrap();
        let good = write_script(dir.path(), "good", "exit 0");
        let cache = run_all(
            "good",
            vec![
                ToolInvocation {
                    bin: dir.path().join("vanished"),
                    args: vec![],
                    file: PathBuf::from("a"),
                },
                ToolInvocation {
                    bin: good,
                    args: vec![],
                    file: PathBuf::from("b"),
                },
            ],
        );
        assert!(matches!(
            cache.get(Path::new("a")).unwrap(),
            Err(LintError::ToolExecution { .. })
        ));
        assert!(cache.get(Path::new("b")).unwrap().is_ok());
    }

    #[test]
    fn test_concurrency_never_exceeds_ceiling() {
        let dir = tempdir().unwrap();
        // Each run appends a "+" on start and a "-" on exit; the running
        // maximum of (+1/-1) over the log is the peak concurrency.
        let log = dir.path().join("log");
        let bin = write_script(
            dir.path(),
            "tracer",
            &format!(
                "echo + >> {log}; sleep 0.05; echo - >> {log}",
                log = log.display()
            ),
        );
        let invocations: Vec<ToolInvocation> = (0..24)
            .map(|i| ToolInvocation {
                bin: bin.clone(),
                args: vec![],
                file: PathBuf::from(format!("f{}", i)),
            })
            .collect();
        let cache = run_all("tracer", invocations);
        assert_eq!(cache.len(), 24);

        let mut active = 0i32;
        let mut peak = 0i32;
        for line in fs::read_to_string(&log).unwrap().lines() {
            match line {
                "+" => {
                    active += 1;
                    peak = peak.max(active);
                }
                "-" => active -= 1,
                _ => {}
            }
        }
        assert!(peak <= MAX_CONCURRENT_TOOLS as i32, "peak was {}", peak);
        assert!(peak >= 1);
    }
}
