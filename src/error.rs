//! User-facing error taxonomy for lint runs.
//!
//! Malformed tool output lines are not errors at this level; parsers skip
//! them and keep going. Everything here aborts the run with a message.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintError {
    /// A configuration override is set but wrong; the user must fix it.
    #[error("{0}")]
    Configuration(String),

    /// Tool binary resolution failed on the search path.
    #[error(
        "{tool} does not appear to be installed on this system. Install it \
         (e.g. with '{install}') or set 'tools.{tool}.prefix' / \
         'tools.{tool}.bin' in lintmux.toml to point at where it resides."
    )]
    ToolNotInstalled {
        tool: &'static str,
        install: &'static str,
    },

    /// A tool invocation exited in a way its checker defines as failure.
    #[error("{tool} failed on {file}.\nstdout:\n{stdout}\nstderr:\n{stderr}")]
    ToolExecution {
        tool: &'static str,
        file: String,
        stdout: String,
        stderr: String,
    },
}

pub type Result<T> = std::result::Result<T, LintError>;
