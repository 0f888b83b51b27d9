//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lintmux",
    version,
    about = "Lintmux — lint orchestration over external tools and scanners",
    long_about = "Lintmux runs quality checkers over source files and reports positioned diagnostics through one model, whether a checker shells out to an external tool or scans file text in-process.\n\nConfiguration precedence: CLI > lintmux.toml > defaults.",
    after_help = "Examples:\n  lintmux lint 'src/**/*.coffee' 'config/*.json'\n  lintmux lint 'test/**/*.spec.js' --output json\n  lintmux checkers",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current lintmux version.")]
    Version,
    /// Run checkers over files
    #[command(
        about = "Run lint checkers",
        long_about = "Expand the given paths/globs against the repository root, route each file to the checkers that want it, and report diagnostics. Errors in the summary drive a non-zero exit.",
        after_help = "Examples:\n  lintmux lint 'src/**/*.coffee'\n  lintmux lint 'test/**/*.spec.js' --output json"
    )]
    Lint {
        #[arg(help = "Files or glob patterns, relative to the repo root", required = true)]
        paths: Vec<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
    /// List checkers and their diagnostic codes
    #[command(
        about = "List checkers",
        long_about = "Print every registered checker with its diagnostic codes, severities, and labels."
    )]
    Checkers,
}
