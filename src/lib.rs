//! Lintmux core library.
//!
//! A lint-orchestration adapter layer: runs quality checkers over source
//! files and reports positioned diagnostics through a uniform model.
//! Checkers either dispatch an external tool per file on a bounded worker
//! pool and normalize its output, or scan file text in-process; both share
//! the diagnostic model and severity taxonomy.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `context`: Per-run context injected into checkers.
//! - `models`: Diagnostic, severity, and lint result types.
//! - `resolver`: External tool binary resolution.
//! - `process`: Bounded-concurrency subprocess execution and result cache.
//! - `checkers`: The checker trait and its implementations.
//! - `lint`: The orchestrator driving dispatch and collection phases.
//! - `output`: Human/JSON printers for lint results.

pub mod checkers;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod lint;
pub mod models;
pub mod output;
pub mod process;
pub mod resolver;
