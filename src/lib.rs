//! SaltStack state formula generator.
//!
//! Turns a section-based manifest (a `Saltfile` describing packages, files,
//! directories, symlinks, services, commands, scripts, cron entries, and
//! sysctl settings) into generated text artifacts: the primary state
//! document, a README, and two environment-tiered lookup maps imported by
//! the state document.
//!
//! The public API is organised into four layers:
//!
//! - **[`manifest`]** — parse the manifest into an ordered section model
//! - **[`render`]** — template catalog and per-section renderers
//! - **[`config`]** — output layout names (`saltern.toml`)
//! - **[`commands`]** — top-level subcommand orchestration (`generate`,
//!   `check`, `completions`)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod render;
