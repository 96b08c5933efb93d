//! `twitch` is a command-line helper for running a Twitch Streamlabs Cloudbot.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`commands`] owns the command tree, argument dispatch, hierarchical
//!   configuration lookup, and the handlers that turn bot maintenance into
//!   `!addcommand`/`!editcommand`/`!rmcommand` chat lines.
//! - [`core`] holds configuration loading and the collaborator traits for the
//!   external programs (chat sender, YAML query tool, editor, git).
//! - [`utils`] provides the process-backed collaborator implementations.
//!
//! The binary (`src/main.rs`) routes through [`crate::cli::main`], which parses
//! global flags, loads configuration, and dispatches one command.

pub mod cli;
pub mod commands;
pub mod core;
pub mod utils;
