//! Command tree, dispatch, and the Cloudbot command handlers.
//!
//! [`registry::build_tree`] assembles the static command topology, and
//! [`dispatch`] walks it with the argument vector to find and run exactly one
//! handler. Handlers compose by calling each other directly rather than
//! re-entering the router.

mod dispatch;
mod error;
mod handlers;
pub mod registry;
mod scope;
pub mod tree;

pub use dispatch::{dispatch, resolve_command, Resolved};
pub use error::CommandError;
pub use handlers::MAX_MESSAGE_BYTES;
pub use registry::build_tree;
pub use tree::{CommandSpec, CommandTree, Handler, NodeId};

use crate::core::collaborators::Collaborators;
use crate::core::config::Config;
use std::io::{BufRead, Write};
use std::path::Path;

pub type CommandResult = Result<(), CommandError>;

/// Everything a handler may touch while it runs.
pub struct Context<'a> {
    pub tree: &'a CommandTree,
    pub config: &'a Config,
    pub config_path: &'a Path,
    pub collaborators: &'a Collaborators,
    pub input: &'a mut dyn BufRead,
    pub output: &'a mut dyn Write,
}
