pub(super) mod bot;
pub(super) mod chat;
pub(super) mod file;
pub(super) mod meta;

use super::{CommandError, Context, NodeId};
use crate::core::config::expand_home;
use std::path::PathBuf;

/// Longest message body the Cloudbot accepts in a single chat line.
pub const MAX_MESSAGE_BYTES: usize = 380;

pub(super) fn usage_error(ctx: &Context<'_>, node: NodeId) -> CommandError {
    CommandError::Usage {
        command: ctx.tree.path(node),
        usage: ctx.tree.node(node).spec.usage,
    }
}

/// Path of the YAML commands file, from the nearest scope defining `file`.
pub(super) fn commands_file(ctx: &Context<'_>, node: NodeId) -> Result<PathBuf, CommandError> {
    let raw = ctx.tree.resolve(node, "file")?;
    Ok(expand_home(raw))
}

/// Cloudbot command names are addressed with a leading `!`.
pub(super) fn bang_prefixed(name: &str) -> String {
    if name.starts_with('!') {
        name.to_string()
    } else {
        format!("!{name}")
    }
}
