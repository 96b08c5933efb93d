//! Cloudbot command maintenance: each operation becomes a `!…command` chat line.

use super::chat::handle_chat;
use super::{bang_prefixed, commands_file, usage_error, MAX_MESSAGE_BYTES};
use crate::commands::{CommandError, CommandResult, Context, NodeId};
use std::io::Write;
use std::slice;
use tracing::{debug, info};

/// Body given to a freshly added command until `sync` replaces it.
const PLACEHOLDER_BODY: &str = "some";

pub(crate) fn handle_add(ctx: &mut Context<'_>, node: NodeId, args: &[String]) -> CommandResult {
    let Some(name) = args.first() else {
        return Err(usage_error(ctx, node));
    };
    if args.len() > 1 {
        debug!(ignored = ?&args[1..], "add takes its body from the commands file");
    }

    handle_chat(
        ctx,
        node,
        &[
            "!addcommand".to_string(),
            name.clone(),
            PLACEHOLDER_BODY.to_string(),
        ],
    )?;
    handle_sync(ctx, node, slice::from_ref(name))
}

pub(crate) fn handle_remove(ctx: &mut Context<'_>, node: NodeId, args: &[String]) -> CommandResult {
    let Some(name) = args.first() else {
        return Err(usage_error(ctx, node));
    };
    handle_chat(ctx, node, &["!rmcommand".to_string(), bang_prefixed(name)])
}

pub(crate) fn handle_edit(ctx: &mut Context<'_>, node: NodeId, args: &[String]) -> CommandResult {
    let Some((name, body)) = args.split_first() else {
        return Err(usage_error(ctx, node));
    };
    handle_chat(
        ctx,
        node,
        &["!editcommand".to_string(), bang_prefixed(name), body.join(" ")],
    )
}

/// Push the body stored under `key` in the commands file to the bot.
pub(crate) fn handle_sync(ctx: &mut Context<'_>, node: NodeId, args: &[String]) -> CommandResult {
    let [key] = args else {
        return Err(usage_error(ctx, node));
    };

    let file = commands_file(ctx, node)?;
    let body = ctx
        .collaborators
        .yaml
        .evaluate(&format!(".{key}"), &file)?;
    if body.len() > MAX_MESSAGE_BYTES {
        return Err(CommandError::MessageTooLong {
            len: body.len(),
            limit: MAX_MESSAGE_BYTES,
        });
    }
    info!(bytes = body.len(), "message body length");

    handle_edit(ctx, node, &[key.clone(), body])
}

pub(crate) fn handle_list(ctx: &mut Context<'_>, node: NodeId, _args: &[String]) -> CommandResult {
    let file = commands_file(ctx, node)?;
    let keys = ctx.collaborators.yaml.evaluate("keys", &file)?;
    writeln!(ctx.output, "{}", format_command_list(&keys))?;
    Ok(())
}

/// Turn `yq keys` output (`- name` per line) into `!a !b !c`.
///
/// Every literal `"- "` is removed, including inside key names.
fn format_command_list(keys: &str) -> String {
    let mut lines: Vec<&str> = keys.lines().collect();
    lines.sort_unstable();
    format!("!{}", lines.join(" !").replace("- ", ""))
}
