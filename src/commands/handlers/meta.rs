//! Commands about the tool itself: help, version, and configuration.

use super::usage_error;
use crate::commands::{CommandError, CommandResult, Context, NodeId};
use crate::core::config::{path_display, Config};
use std::io::Write;

/// Help for the command enclosing this `help` node, or for a descendant named by `args`.
pub(crate) fn handle_help(ctx: &mut Context<'_>, node: NodeId, args: &[String]) -> CommandResult {
    let tree = ctx.tree;
    let mut target = tree.node(node).parent().unwrap_or(node);
    for token in args {
        let parent = target;
        target = tree
            .find_child(parent, token)?
            .ok_or_else(|| CommandError::UnknownCommand {
                command: tree.path(parent),
                token: token.clone(),
            })?;
    }
    write_help(ctx, target)
}

pub(crate) fn write_help(ctx: &mut Context<'_>, node: NodeId) -> CommandResult {
    let tree = ctx.tree;
    let spec = tree.node(node).spec;
    let path = tree.path(node);
    let out = &mut *ctx.output;

    writeln!(out, "{path} - {}", spec.summary)?;
    writeln!(out)?;
    if spec.usage.is_empty() {
        writeln!(out, "usage: {path}")?;
    } else {
        writeln!(out, "usage: {path} {}", spec.usage)?;
    }
    if !spec.aliases.is_empty() {
        writeln!(out, "aliases: {}", spec.aliases.join(", "))?;
    }
    if !spec.params.is_empty() {
        writeln!(out, "parameters: {}", spec.params.join(", "))?;
    }

    let children: Vec<(String, &str)> = tree
        .node(node)
        .children()
        .iter()
        .map(|&child| {
            let child = tree.node(child).spec;
            let label = if child.aliases.is_empty() {
                child.name.to_string()
            } else {
                format!("{} ({})", child.name, child.aliases.join(", "))
            };
            (label, child.summary)
        })
        .collect();
    if !children.is_empty() {
        writeln!(out)?;
        writeln!(out, "commands:")?;
        let width = children.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        for (label, summary) in &children {
            writeln!(out, "  {label:<width$}  {summary}")?;
        }
    }

    if node == tree.root() {
        let shortcuts: Vec<(&str, String)> = tree
            .shortcuts()
            .map(|(name, expansion)| (name, expansion.join(" ")))
            .collect();
        if !shortcuts.is_empty() {
            writeln!(out)?;
            writeln!(out, "shortcuts:")?;
            let width = shortcuts.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
            for (name, expansion) in &shortcuts {
                writeln!(out, "  {name:<width$}  {expansion}")?;
            }
        }
    }
    Ok(())
}

pub(crate) fn handle_version(ctx: &mut Context<'_>, _node: NodeId, _args: &[String]) -> CommandResult {
    let name = ctx.tree.node(ctx.tree.root()).name();
    writeln!(ctx.output, "{name} v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(
        ctx.output,
        "build: {} ({})",
        option_env!("VERGEN_GIT_DESCRIBE").unwrap_or("unknown"),
        option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown date"),
    )?;
    writeln!(ctx.output, "license: {}", env!("CARGO_PKG_LICENSE"))?;
    Ok(())
}

pub(crate) fn handle_conf(ctx: &mut Context<'_>, node: NodeId, args: &[String]) -> CommandResult {
    match args {
        [] => ctx.config.write_all(ctx.output)?,
        [sub] if sub == "path" => {
            writeln!(ctx.output, "{}", ctx.config_path.display())?;
        }
        [sub] if sub == "edit" => {
            ctx.collaborators.editor.edit(ctx.config_path)?;
        }
        [sub, key, value @ ..] if sub == "set" && !value.is_empty() => {
            // re-read so edits made since startup are not lost
            let mut config = Config::load_from_path(ctx.config_path)?;
            let value = value.join(" ");
            config.set_root(key.clone(), value.clone());
            config.save_to_path(ctx.config_path)?;
            writeln!(
                ctx.output,
                "✅ Set {key} to: {value} ({})",
                path_display(ctx.config_path)
            )?;
        }
        _ => return Err(usage_error(ctx, node)),
    }
    Ok(())
}
