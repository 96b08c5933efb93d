use super::handlers::meta::write_help;
use super::tree::{CommandTree, NodeId};
use super::{CommandError, CommandResult, Context};
use std::borrow::Cow;
use tracing::debug;

/// The command an argument vector selects, with the arguments left for it.
#[derive(Debug, PartialEq, Eq)]
pub struct Resolved {
    pub node: NodeId,
    pub args: Vec<String>,
}

/// Walk the tree from the root, descending while tokens name a child.
///
/// The first token that names no child, and every token after it, become the
/// matched command's arguments.
pub fn resolve_command(tree: &CommandTree, argv: &[String]) -> Result<Resolved, CommandError> {
    let argv = expand_shortcut(tree, argv)?;

    let mut current = tree.root();
    let mut consumed = 0;
    for token in argv.iter() {
        match tree.find_child(current, token)? {
            Some(child) => {
                current = child;
                consumed += 1;
            }
            None => break,
        }
    }

    Ok(Resolved {
        node: current,
        args: argv[consumed..].to_vec(),
    })
}

/// Replace a leading shortcut with its expansion. Real root commands win over
/// shortcuts of the same name, and expansions are not expanded again.
fn expand_shortcut<'a>(
    tree: &CommandTree,
    argv: &'a [String],
) -> Result<Cow<'a, [String]>, CommandError> {
    let Some(first) = argv.first() else {
        return Ok(Cow::Borrowed(argv));
    };
    if tree.find_child(tree.root(), first)?.is_some() {
        return Ok(Cow::Borrowed(argv));
    }

    match tree.shortcut(first) {
        Some(expansion) => {
            debug!(shortcut = %first, expansion = ?expansion, "expanding shortcut");
            let mut expanded = expansion.to_vec();
            expanded.extend_from_slice(&argv[1..]);
            Ok(Cow::Owned(expanded))
        }
        None => Ok(Cow::Borrowed(argv)),
    }
}

/// Resolve `argv` and run the selected command's handler.
pub fn dispatch(ctx: &mut Context<'_>, argv: &[String]) -> CommandResult {
    let Resolved { node, args } = resolve_command(ctx.tree, argv)?;
    invoke(ctx, node, &args)
}

fn invoke(ctx: &mut Context<'_>, node: NodeId, args: &[String]) -> CommandResult {
    let tree = ctx.tree;
    let spec = tree.node(node).spec;

    let Some(handler) = spec.handler else {
        return match args.first() {
            Some(token) => Err(CommandError::UnknownCommand {
                command: tree.path(node),
                token: token.clone(),
            }),
            None => write_help(ctx, node),
        };
    };

    if args.len() < spec.min_args {
        return Err(CommandError::Usage {
            command: tree.path(node),
            usage: spec.usage,
        });
    }

    debug!(command = %tree.path(node), ?args, "dispatching");
    handler(ctx, node, args)
}
