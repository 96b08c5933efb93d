use crate::commands::{CommandResult, Context, NodeId};
use std::io::BufRead;
use tracing::warn;

/// Send the arguments as one chat line, or read lines from input until EOF.
pub(crate) fn handle_chat(ctx: &mut Context<'_>, _node: NodeId, args: &[String]) -> CommandResult {
    if args.is_empty() {
        return chat_repl(ctx);
    }
    let message = args.join(" ");
    ctx.collaborators.chat.send(&message)?;
    Ok(())
}

fn chat_repl(ctx: &mut Context<'_>) -> CommandResult {
    let mut line = String::new();
    loop {
        line.clear();
        if ctx.input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let message = line.trim_end_matches(['\r', '\n']);
        if message.trim().is_empty() {
            continue;
        }
        // one bad line should not end the session
        if let Err(err) = ctx.collaborators.chat.send(message) {
            warn!(error = %err, "chat message not sent");
        }
    }
}
