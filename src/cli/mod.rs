//! Command-line interface parsing and handling
//!
//! clap handles the global flags; everything from the first positional token
//! on is handed to the command router untouched.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use crate::commands::{
    build_tree, dispatch, resolve_command, CommandError, CommandTree, Context, NodeId,
};
use crate::core::collaborators::Collaborators;
use crate::core::config::Config;
use crate::utils::chat::{ChatProgram, DEFAULT_CHAT_PROGRAM};
use crate::utils::editor::ExternalEditor;
use crate::utils::git::{GitCli, DEFAULT_GIT_PROGRAM};
use crate::utils::yq::{YqProgram, DEFAULT_YQ_PROGRAM};

#[derive(Parser)]
#[command(name = "twitch")]
#[command(version)]
#[command(about = "Collection of Twitch helper commands")]
#[command(
    long_about = "Helpers for running a Twitch Streamlabs Cloudbot. Bot commands are kept in a \
YAML file (configured as `file`), pushed to chat as !addcommand/!editcommand/!rmcommand \
messages through an external `chat` program, and committed with git.\n\n\
Commands:\n\
  chat [text...]                       Send text to chat (reads lines from stdin if empty)\n\
  bot commands add <name>              Add a command, then sync its body from the file\n\
  bot commands edit <name> <msg...>    Replace a command's body\n\
  bot commands remove <name>           Remove a command\n\
  bot commands sync <name>             Push a command's body from the file\n\
  bot commands list                    List command names in the file\n\
  bot commands file [edit [commit]]    Print or edit the commands file\n\
  bot commands commit [message...]     Commit and push the commands file\n\
  conf [path | edit | set <k> <v>]     Inspect or change configuration\n\
  help [command...]                    Show help for a command\n\n\
Environment Variables:\n\
  RUST_LOG          Log filter (overrides -v)\n\
  VISUAL, EDITOR    Editor used when `editor` is not configured"
)]
pub struct Args {
    /// Configuration file to use instead of the per-user default
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log more (-v for info, -vv for debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command path and its arguments, e.g. `bot commands sync project`
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

pub fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Load configuration, build the command tree, and dispatch one command.
pub fn run(args: Args) -> Result<(), CommandError> {
    let config_path = match args.config {
        Some(path) => path,
        None => Config::get_config_path()?,
    };
    let config = Config::load_from_path(&config_path)?;
    let tree = build_tree(&config)?;
    // resolution errors are reported by dispatch below
    let node = resolve_command(&tree, &args.command).map_or(tree.root(), |resolved| resolved.node);
    let collaborators = process_collaborators(&tree, node);

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    let mut ctx = Context {
        tree: &tree,
        config: &config,
        config_path: &config_path,
        collaborators: &collaborators,
        input: &mut input,
        output: &mut output,
    };
    let result = dispatch(&mut ctx, &args.command);
    output.flush()?;
    result
}

/// Collaborators backed by external programs.
///
/// The `chat`, `yq`, `git` and `editor` keys resolve from `node` up to the
/// root, like every other configuration value.
pub fn process_collaborators(tree: &CommandTree, node: NodeId) -> Collaborators {
    let program = |key: &str, default: &str| {
        tree.resolve_optional(node, key)
            .unwrap_or(default)
            .trim()
            .to_string()
    };

    Collaborators {
        chat: Box::new(ChatProgram::new(program("chat", DEFAULT_CHAT_PROGRAM))),
        yaml: Box::new(YqProgram::new(program("yq", DEFAULT_YQ_PROGRAM))),
        editor: Box::new(ExternalEditor::from_config_or_env(
            tree.resolve_optional(node, "editor"),
        )),
        vcs: Box::new(GitCli::new(program("git", DEFAULT_GIT_PROGRAM))),
    }
}

#[cfg(test)]
mod tests;
