//! The `twitch` command topology.

use super::handlers::{bot, chat, file, meta};
use super::tree::{CommandSpec, CommandTree};
use super::CommandError;
use crate::core::config::{Config, ROOT_SCOPE};

const ROOT: CommandSpec = CommandSpec {
    name: ROOT_SCOPE,
    usage: "<command>",
    summary: "collection of twitch helper commands",
    ..CommandSpec::EMPTY
};

const HELP: CommandSpec = CommandSpec {
    name: "help",
    usage: "[command...]",
    summary: "display help for the enclosing command",
    handler: Some(meta::handle_help),
    ..CommandSpec::EMPTY
};

const VERSION: CommandSpec = CommandSpec {
    name: "version",
    summary: "print version and build information",
    handler: Some(meta::handle_version),
    ..CommandSpec::EMPTY
};

const CONF: CommandSpec = CommandSpec {
    name: "conf",
    params: &["path", "edit", "set"],
    usage: "[path | edit | set <key> <value>]",
    summary: "show, locate, edit, or update the configuration file",
    handler: Some(meta::handle_conf),
    ..CommandSpec::EMPTY
};

const CHAT: CommandSpec = CommandSpec {
    name: "chat",
    usage: "[text...]",
    summary: "sends all arguments as a single string to Twitch chat",
    handler: Some(chat::handle_chat),
    ..CommandSpec::EMPTY
};

const BOT: CommandSpec = CommandSpec {
    name: "bot",
    usage: "<command>",
    summary: "bot-related commands",
    ..CommandSpec::EMPTY
};

const COMMANDS: CommandSpec = CommandSpec {
    name: "commands",
    aliases: &["c", "cmd"],
    usage: "<command>",
    summary: "update and list Twitch Streamlabs Cloudbot commands",
    ..CommandSpec::EMPTY
};

const ADD: CommandSpec = CommandSpec {
    name: "add",
    aliases: &["a"],
    usage: "<name>",
    summary: "add a command by name from file",
    min_args: 1,
    handler: Some(bot::handle_add),
    ..CommandSpec::EMPTY
};

const EDIT: CommandSpec = CommandSpec {
    name: "edit",
    usage: "<command> <msg>",
    summary: "edit a command with !editcommand",
    min_args: 1,
    handler: Some(bot::handle_edit),
    ..CommandSpec::EMPTY
};

const LIST: CommandSpec = CommandSpec {
    name: "list",
    aliases: &["l"],
    summary: "list existing commands from the commands file",
    handler: Some(bot::handle_list),
    ..CommandSpec::EMPTY
};

const REMOVE: CommandSpec = CommandSpec {
    name: "remove",
    aliases: &["rm"],
    usage: "<command>",
    summary: "remove a command with !rmcommand",
    min_args: 1,
    handler: Some(bot::handle_remove),
    ..CommandSpec::EMPTY
};

const FILE: CommandSpec = CommandSpec {
    name: "file",
    usage: "[edit [commit]]",
    summary: "print the full path to commands file from configuration",
    handler: Some(file::handle_file),
    ..CommandSpec::EMPTY
};

const FILE_EDIT: CommandSpec = CommandSpec {
    name: "edit",
    params: &["commit"],
    usage: "[commit]",
    summary: "edit bot commands file with configured editor",
    handler: Some(file::handle_file_edit),
    ..CommandSpec::EMPTY
};

const SYNC: CommandSpec = CommandSpec {
    name: "sync",
    usage: "<command>",
    summary: "sync a command from YAML file to Twitch",
    min_args: 1,
    handler: Some(bot::handle_sync),
    ..CommandSpec::EMPTY
};

const COMMIT: CommandSpec = CommandSpec {
    name: "commit",
    usage: "[message...]",
    summary: "commit and push the commands file",
    handler: Some(file::handle_commit),
    ..CommandSpec::EMPTY
};

/// Root tokens that stand for a longer command path.
pub const BUILTIN_SHORTCUTS: &[(&str, &[&str])] = &[
    ("project", &["bot", "commands", "edit", "project"]),
    ("info", &["bot", "commands", "file", "edit"]),
];

/// Build the command tree and attach configured values and shortcuts to it.
pub fn build_tree(config: &Config) -> Result<CommandTree, CommandError> {
    let mut tree = CommandTree::new(ROOT);
    let root = tree.root();
    tree.add_child(root, HELP)?;
    tree.add_child(root, VERSION)?;
    tree.add_child(root, CONF)?;
    let bot = tree.add_child(root, BOT)?;
    tree.add_child(root, CHAT)?;

    tree.add_child(bot, HELP)?;
    let commands = tree.add_child(bot, COMMANDS)?;

    tree.add_child(commands, HELP)?;
    for spec in [ADD, EDIT, LIST, REMOVE] {
        tree.add_child(commands, spec)?;
    }
    let file = tree.add_child(commands, FILE)?;
    tree.add_child(file, HELP)?;
    tree.add_child(file, FILE_EDIT)?;
    tree.add_child(commands, SYNC)?;
    tree.add_child(commands, COMMIT)?;

    for (name, expansion) in BUILTIN_SHORTCUTS {
        tree.add_shortcut(*name, expansion.iter().map(|s| s.to_string()).collect());
    }
    tree.apply_config(config);

    Ok(tree)
}
