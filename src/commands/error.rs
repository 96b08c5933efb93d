//! Error types for command dispatch and handlers.

use crate::core::collaborators::CollaboratorError;
use crate::core::config::ConfigError;
use std::error::Error as StdError;
use std::fmt;
use std::io;

/// Everything that can abort a command invocation.
#[derive(Debug)]
pub enum CommandError {
    /// Too few (or, for fixed-arity commands, too many) arguments.
    Usage { command: String, usage: &'static str },
    /// No child of `command` matches `token` and `command` has no handler.
    UnknownCommand { command: String, token: String },
    /// More than one child of `command` answers to `token`.
    Ambiguous { command: String, token: String },
    /// Two siblings were registered under the same name or alias.
    Conflict { parent: String, name: String },
    /// No scope from the node up to the root defines `key`.
    MissingConfig(String),
    /// A chat message body exceeds the bot's length ceiling.
    MessageTooLong { len: usize, limit: usize },
    /// An external program failed.
    Collaborator(CollaboratorError),
    /// The configuration file could not be loaded or saved.
    Config(ConfigError),
    /// Reading input or writing output failed.
    Io(io::Error),
}

impl CommandError {
    /// Returns the process exit code for this error (sysexits.h conventions).
    pub fn exit_code(&self) -> u8 {
        match self {
            CommandError::Usage { .. }
            | CommandError::UnknownCommand { .. }
            | CommandError::Ambiguous { .. } => 2,
            CommandError::MessageTooLong { .. } => 65, // EX_DATAERR
            CommandError::Collaborator(_) => 69,       // EX_UNAVAILABLE
            CommandError::Conflict { .. } => 70,       // EX_SOFTWARE
            CommandError::Io(_) => 74,                 // EX_IOERR
            CommandError::MissingConfig(_) | CommandError::Config(_) => 78, // EX_CONFIG
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Usage { command, usage } => {
                if usage.is_empty() {
                    write!(f, "usage: {command}")
                } else {
                    write!(f, "usage: {command} {usage}")
                }
            }
            CommandError::UnknownCommand { command, token } => {
                write!(f, "Unknown command '{token}' for '{command}'")
            }
            CommandError::Ambiguous { command, token } => {
                write!(f, "Ambiguous command '{token}' for '{command}'")
            }
            CommandError::Conflict { parent, name } => {
                write!(f, "Duplicate command name or alias '{name}' under '{parent}'")
            }
            CommandError::MissingConfig(key) => {
                write!(f, "Missing configuration value for '{key}'")
            }
            CommandError::MessageTooLong { len, limit } => {
                write!(f, "Must be {limit} bytes or less (currently {len})")
            }
            CommandError::Collaborator(err) => write!(f, "{err}"),
            CommandError::Config(err) => write!(f, "{err}"),
            CommandError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl StdError for CommandError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            CommandError::Collaborator(err) => Some(err),
            CommandError::Config(err) => Some(err),
            CommandError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CollaboratorError> for CommandError {
    fn from(err: CollaboratorError) -> Self {
        CommandError::Collaborator(err)
    }
}

impl From<ConfigError> for CommandError {
    fn from(err: ConfigError) -> Self {
        CommandError::Config(err)
    }
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::Io(err)
    }
}
