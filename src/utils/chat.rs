//! Chat delivery through an external sender program.
//!
//! The sender receives the whole message as its single argument and is
//! expected to post it to the channel, e.g. `chat '!rmcommand !foo'`.

use crate::core::collaborators::{ChatSender, CollaboratorError};
use crate::utils::process::{program_command, run_status};
use tracing::info;

pub const DEFAULT_CHAT_PROGRAM: &str = "chat";

pub struct ChatProgram {
    program: String,
}

impl ChatProgram {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ChatProgram {
    fn default() -> Self {
        Self::new(DEFAULT_CHAT_PROGRAM)
    }
}

impl ChatSender for ChatProgram {
    fn send(&self, message: &str) -> Result<(), CollaboratorError> {
        info!(bytes = message.len(), "sending chat message");
        let mut command = program_command(&self.program, "chat")?;
        command.arg(message);
        run_status(&mut command)
    }
}
