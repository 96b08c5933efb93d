//! Blocking subprocess helpers shared by the process-backed collaborators.

use crate::core::collaborators::CollaboratorError;
use std::process::{Command, Stdio};
use tracing::debug;

/// Build a command from a configured program line such as `code --wait`.
pub fn program_command(line: &str, role: &'static str) -> Result<Command, CollaboratorError> {
    let mut parts = line.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(CollaboratorError::NotConfigured {
            role,
            hint: "The configured program is empty.",
        });
    };
    let mut command = Command::new(program);
    command.args(parts);
    Ok(command)
}

fn program_name(command: &Command) -> String {
    command.get_program().to_string_lossy().into_owned()
}

/// Run a command with inherited stdio and wait for it to finish.
pub fn run_status(command: &mut Command) -> Result<(), CollaboratorError> {
    let program = program_name(command);
    debug!(?command, "running");

    let status = command
        .status()
        .map_err(|source| CollaboratorError::Spawn {
            program: program.clone(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(CollaboratorError::Failed {
            program,
            code: status.code(),
            stderr: String::new(),
        })
    }
}

/// Run a command and capture its standard output as UTF-8.
///
/// Standard error is captured too and folded into the error on failure.
pub fn run_capture(command: &mut Command) -> Result<String, CollaboratorError> {
    let program = program_name(command);
    debug!(?command, "running (captured)");

    let output = command
        .stdin(Stdio::null())
        .output()
        .map_err(|source| CollaboratorError::Spawn {
            program: program.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(CollaboratorError::Failed {
            program,
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    String::from_utf8(output.stdout).map_err(|err| CollaboratorError::Output {
        program,
        detail: err.to_string(),
    })
}
