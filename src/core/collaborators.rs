//! Seams for the external programs the command handlers drive.
//!
//! Handlers only see these traits; the process-backed implementations live in
//! [`crate::utils`] and tests swap in recording fakes.

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Sends a complete chat message to the channel.
pub trait ChatSender {
    fn send(&self, message: &str) -> Result<(), CollaboratorError>;
}

/// Evaluates a YAML query expression (e.g. `.project` or `keys`) against a file.
pub trait YamlQuery {
    fn evaluate(&self, expression: &str, file: &Path) -> Result<String, CollaboratorError>;
}

/// Opens a file for interactive editing and blocks until the editor exits.
pub trait Editor {
    fn edit(&self, file: &Path) -> Result<(), CollaboratorError>;
}

/// Records and publishes changes to the commands file.
pub trait VersionControl {
    fn commit(&self, workdir: &Path, file: &str, message: &str) -> Result<(), CollaboratorError>;
    fn push(&self, workdir: &Path) -> Result<(), CollaboratorError>;
}

/// The full set of collaborators available to handlers.
pub struct Collaborators {
    pub chat: Box<dyn ChatSender>,
    pub yaml: Box<dyn YamlQuery>,
    pub editor: Box<dyn Editor>,
    pub vcs: Box<dyn VersionControl>,
}

/// Failure of an external program or of the environment it needs.
#[derive(Debug)]
pub enum CollaboratorError {
    /// The program could not be started at all.
    Spawn { program: String, source: io::Error },
    /// The program ran but reported failure.
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
    /// The program produced output that could not be used.
    Output { program: String, detail: String },
    /// A working directory the program needs is unusable.
    Directory { path: PathBuf, source: io::Error },
    /// No program is configured for this role.
    NotConfigured { role: &'static str, hint: &'static str },
}

impl fmt::Display for CollaboratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollaboratorError::Spawn { program, source } => {
                write!(f, "Failed to run '{program}': {source}")
            }
            CollaboratorError::Failed {
                program,
                code,
                stderr,
            } => {
                match code {
                    Some(code) => write!(f, "'{program}' exited with status {code}")?,
                    None => write!(f, "'{program}' was terminated by a signal")?,
                }
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    write!(f, ": {stderr}")?;
                }
                Ok(())
            }
            CollaboratorError::Output { program, detail } => {
                write!(f, "Unexpected output from '{program}': {detail}")
            }
            CollaboratorError::Directory { path, source } => {
                write!(f, "Cannot use directory {}: {}", path.display(), source)
            }
            CollaboratorError::NotConfigured { role, hint } => {
                write!(f, "No {role} configured. {hint}")
            }
        }
    }
}

impl StdError for CollaboratorError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            CollaboratorError::Spawn { source, .. } => Some(source),
            CollaboratorError::Directory { source, .. } => Some(source),
            _ => None,
        }
    }
}
