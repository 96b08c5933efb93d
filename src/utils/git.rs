use crate::core::collaborators::{CollaboratorError, VersionControl};
use crate::utils::process::{program_command, run_status};
use std::path::Path;
use std::process::Command;
use tracing::info;

pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Version control through the `git` command line, run inside the file's directory.
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, workdir: &Path) -> Result<Command, CollaboratorError> {
        let mut command = program_command(&self.program, "git")?;
        command.current_dir(workdir);
        Ok(command)
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(DEFAULT_GIT_PROGRAM)
    }
}

impl VersionControl for GitCli {
    fn commit(&self, workdir: &Path, file: &str, message: &str) -> Result<(), CollaboratorError> {
        info!(workdir = %workdir.display(), file, "committing");
        let mut command = self.command(workdir)?;
        command.args(["commit", file, "-m", message]);
        run_status(&mut command)
    }

    fn push(&self, workdir: &Path) -> Result<(), CollaboratorError> {
        info!(workdir = %workdir.display(), "pushing");
        let mut command = self.command(workdir)?;
        command.arg("push");
        run_status(&mut command)
    }
}
