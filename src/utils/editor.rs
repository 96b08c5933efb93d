//! External editor integration
//!
//! This module hands files to the user's text editor and waits for it to exit.

use crate::core::collaborators::{CollaboratorError, Editor};
use crate::utils::process::{program_command, run_status};
use std::env;
use std::path::Path;
use tracing::info;

pub struct ExternalEditor {
    program: Option<String>,
}

impl ExternalEditor {
    pub fn new(program: Option<String>) -> Self {
        Self { program }
    }

    /// Use the configured editor, falling back to `VISUAL` and then `EDITOR`.
    pub fn from_config_or_env(configured: Option<&str>) -> Self {
        Self::new(first_non_blank([
            configured.map(str::to_string),
            env::var("VISUAL").ok(),
            env::var("EDITOR").ok(),
        ]))
    }
}

/// Blank candidates are skipped so an empty `VISUAL` still falls through to `EDITOR`.
fn first_non_blank(candidates: [Option<String>; 3]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|editor| !editor.trim().is_empty())
}

impl Editor for ExternalEditor {
    fn edit(&self, file: &Path) -> Result<(), CollaboratorError> {
        let Some(editor) = self.program.as_deref() else {
            return Err(CollaboratorError::NotConfigured {
                role: "editor",
                hint: "Set `editor` in the config file or the EDITOR environment variable (e.g., export EDITOR=nano).",
            });
        };

        // Editors are often configured with flags, e.g. "code --wait"
        let mut command = program_command(editor, "editor")?;
        info!(editor = %editor, file = %file.display(), "opening editor");
        command.arg(file);
        run_status(&mut command)
    }
}
