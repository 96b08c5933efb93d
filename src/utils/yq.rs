use crate::core::collaborators::{CollaboratorError, YamlQuery};
use crate::utils::process::{program_command, run_capture};
use std::path::Path;

pub const DEFAULT_YQ_PROGRAM: &str = "yq";

/// YAML queries answered by the `yq` command-line tool (`yq eval <expr> <file>`).
pub struct YqProgram {
    program: String,
}

impl YqProgram {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for YqProgram {
    fn default() -> Self {
        Self::new(DEFAULT_YQ_PROGRAM)
    }
}

impl YamlQuery for YqProgram {
    fn evaluate(&self, expression: &str, file: &Path) -> Result<String, CollaboratorError> {
        let mut command = program_command(&self.program, "yq")?;
        command.arg("eval").arg(expression).arg(file);
        let output = run_capture(&mut command)?;
        Ok(trim_trailing_newlines(output))
    }
}

fn trim_trailing_newlines(mut output: String) -> String {
    while output.ends_with('\n') || output.ends_with('\r') {
        output.pop();
    }
    output
}
