//! Recording fakes for the collaborators and a harness that runs argument
//! vectors through the real command tree.

use crate::commands::{build_tree, dispatch, CommandResult, Context};
use crate::core::collaborators::{
    ChatSender, CollaboratorError, Collaborators, Editor, VersionControl, YamlQuery,
};
use crate::core::config::Config;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tempfile::TempDir;

/// One observed collaborator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Chat(String),
    Yaml { expression: String, file: PathBuf },
    Edit(PathBuf),
    Commit {
        workdir: PathBuf,
        file: String,
        message: String,
    },
    Push(PathBuf),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

fn failed(program: &str, stderr: &str) -> CollaboratorError {
    CollaboratorError::Failed {
        program: program.to_string(),
        code: Some(1),
        stderr: stderr.to_string(),
    }
}

pub struct FakeChat {
    log: CallLog,
    fail: bool,
}

impl ChatSender for FakeChat {
    fn send(&self, message: &str) -> Result<(), CollaboratorError> {
        self.log.borrow_mut().push(Call::Chat(message.to_string()));
        if self.fail {
            Err(failed("chat", "not connected"))
        } else {
            Ok(())
        }
    }
}

pub struct FakeYaml {
    log: CallLog,
    answers: HashMap<String, String>,
}

impl YamlQuery for FakeYaml {
    fn evaluate(&self, expression: &str, file: &Path) -> Result<String, CollaboratorError> {
        self.log.borrow_mut().push(Call::Yaml {
            expression: expression.to_string(),
            file: file.to_path_buf(),
        });
        self.answers
            .get(expression)
            .cloned()
            .ok_or_else(|| failed("yq", "invalid query"))
    }
}

pub struct FakeEditor {
    log: CallLog,
}

impl Editor for FakeEditor {
    fn edit(&self, file: &Path) -> Result<(), CollaboratorError> {
        self.log.borrow_mut().push(Call::Edit(file.to_path_buf()));
        Ok(())
    }
}

pub struct FakeVcs {
    log: CallLog,
}

impl VersionControl for FakeVcs {
    fn commit(&self, workdir: &Path, file: &str, message: &str) -> Result<(), CollaboratorError> {
        self.log.borrow_mut().push(Call::Commit {
            workdir: workdir.to_path_buf(),
            file: file.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }

    fn push(&self, workdir: &Path) -> Result<(), CollaboratorError> {
        self.log.borrow_mut().push(Call::Push(workdir.to_path_buf()));
        Ok(())
    }
}

/// Runs commands against the real tree with fake collaborators.
///
/// The commands file lives in a temporary directory and is configured on the
/// `twitch bot` scope, so handlers below it resolve it by inheritance.
pub struct TestHarness {
    pub config: Config,
    pub config_path: PathBuf,
    pub commands_file: PathBuf,
    log: CallLog,
    answers: HashMap<String, String>,
    chat_fails: bool,
    input: String,
    output: Vec<u8>,
    _dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let commands_file = dir.path().join("commands.yaml");
        let mut config = Config::default();
        config.set(
            "twitch bot",
            "file".to_string(),
            commands_file.display().to_string(),
        );
        Self {
            config,
            config_path: dir.path().join("config.toml"),
            commands_file,
            log: CallLog::default(),
            answers: HashMap::new(),
            chat_fails: false,
            input: String::new(),
            output: Vec::new(),
            _dir: dir,
        }
    }

    /// A harness with no configuration at all.
    pub fn unconfigured() -> Self {
        let mut harness = Self::new();
        harness.config = Config::default();
        harness
    }

    pub fn answer(mut self, expression: &str, value: &str) -> Self {
        self.answers
            .insert(expression.to_string(), value.to_string());
        self
    }

    pub fn failing_chat(mut self) -> Self {
        self.chat_fails = true;
        self
    }

    pub fn with_input(mut self, input: &str) -> Self {
        self.input = input.to_string();
        self
    }

    pub fn run(&mut self, argv: &[&str]) -> CommandResult {
        let tree = build_tree(&self.config).expect("command tree should build");
        let collaborators = Collaborators {
            chat: Box::new(FakeChat {
                log: Rc::clone(&self.log),
                fail: self.chat_fails,
            }),
            yaml: Box::new(FakeYaml {
                log: Rc::clone(&self.log),
                answers: self.answers.clone(),
            }),
            editor: Box::new(FakeEditor {
                log: Rc::clone(&self.log),
            }),
            vcs: Box::new(FakeVcs {
                log: Rc::clone(&self.log),
            }),
        };
        let mut input = Cursor::new(self.input.clone().into_bytes());
        let argv: Vec<String> = argv.iter().map(|arg| arg.to_string()).collect();

        let mut ctx = Context {
            tree: &tree,
            config: &self.config,
            config_path: &self.config_path,
            collaborators: &collaborators,
            input: &mut input,
            output: &mut self.output,
        };
        dispatch(&mut ctx, &argv)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub fn chats(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Chat(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}
