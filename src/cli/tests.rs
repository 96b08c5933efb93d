use super::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

mod test_helpers {
    use super::*;

    pub(super) fn parse_args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv)
            .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
    }

    pub(super) fn args_with_config(config: PathBuf, command: &[&str]) -> Args {
        Args {
            config: Some(config),
            verbose: 0,
            command: command.iter().map(|s| s.to_string()).collect(),
        }
    }
}

use test_helpers::{args_with_config, parse_args};

#[test]
fn test_command_tokens_are_collected_verbatim() {
    let args = parse_args(&["twitch", "bot", "commands", "edit", "project", "Now", "live"]);
    assert_eq!(args.command, ["bot", "commands", "edit", "project", "Now", "live"]);
    assert_eq!(args.config, None);
    assert_eq!(args.verbose, 0);
}

#[test]
fn test_global_flags_before_the_command() {
    let args = parse_args(&["twitch", "-vv", "--config", "/tmp/t.toml", "bot", "commands", "list"]);
    assert_eq!(args.verbose, 2);
    assert_eq!(args.config, Some(PathBuf::from("/tmp/t.toml")));
    assert_eq!(args.command, ["bot", "commands", "list"]);
}

#[test]
fn test_hyphenated_words_after_the_command_are_arguments() {
    let args = parse_args(&["twitch", "chat", "-v", "--not-a-flag", "hello"]);
    assert_eq!(args.verbose, 0);
    assert_eq!(args.command, ["chat", "-v", "--not-a-flag", "hello"]);
}

#[test]
fn test_no_command_is_allowed() {
    let args = parse_args(&["twitch"]);
    assert!(args.command.is_empty());
}

#[test]
fn test_run_reports_missing_file_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let args = args_with_config(
        temp_dir.path().join("config.toml"),
        &["bot", "commands", "file"],
    );

    let err = run(args).unwrap_err();
    assert!(matches!(err, CommandError::MissingConfig(ref key) if key == "file"));
}

#[test]
fn test_run_reports_invalid_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "scope = [").unwrap();

    let err = run(args_with_config(config_path, &["conf"])).unwrap_err();
    assert!(matches!(err, CommandError::Config(_)));
    assert_eq!(err.exit_code(), 78);
}

#[test]
fn test_run_prints_the_configured_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[scope.\"twitch bot\"]\nfile = \"/x/commands.yaml\"\n",
    )
    .unwrap();

    assert!(run(args_with_config(config_path, &["bot", "commands", "file"])).is_ok());
}

#[test]
fn test_run_rejects_unknown_commands() {
    let temp_dir = TempDir::new().unwrap();
    let err = run(args_with_config(
        temp_dir.path().join("config.toml"),
        &["dance"],
    ))
    .unwrap_err();
    assert!(matches!(err, CommandError::UnknownCommand { .. }));
}

#[test]
fn test_process_collaborators_fall_back_to_defaults_for_blank_values() {
    let mut config = Config::default();
    config.set_root("chat".to_string(), "  ".to_string());
    config.set_root("editor".to_string(), "vim".to_string());
    let tree = build_tree(&config).unwrap();

    // nothing is spawned here
    let _collaborators = process_collaborators(&tree, tree.root());
    assert_eq!(tree.resolve_optional(tree.root(), "chat"), None);
    assert_eq!(tree.resolve_optional(tree.root(), "editor"), Some("vim"));
}

#[cfg(unix)]
#[test]
fn test_process_collaborators_use_the_nearest_scope() {
    let mut config = Config::default();
    config.set_root("editor".to_string(), "false".to_string());
    config.set(
        "twitch bot commands",
        "editor".to_string(),
        "true".to_string(),
    );
    let tree = build_tree(&config).unwrap();
    let file = Path::new("commands.yaml");

    let file_edit = tree.find_by_path("twitch bot commands file edit").unwrap();
    assert!(process_collaborators(&tree, file_edit).editor.edit(file).is_ok());
    assert!(process_collaborators(&tree, tree.root()).editor.edit(file).is_err());
}

#[cfg(unix)]
#[test]
fn test_run_uses_the_editor_scoped_to_the_command() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let commands_file = temp_dir.path().join("commands.yaml");
    fs::write(
        &config_path,
        format!(
            "[scope.twitch]\neditor = \"false\"\n\n\
             [scope.\"twitch bot commands\"]\neditor = \"true\"\nfile = \"{}\"\n",
            commands_file.display()
        ),
    )
    .unwrap();

    assert!(run(args_with_config(config_path, &["bot", "commands", "file", "edit"])).is_ok());
}
