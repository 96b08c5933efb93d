use super::{commands_file, usage_error};
use crate::commands::{CommandResult, Context, NodeId};
use crate::core::collaborators::CollaboratorError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub(crate) fn handle_file(ctx: &mut Context<'_>, node: NodeId, args: &[String]) -> CommandResult {
    if !args.is_empty() {
        return Err(usage_error(ctx, node));
    }
    let file = commands_file(ctx, node)?;
    writeln!(ctx.output, "{}", file.display())?;
    Ok(())
}

/// Open the commands file in the editor, then commit it when asked to.
pub(crate) fn handle_file_edit(
    ctx: &mut Context<'_>,
    node: NodeId,
    args: &[String],
) -> CommandResult {
    let commit = match args {
        [] => false,
        [param] if param == "commit" => true,
        _ => return Err(usage_error(ctx, node)),
    };

    let file = commands_file(ctx, node)?;
    ctx.collaborators.editor.edit(&file)?;

    if commit {
        handle_commit(ctx, node, &[])
    } else {
        Ok(())
    }
}

/// Commit and push the commands file from inside its own directory.
pub(crate) fn handle_commit(ctx: &mut Context<'_>, node: NodeId, args: &[String]) -> CommandResult {
    let file = commands_file(ctx, node)?;
    let (workdir, name) = split_commands_file(&file)?;

    let message = if args.is_empty() {
        format!("Update {name}")
    } else {
        args.join(" ")
    };

    info!(workdir = %workdir.display(), "committing from directory");
    let vcs = &ctx.collaborators.vcs;
    vcs.commit(&workdir, &name, &message)?;
    vcs.push(&workdir)?;
    Ok(())
}

/// Split the file path into an existing directory and the file name inside it.
fn split_commands_file(file: &Path) -> Result<(PathBuf, String), CollaboratorError> {
    let workdir = match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let directory_error = |source| CollaboratorError::Directory {
        path: workdir.clone(),
        source,
    };

    let Some(name) = file.file_name() else {
        return Err(directory_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not name a file", file.display()),
        )));
    };

    let metadata = fs::metadata(&workdir).map_err(directory_error)?;
    if !metadata.is_dir() {
        return Err(directory_error(io::Error::other("not a directory")));
    }

    Ok((workdir, name.to_string_lossy().into_owned()))
}
