use std::path::Path;
use std::process::Command;

use crate::utils::cmd::{exec_cmd, exec_cmd_with_progress};
use crate::utils::progress::{Progress, RepoInfo};

pub fn is_repository(path: impl AsRef<Path>) -> Result<(), anyhow::Error> {
    if path.as_ref().join(".git").is_dir() {
        let args = ["rev-parse", "--show-cdup"];
        if let Ok(output) = exec_cmd(path, "git", &args) {
            if output.trim().is_empty() {
                return Ok(());
            }
        }
    }

    Err(anyhow::anyhow!("repository not found!"))
}

/// clone into `base_path/<name>`, checking out the default branch when known
pub fn clone(
    base_path: impl AsRef<Path>,
    repo_info: &RepoInfo,
    progress: &impl Progress,
) -> anyhow::Result<()> {
    let mut args = vec!["clone", "--progress"];

    if let Some(branch) = repo_info.repo.default_branch.as_deref() {
        args.push("--branch");
        args.push(branch);
    }

    args.push(&repo_info.repo.clone_url);
    args.push(repo_info.name());

    let mut command = Command::new("git");
    let full_command = command.args(args).current_dir(base_path);

    exec_cmd_with_progress(repo_info, full_command, progress)
}

/// fast-forward the existing checkout from origin
pub fn pull(
    base_path: impl AsRef<Path>,
    repo_info: &RepoInfo,
    progress: &impl Progress,
) -> anyhow::Result<()> {
    let full_path = base_path.as_ref().join(repo_info.name());
    let mut args = vec!["pull", "--ff-only", "--progress"];

    if let Some(branch) = repo_info.repo.default_branch.as_deref() {
        args.push("origin");
        args.push(branch);
    }

    let mut command = Command::new("git");
    let full_command = command.args(args).current_dir(full_path);

    exec_cmd_with_progress(repo_info, full_command, progress)
}

pub fn checkout(path: impl AsRef<Path>, branch: impl AsRef<str>) -> anyhow::Result<()> {
    let args = ["checkout", branch.as_ref()];
    exec_cmd(path, "git", &args).map(|_| ())
}

pub fn get_current_branch(path: impl AsRef<Path>) -> Result<String, anyhow::Error> {
    is_repository(&path)?;
    let args = ["branch", "--show-current"];
    let output = exec_cmd(&path, "git", &args)?;

    if let Some(branch) = output.trim().lines().next() {
        return Ok(branch.trim().to_string());
    }
    Err(anyhow::anyhow!("current branch not found."))
}
