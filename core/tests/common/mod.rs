#![allow(dead_code)]

use std::path::Path;

use reposync::core::remote::{HostingService, RemoteRepo};
use reposync::utils::cmd::exec_cmd;
use reposync::utils::error::ReposyncResult;
use reposync::utils::progress::{Progress, RepoInfo};
use reposync::utils::style_message::StyleMessage;

#[derive(Clone, Default)]
pub struct TestProgress;

impl Progress for TestProgress {
    fn repos_start(&self, _total: usize) {}

    fn repos_end(&self) {}

    fn repo_start(&self, _repo_info: &RepoInfo, _message: StyleMessage) {}

    fn repo_info(&self, _repo_info: &RepoInfo, _message: StyleMessage) {}

    fn repo_end(&self, _repo_info: &RepoInfo, _message: StyleMessage) {}

    fn repo_error(&self, _repo_info: &RepoInfo, _message: StyleMessage) {}
}

/// canned repository list standing in for the hosting API
pub struct StubService {
    pub repos: Vec<RemoteRepo>,
}

impl HostingService for StubService {
    fn list_org_repos(&self, _org: &str) -> ReposyncResult<Vec<RemoteRepo>> {
        Ok(self.repos.clone())
    }
}

pub fn remote_repo(name: impl AsRef<str>, clone_url: impl AsRef<str>) -> RemoteRepo {
    RemoteRepo {
        name: name.as_ref().to_string(),
        clone_url: clone_url.as_ref().to_string(),
        default_branch: Some("master".to_string()),
        archived: false,
        fork: false,
    }
}

/// create a local origin repository with one commit on master
pub fn create_origin(dir: &Path) {
    std::fs::create_dir_all(dir).unwrap();

    exec_cmd(dir, "git", &["init", "-b", "master"]).expect("git init failed");
    std::fs::write(dir.join("README.md"), "# test repository\n").unwrap();
    exec_cmd(dir, "git", &["add", "."]).expect("git add failed");
    exec_cmd(
        dir,
        "git",
        &[
            "-c",
            "user.name=test",
            "-c",
            "user.email=test@example.com",
            "commit",
            "-m",
            "init",
        ],
    )
    .expect("git commit failed");
}
