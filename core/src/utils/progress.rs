use crate::core::remote::RemoteRepo;
use crate::utils::style_message::StyleMessage;

#[derive(Debug, Clone)]
pub struct RepoInfo<'a> {
    pub id: usize,
    pub index: usize,
    pub repo: &'a RemoteRepo,
}

impl<'a> RepoInfo<'a> {
    pub fn new(id: usize, index: usize, repo: &'a RemoteRepo) -> Self {
        Self { id, index, repo }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.repo.name
    }
}

pub trait Progress: Send + Sync + Clone {
    /// set total repo count, all repositories will execute in parallel
    fn repos_start(&self, total: usize);

    /// notify total repo finished
    fn repos_end(&self);

    /// repo start
    fn repo_start(&self, repo_info: &RepoInfo, message: StyleMessage);

    /// repo info message
    fn repo_info(&self, repo_info: &RepoInfo, message: StyleMessage);

    /// repo success ended with message
    fn repo_end(&self, repo_info: &RepoInfo, message: StyleMessage);

    /// repo error message
    fn repo_error(&self, repo_info: &RepoInfo, message: StyleMessage);
}
