use std::env;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use atomic_counter::{AtomicCounter, RelaxedCounter};
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};

use crate::core::git;
use crate::core::matcher::{self, Term};
use crate::core::remote::{dedup_by_name, HostingService, RemoteRepo};
use crate::utils::error::{ReposyncError, ReposyncResult};
use crate::utils::logger;
use crate::utils::progress::{Progress, RepoInfo};
use crate::utils::style_message::StyleMessage;

pub struct SyncOptions {
    pub path: PathBuf,
    pub org: String,
    pub terms: Vec<Term>,
    pub thread_count: usize,
    pub dry_run: bool,
    pub include_archived: bool,
    pub include_forks: bool,
}

impl SyncOptions {
    pub fn new(
        path: Option<impl AsRef<Path>>,
        org: impl AsRef<str>,
        terms: Vec<Term>,
        thread_count: Option<usize>,
        dry_run: Option<bool>,
        include_archived: Option<bool>,
        include_forks: Option<bool>,
    ) -> Self {
        let path = path.map_or(env::current_dir().unwrap(), |p| p.as_ref().to_path_buf());
        Self {
            path,
            org: org.as_ref().to_string(),
            terms,
            thread_count: thread_count.unwrap_or(4),
            dry_run: dry_run.unwrap_or(false),
            include_archived: include_archived.unwrap_or(false),
            include_forks: include_forks.unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Cloned,
    Updated,
    Failed,
}

impl Display for SyncStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            SyncStatus::Cloned => "cloned",
            SyncStatus::Updated => "updated",
            SyncStatus::Failed => "failed",
        };
        f.write_str(status)
    }
}

/// one terminal outcome per matched repository
#[derive(Debug)]
pub struct SyncOutcome {
    pub repo: RemoteRepo,
    pub status: SyncStatus,
    pub error: Option<anyhow::Error>,
}

#[derive(Debug, Default)]
pub struct SyncReport {
    pub outcomes: Vec<SyncOutcome>,
}

impl SyncReport {
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == SyncStatus::Failed)
            .count()
    }

    pub fn summary(&self) -> StyleMessage {
        let mut result = match StyleMessage::ops_errors("sync", self.failed_count()) {
            Ok(msg) => msg,
            Err(msg) => msg,
        };

        for outcome in &self.outcomes {
            result = result.join("\n  ".into()).join(StyleMessage::repo_status(
                &outcome.repo.name,
                outcome.status.to_string(),
                outcome.status != SyncStatus::Failed,
            ));
        }

        if self.failed_count() > 0 {
            result = result.join("\nErrors:".into());
            for outcome in &self.outcomes {
                if let Some(error) = &outcome.error {
                    result = result
                        .join("\n  ".into())
                        .join(StyleMessage::git_error(&outcome.repo.name, error));
                }
            }
        }
        result
    }
}

/// list the organization once, filter with the term fold, then clone or
/// update every matched repository on a bounded thread pool
///
/// a per-repository failure becomes a `Failed` outcome and never aborts the
/// batch; only configuration and listing errors are fatal
pub fn sync_repos(
    options: SyncOptions,
    service: &impl HostingService,
    progress: impl Progress,
) -> ReposyncResult<SyncReport> {
    let path = &options.path;
    let org = &options.org;

    logger::info(StyleMessage::ops_start("sync repos", path));

    if options.terms.is_empty() {
        return Err(anyhow!(ReposyncError::NoTermsSpecified));
    }

    // single list call per run, archived repos and forks are excluded
    // unless asked for
    let repos: Vec<RemoteRepo> = dedup_by_name(service.list_org_repos(org)?)
        .into_iter()
        .filter(|repo| options.include_archived || !repo.archived)
        .filter(|repo| options.include_forks || !repo.fork)
        .collect();

    let matched_names =
        matcher::match_repos(&options.terms, repos.iter().map(|repo| repo.name.as_str()))?;

    if matched_names.is_empty() {
        logger::warn(StyleMessage::no_repos_matched(org));
        return Ok(SyncReport::default());
    }

    // the matched set is iterated sorted by name
    let matched: Vec<&RemoteRepo> = matched_names
        .iter()
        .filter_map(|name| repos.iter().find(|repo| &repo.name == name))
        .collect();

    if options.dry_run {
        for repo in &matched {
            logger::info(StyleMessage::repo_found(&repo.name));
        }
        return Ok(SyncReport::default());
    }

    std::fs::create_dir_all(path)?;

    progress.repos_start(matched.len());

    // create thread pool, and set the number of thread to use by using `.num_threads(count)`
    let counter = RelaxedCounter::new(1);
    let thread_builder = rayon::ThreadPoolBuilder::new().num_threads(options.thread_count);
    let Ok(thread_pool) = thread_builder.build() else {
        return Err(anyhow!(ReposyncError::CreateThreadPoolFailed));
    };

    let mut outcomes: Vec<SyncOutcome> = thread_pool.install(|| {
        let res = matched
            .into_par_iter()
            .enumerate()
            .map(|(id, repo)| {
                let index = counter.inc();
                let repo_info = RepoInfo::new(id, index, repo);

                let progress = progress.clone();
                progress.repo_start(&repo_info, "waiting...".into());

                let exec_res = inner_exec(path, &repo_info, &progress);

                match exec_res {
                    Ok(status) => {
                        progress.repo_end(&repo_info, status.to_string().into());
                        SyncOutcome {
                            repo: repo.clone(),
                            status,
                            error: None,
                        }
                    }
                    Err(e) => {
                        progress.repo_error(&repo_info, StyleMessage::new());
                        SyncOutcome {
                            repo: repo.clone(),
                            status: SyncStatus::Failed,
                            error: Some(e),
                        }
                    }
                }
            })
            .collect();

        progress.repos_end();
        res
    });

    outcomes.sort_by(|a, b| a.repo.name.cmp(&b.repo.name));

    Ok(SyncReport { outcomes })
}

fn inner_exec(
    base_path: &Path,
    repo_info: &RepoInfo,
    progress: &impl Progress,
) -> anyhow::Result<SyncStatus> {
    let full_path = base_path.join(repo_info.name());

    // clone if absent, update if present
    if git::is_repository(&full_path).is_err() {
        let url = &repo_info.repo.clone_url;
        progress.repo_info(repo_info, StyleMessage::git_cloning(url));
        git::clone(base_path, repo_info, progress)?;
        return Ok(SyncStatus::Cloned);
    }

    let branch = repo_info.repo.default_branch.as_deref();
    progress.repo_info(repo_info, StyleMessage::git_updating(branch));

    // land on the default branch before pulling
    if let Some(branch) = branch {
        match git::get_current_branch(&full_path) {
            Ok(current) if current == branch => {}
            _ => git::checkout(&full_path, branch)?,
        }
    }

    git::pull(base_path, repo_info, progress)?;
    Ok(SyncStatus::Updated)
}
