use std::collections::HashSet;
use std::time::Duration;

use anyhow::anyhow;
use serde::Deserialize;

use crate::utils::error::{ReposyncError, ReposyncResult};
use crate::utils::logger;
use crate::utils::style_message::StyleMessage;

const GITHUB_API: &str = "https://api.github.com";
const PER_PAGE: usize = 100;

/// immutable snapshot of one remote repository, fetched once per run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteRepo {
    pub name: String,
    pub clone_url: String,
    pub default_branch: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub fork: bool,
}

pub trait HostingService {
    /// full repository list of the organization, fatal on auth/network errors
    fn list_org_repos(&self, org: &str) -> ReposyncResult<Vec<RemoteRepo>>;
}

pub struct GitHubClient {
    agent: ureq::Agent,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(30))
            .build();
        Self { agent, token }
    }

    fn get_page(&self, org: &str, page: usize) -> ReposyncResult<Vec<RemoteRepo>> {
        let url = format!("{}/orgs/{}/repos", GITHUB_API, org);
        let mut request = self
            .agent
            .get(&url)
            .set("User-Agent", "reposync")
            .set("Accept", "application/vnd.github+json")
            .query("per_page", &PER_PAGE.to_string())
            .query("page", &page.to_string());

        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }

        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(401 | 403, _)) => {
                return Err(anyhow!(ReposyncError::AuthFailed(
                    StyleMessage::auth_failed(org, self.token.is_none()),
                )));
            }
            Err(ureq::Error::Status(404, _)) => {
                return Err(anyhow!(ReposyncError::OrgNotFound(
                    StyleMessage::org_not_found(org),
                )));
            }
            Err(e) => {
                return Err(anyhow!(ReposyncError::Network(e.to_string())));
            }
        };

        response
            .into_json::<Vec<RemoteRepo>>()
            .map_err(|e| anyhow!(ReposyncError::Network(e.to_string())))
    }
}

impl HostingService for GitHubClient {
    fn list_org_repos(&self, org: &str) -> ReposyncResult<Vec<RemoteRepo>> {
        let mut repos = Vec::new();

        for page in 1.. {
            let batch = self.get_page(org, page)?;
            let last_page = batch.len() < PER_PAGE;
            repos.extend(batch);
            if last_page {
                break;
            }
        }

        logger::debug(format!("{}: {} repositories listed", org, repos.len()));
        Ok(dedup_by_name(repos))
    }
}

/// keep the first occurrence of every name, preserving order
pub fn dedup_by_name(repos: Vec<RemoteRepo>) -> Vec<RemoteRepo> {
    let mut seen = HashSet::new();
    repos
        .into_iter()
        .filter(|repo| seen.insert(repo.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_api_repo() {
        let body = r#"[{
            "id": 1296269,
            "name": "hello-world",
            "full_name": "octo-org/hello-world",
            "clone_url": "https://github.com/octo-org/hello-world.git",
            "default_branch": "main",
            "archived": false,
            "fork": true
        }]"#;

        let repos: Vec<RemoteRepo> = serde_json::from_str(body).unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "hello-world");
        assert_eq!(repos[0].default_branch.as_deref(), Some("main"));
        assert!(repos[0].fork);
        assert!(!repos[0].archived);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let repo = |name: &str, url: &str| RemoteRepo {
            name: name.to_string(),
            clone_url: url.to_string(),
            default_branch: None,
            archived: false,
            fork: false,
        };

        let repos = dedup_by_name(vec![
            repo("a", "first"),
            repo("b", "second"),
            repo("a", "third"),
        ]);

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].clone_url, "first");
        assert_eq!(repos[1].name, "b");
    }
}
