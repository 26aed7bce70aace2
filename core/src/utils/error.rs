use crate::utils::StyleMessage;
use thiserror::Error;

pub type ReposyncResult<T = StyleMessage, E = anyhow::Error> = Result<T, E>;

#[derive(Debug, Error)]
pub enum ReposyncError {
    #[error("At least one name term must be supplied!")]
    NoTermsSpecified,

    #[error("invalid pattern '{0}': {1}")]
    InvalidPattern(String, #[source] globset::Error),

    #[error("{0}")]
    AuthFailed(StyleMessage),

    #[error("{0}")]
    OrgNotFound(StyleMessage),

    #[error("listing repositories failed: {0}")]
    Network(String),

    #[error("Create thread pool failed!")]
    CreateThreadPoolFailed,
}
