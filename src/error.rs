use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),
}

// Transport failures (connect, DNS, timeout) have no dedicated variant:
// anything that is not a rate-limit exhaustion is an API error.
impl From<reqwest::Error> for GitHubError {
    fn from(err: reqwest::Error) -> Self {
        GitHubError::ApiError(format!("Network error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, GitHubError>;
