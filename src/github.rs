use crate::error::{GitHubError, Result};
use crate::types::{FetchOptions, RepoRecord};
use reqwest::Client;
use std::time::Duration;

const API_BASE_URL: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GitHubClient {
    client: Client,
    /// Overridable so tests can point the client at a mock server.
    pub base_url: String,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("github-repo-lister/0.1.0")
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(GitHubClient {
            client,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Fetch all repositories for a user, page by page, honoring the
    /// `max_pages` and `max_repos` ceilings in `options`.
    ///
    /// Requests are strictly sequential. A single failed request aborts the
    /// whole fetch; already accumulated pages are dropped. Progress lines go
    /// to stderr so piped stdout stays clean.
    pub async fn fetch_user_repos(&self, options: &FetchOptions) -> Result<Vec<RepoRecord>> {
        let url = format!("{}/users/{}/repos", self.base_url, options.username);
        let per_page = options.clamped_per_page();

        let mut all_repositories: Vec<RepoRecord> = Vec::new();
        let mut page: u32 = 1;

        loop {
            if let Some(max_pages) = options.max_pages {
                if page > max_pages {
                    eprintln!("Reached page limit ({})", max_pages);
                    break;
                }
            }

            if let Some(max_repos) = options.max_repos {
                if all_repositories.len() >= max_repos {
                    eprintln!("Reached repository limit ({})", max_repos);
                    break;
                }
            }

            eprintln!("Fetching page {}...", page);
            tracing::debug!(%url, page, per_page, "requesting repository page");

            let mut request = self
                .client
                .get(&url)
                .query(&[("page", page.to_string()), ("per_page", per_page.to_string())])
                .header("Accept", "application/vnd.github+json")
                .header("X-GitHub-Api-Version", API_VERSION);

            if let Some(token) = &options.token {
                request = request.header("Authorization", format!("Bearer {}", token));
            }

            let response = request.send().await?;
            let status = response.status();

            if status == reqwest::StatusCode::FORBIDDEN {
                // Quota exhaustion is signaled via a header, not a distinct
                // status. Any other 403 stays a plain API error.
                let remaining = response
                    .headers()
                    .get("X-RateLimit-Remaining")
                    .and_then(|h| h.to_str().ok());

                if remaining == Some("0") {
                    return Err(GitHubError::RateLimitExceeded(
                        "Please wait before making more requests.".to_string(),
                    ));
                }

                return Err(GitHubError::ApiError(format!(
                    "API request failed: {}",
                    status.as_u16()
                )));
            }

            if !status.is_success() {
                return Err(GitHubError::ApiError(format!(
                    "API request failed: {}",
                    status.as_u16()
                )));
            }

            let repositories: Vec<RepoRecord> = response.json().await?;

            // Empty page means we ran past the end of the data.
            if repositories.is_empty() {
                break;
            }

            let page_len = repositories.len();
            let remaining_slots = match options.max_repos {
                Some(max_repos) => max_repos - all_repositories.len(),
                None => page_len,
            };
            let taken = page_len.min(remaining_slots);

            all_repositories.extend(repositories.into_iter().take(remaining_slots));
            eprintln!("Retrieved {} repositories from page {}", taken, page);

            // A short page is the last page.
            if page_len < per_page as usize {
                break;
            }

            if let Some(max_repos) = options.max_repos {
                if all_repositories.len() >= max_repos {
                    break;
                }
            }

            page += 1;
        }

        eprintln!("Total repositories fetched: {}", all_repositories.len());
        Ok(all_repositories)
    }
}
