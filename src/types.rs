use serde_json::{Map, Value};

/// One repository object exactly as the API returned it. Kept opaque so that
/// `--format json` reproduces the full record, unknown fields included.
pub type RepoRecord = Map<String, Value>;

/// Pagination and authentication inputs for one fetch invocation.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub username: String,
    pub token: Option<String>,
    /// Requested page size; the wire value is clamped to the API maximum.
    pub per_page: u32,
    /// Maximum number of pages to fetch (no limit when `None`).
    pub max_pages: Option<u32>,
    /// Maximum total number of repositories to fetch (no limit when `None`).
    pub max_repos: Option<usize>,
}

impl FetchOptions {
    pub fn new(username: impl Into<String>) -> Self {
        FetchOptions {
            username: username.into(),
            token: None,
            per_page: 100,
            max_pages: None,
            max_repos: None,
        }
    }

    /// GitHub caps `per_page` at 100; larger requests are silently clamped.
    pub fn clamped_per_page(&self) -> u32 {
        self.per_page.min(100)
    }
}
