use crate::types::RepoRecord;
use clap::ValueEnum;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per repository: name and description
    Default,
    /// Full field listing with a separator rule
    Detailed,
    /// The raw API record, pretty-printed
    Json,
    /// One line per repository: name, description, and star count
    Compact,
}

/// Render one repository record in the requested format.
///
/// Pure and total: fields the record lacks (or carries as `null`) fall back
/// to `"N/A"` / `"No description"` for strings, `false` for booleans, `0`
/// for counts, and an empty list for topics.
pub fn format_repository(repo: &RepoRecord, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(repo).unwrap_or_default(),

        OutputFormat::Detailed => format!(
            "Name: {}\n\
             Description: {}\n\
             URL: {}\n\
             Private: {}\n\
             Fork: {}\n\
             Stars: {}\n\
             Watchers: {}\n\
             Size: {} KB\n\
             Visibility: {}\n\
             Last Updated: {}\n\
             Topics: {}\n\
             {}",
            str_or(repo, "name", "N/A"),
            str_or(repo, "description", "No description"),
            str_or(repo, "html_url", "N/A"),
            bool_or(repo, "private"),
            bool_or(repo, "fork"),
            count_or(repo, "stargazers_count"),
            count_or(repo, "watchers_count"),
            count_or(repo, "size"),
            str_or(repo, "visibility", "N/A"),
            str_or(repo, "updated_at", "N/A"),
            topics(repo),
            "=".repeat(50)
        ),

        OutputFormat::Compact => format!(
            "- {} | {} | {} stars",
            str_or(repo, "name", "N/A"),
            str_or(repo, "description", "No description"),
            count_or(repo, "stargazers_count")
        ),

        OutputFormat::Default => format!(
            "- {}: {}",
            str_or(repo, "name", "N/A"),
            str_or(repo, "description", "No description")
        ),
    }
}

fn str_or<'a>(repo: &'a RepoRecord, key: &str, default: &'a str) -> &'a str {
    repo.get(key).and_then(Value::as_str).unwrap_or(default)
}

fn bool_or(repo: &RepoRecord, key: &str) -> bool {
    repo.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn count_or(repo: &RepoRecord, key: &str) -> u64 {
    repo.get(key).and_then(Value::as_u64).unwrap_or(0)
}

fn topics(repo: &RepoRecord) -> String {
    repo.get("topics")
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}
