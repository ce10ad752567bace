use serde_json::{json, Value};

/// Builds one page of repository objects in the shape the list endpoint
/// returns. Names run `repo-{start}` through `repo-{start + count - 1}` so
/// ordering assertions can span pages.
pub fn repo_page(start: usize, count: usize) -> Value {
    let repos: Vec<Value> = (start..start + count)
        .map(|i| {
            json!({
                "name": format!("repo-{}", i),
                "description": format!("Repository number {}", i),
                "html_url": format!("https://github.com/octocat/repo-{}", i),
                "private": false,
                "fork": false,
                "stargazers_count": i,
                "watchers_count": i,
                "size": 10,
                "visibility": "public",
                "updated_at": "2024-01-01T00:00:00Z",
                "topics": ["cli", "github"],
            })
        })
        .collect();

    Value::Array(repos)
}
