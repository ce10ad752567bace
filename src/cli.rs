use crate::format::OutputFormat;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "github-repo-lister")]
#[command(about = "List GitHub repositories for a given username")]
#[command(version = "0.1.0")]
#[command(after_help = "Examples:
  github-repo-lister octocat
  github-repo-lister octocat --format detailed
  github-repo-lister octocat --format json
  github-repo-lister octocat --format compact
  github-repo-lister octocat --limit 10
  github-repo-lister octocat --pages 2 --repos-per-page 50")]
pub struct Cli {
    /// GitHub username to list repositories for
    pub username: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "default")]
    pub format: OutputFormat,

    /// Skip using the GITHUB_TOKEN environment variable
    #[arg(short = 'n', long)]
    pub no_token: bool,

    /// Number of repositories to request per page (max: 100)
    #[arg(
        short = 'r',
        long,
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(1..=100)
    )]
    pub repos_per_page: u32,

    /// Maximum number of pages to retrieve (default: no limit)
    #[arg(short = 'p', long = "pages", value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: Option<u32>,

    /// Maximum total number of repositories to retrieve (default: no limit)
    #[arg(short = 'l', long = "limit", value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,
}
