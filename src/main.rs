use clap::Parser;
use colored::*;
use github_repo_lister::cli::Cli;
use github_repo_lister::error::GitHubError;
use github_repo_lister::format::{format_repository, OutputFormat};
use github_repo_lister::github::GitHubClient;
use github_repo_lister::types::{FetchOptions, RepoRecord};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> anyhow::Result<i32> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Tracing shares stderr with the progress lines; stdout carries only the
    // formatted records.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Token is read exactly once; everything downstream takes it as input.
    let token = if cli.no_token {
        None
    } else {
        std::env::var("GITHUB_TOKEN").ok()
    };

    if token.is_none() {
        eprintln!(
            "{}",
            "Warning: No GitHub token provided. API calls may be rate limited.".yellow()
        );
    }

    let client = GitHubClient::new()?;

    let options = FetchOptions {
        username: cli.username.clone(),
        token,
        per_page: cli.repos_per_page,
        max_pages: cli.pages,
        max_repos: cli.limit.map(|l| l as usize),
    };

    // Ctrl-C during the blocking fetch drops whatever was accumulated and
    // exits without printing partial results.
    let exit_code = tokio::select! {
        result = client.fetch_user_repos(&options) => match result {
            Ok(repositories) => {
                print_repositories(&repositories, &cli);
                0
            }
            Err(e @ GitHubError::RateLimitExceeded(_)) => {
                eprintln!("{} {}", "Error:".red(), e);
                eprintln!("Consider setting GITHUB_TOKEN environment variable for higher rate limits.");
                1
            }
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                1
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nOperation cancelled by user.");
            1
        }
    };

    Ok(exit_code)
}

fn print_repositories(repositories: &[RepoRecord], cli: &Cli) {
    if repositories.is_empty() {
        println!("No repositories found for user '{}'", cli.username);
        return;
    }

    println!(
        "{}",
        format!(
            "Found {} repositories for user '{}':",
            repositories.len(),
            cli.username
        )
        .bold()
    );

    match cli.format {
        // Single-line formats print back to back.
        OutputFormat::Default | OutputFormat::Compact => {
            for repo in repositories {
                println!("{}", format_repository(repo, cli.format));
            }
        }
        // Multi-line formats get a leading blank line; detailed records are
        // also separated by one.
        OutputFormat::Detailed | OutputFormat::Json => {
            println!();
            for repo in repositories {
                println!("{}", format_repository(repo, cli.format));
                if cli.format != OutputFormat::Json {
                    println!();
                }
            }
        }
    }
}
