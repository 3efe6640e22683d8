mod audit;
mod config;
mod github;
mod report;

use clap::Parser;
use tracing::{debug, info, info_span};
use tracing_subscriber::EnvFilter;

use audit::PathFilter;
use github::{Commit, CommitSource, GitHubClient, GitHubError};

/// test-auditor — audits recent GitHub commit history for issue-tracker
/// tickets that never show up in a test commit, contributors who changed
/// production code without writing tests, and contributors who only wrote
/// tests.
#[derive(Parser, Debug)]
#[command(name = "test-auditor", version, about)]
struct Cli {
    /// Production code repository (e.g. org/service)
    prod_repo: String,

    /// Path prefix selecting production code within the repo
    #[arg(long, default_value = "")]
    prod_path: String,

    /// Path prefix excluded from production code
    #[arg(long, default_value = "")]
    prod_exclude_path: String,

    /// Test code repository (defaults to the production repo)
    #[arg(long)]
    test_repo: Option<String>,

    /// Path prefix selecting test code within the test repo
    #[arg(long, default_value = "")]
    test_path: String,

    /// Lookback window in days
    #[arg(long, default_value_t = 90)]
    lookback: u32,

    /// GitHub token (defaults to config file, then GITHUB_ACCESS_TOKEN)
    #[arg(long)]
    github_token: Option<String>,

    /// GitHub hostname (defaults to config file, then github.com)
    #[arg(long)]
    github_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("loading configuration");
    let config = config::Config::load()?;
    let token = cli
        .github_token
        .clone()
        .or_else(|| config.github_token())
        .ok_or(GitHubError::MissingToken)?;
    let host = cli.github_url.clone().unwrap_or_else(|| config.github_host());

    let test_repo = cli.test_repo.clone().unwrap_or_else(|| cli.prod_repo.clone());
    let _main_span =
        info_span!("test_audit", prod_repo = %cli.prod_repo, test_repo = %test_repo).entered();

    let client = GitHubClient::new(&host, token);
    let prod_filter = PathFilter::new(&cli.prod_path, &cli.prod_exclude_path);
    let test_filter = PathFilter::new(&cli.test_path, "");

    info!(lookback_days = cli.lookback, "fetching commit history");
    let (prod_commits, test_commits) = tokio::join!(
        fetch_and_filter(&client, &cli.prod_repo, cli.lookback, &prod_filter),
        fetch_and_filter(&client, &test_repo, cli.lookback, &test_filter),
    );
    let prod_commits = prod_commits?;
    let test_commits = test_commits?;
    info!(
        prod = prod_commits.len(),
        test = test_commits.len(),
        "commits after path filtering"
    );

    let result = audit::run(&prod_commits, &test_commits);
    report::print(&result);
    info!(
        uncovered_tickets = result.reconciliation.uncovered_tickets.len(),
        non_testers = result.reconciliation.non_testers.len(),
        pure_testers = result.reconciliation.pure_testers.len(),
        "done"
    );

    Ok(())
}

/// Fetch one repo's commit window and keep the commits the path filter
/// accepts. The fetcher returns everything in the window; the filter is
/// applied here rather than trusted to the remote side.
async fn fetch_and_filter(
    source: &impl CommitSource,
    repo: &str,
    lookback_days: u32,
    filter: &PathFilter,
) -> Result<Vec<Commit>, GitHubError> {
    let commits = source.fetch(repo, lookback_days).await?;
    let total = commits.len();
    let kept: Vec<Commit> = commits.into_iter().filter(|c| filter.matches(c)).collect();
    debug!(repo = %repo, total, kept = kept.len(), "applied path filter");
    Ok(kept)
}
