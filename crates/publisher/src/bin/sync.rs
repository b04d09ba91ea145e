use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use leaderboard::Domain;
use publisher::config::DEFAULT_API_URL;
use publisher::sources::marbles::DEFAULT_STATS_CSV;
use publisher::timestamps::{DEFAULT_TIMESTAMPS_PATH, write_timestamps};
use publisher::{
    DocumentCollector, GitHubClient, GitHubConfig, JsonFileStore, LeaderboardOrchestrator,
    Publisher, TimestampDeriver,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "leaderboard-sync")]
#[command(about = "Publishes stream leaderboards to a GitHub repository", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Format every leaderboard and commit it through the GitHub Contents API
    Publish {
        #[command(flatten)]
        sources: SourceArgs,

        #[arg(long, env = "GITHUB_REPO")]
        repo: String,

        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,

        #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
        api_url: String,
    },
    /// Format every leaderboard and write it to a local directory
    Export {
        #[command(flatten)]
        sources: SourceArgs,

        #[arg(long, default_value = "./export")]
        output: PathBuf,
    },
    /// Write last-updated times derived from the leaderboard commits
    Timestamps {
        #[arg(long, default_value = ".")]
        repo_dir: PathBuf,

        #[arg(long, default_value = DEFAULT_TIMESTAMPS_PATH)]
        output: PathBuf,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// JSON export of the host's user variables
    #[arg(long, env = "STATS_FILE")]
    stats_file: PathBuf,

    #[arg(long, env = "MARBLES_CSV", default_value = DEFAULT_STATS_CSV)]
    marbles_csv: PathBuf,

    /// Comma-separated subset of leaderboards (default: all)
    #[arg(long, value_delimiter = ',')]
    only: Vec<Domain>,
}

impl SourceArgs {
    fn domains(&self) -> Vec<Domain> {
        if self.only.is_empty() {
            Domain::all().to_vec()
        } else {
            self.only.clone()
        }
    }

    fn collector(&self) -> DocumentCollector<JsonFileStore> {
        DocumentCollector::new(JsonFileStore::new(&self.stats_file), &self.marbles_csv)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "leaderboard_sync={},publisher={},leaderboard={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let success = match cli.command {
        Commands::Publish {
            sources,
            repo,
            token,
            api_url,
        } => handle_publish(sources, repo, token, api_url).await?,
        Commands::Export { sources, output } => handle_export(sources, output).await,
        Commands::Timestamps { repo_dir, output } => {
            handle_timestamps(repo_dir, output).await?;
            true
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn handle_publish(
    sources: SourceArgs,
    repo: String,
    token: String,
    api_url: String,
) -> anyhow::Result<bool> {
    let config = GitHubConfig::new(repo, token)
        .context("Invalid GitHub configuration")?
        .with_api_url(api_url);
    let client = GitHubClient::new(&config).context("Failed to create HTTP client")?;

    let domains = sources.domains();
    tracing::info!(
        "Publishing {} leaderboard(s) to {}",
        domains.len(),
        config.repo
    );

    let orchestrator =
        LeaderboardOrchestrator::new(sources.collector(), Publisher::new(client), &config.repo);
    let success = orchestrator.run_domains(&domains).await;

    if success {
        tracing::info!("✓ All leaderboards updated");
    } else {
        tracing::error!("✗ Some leaderboards were not updated");
    }

    Ok(success)
}

async fn handle_export(sources: SourceArgs, output: PathBuf) -> bool {
    tracing::info!("Exporting leaderboards to: {}", output.display());

    let success = sources
        .collector()
        .export_all(&sources.domains(), &output)
        .await;

    if success {
        tracing::info!("Review the files, then publish with:");
        tracing::info!("   leaderboard-sync publish --stats-file <export.json>");
    }

    success
}

async fn handle_timestamps(repo_dir: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    let timestamps = TimestampDeriver::new(&repo_dir).derive().await;

    let path = repo_dir.join(&output);
    write_timestamps(&path, &timestamps)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let show = |date: Option<chrono::DateTime<chrono::FixedOffset>>| {
        date.map(|d| d.to_rfc3339())
            .unwrap_or_else(|| "never".to_string())
    };

    tracing::info!("✓ Timestamps updated: {}", path.display());
    tracing::info!("   Marbles: {}", show(timestamps.marbles));
    tracing::info!("   Gold: {}", show(timestamps.gold));

    Ok(())
}
