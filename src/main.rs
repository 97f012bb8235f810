use clap::Parser;
use tracing_subscriber::EnvFilter;

use pkgcard::card::aggregate::aggregate;
use pkgcard::card::rollout::{RankStrategy, rank};
use pkgcard::fetch::github::GitHubSource;
use pkgcard::fetch::npm::NpmSource;
use pkgcard::render::card::{Accent, RenderOptions, render_card, render_error};

#[derive(Parser)]
#[command(name = "pkgcard")]
#[command(version, about = "Renders a summary card for a published npm package")]
struct Cli {
    /// Package name on the npm registry (e.g., "react" or "@types/node")
    package: String,

    /// Source repository as owner/name (e.g., "facebook/react")
    #[arg(long)]
    repo: String,

    /// Version to highlight in the rollout (exact string match)
    #[arg(long)]
    version: Option<String>,

    /// Accent color for the card
    #[arg(long, value_enum, default_value_t = Accent::Blue)]
    accent: Accent,

    /// Maximum number of rollout rows
    #[arg(long, default_value_t = 5)]
    limit: usize,

    /// Rollout ordering
    #[arg(long, value_enum, default_value_t = RankStrategy::Count)]
    sort: RankStrategy,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let npm = NpmSource::default();
    let github = GitHubSource::default();

    let options = RenderOptions {
        accent: cli.accent,
        use_colors: !cli.no_color,
    };

    match aggregate(&npm, &github, &cli.package, &cli.repo).await {
        Ok(data) => {
            let rollout = rank(
                &data.stats.versions,
                cli.limit,
                cli.sort,
                cli.version.as_deref(),
            );
            print!(
                "{}",
                render_card(
                    &cli.repo,
                    cli.version.as_deref().unwrap_or(""),
                    &data,
                    &rollout,
                    &options,
                )
            );
        }
        Err(error) => {
            // The aggregator already logged the cause; show the placeholder
            print!("{}", render_error(&cli.package, &error, &options));
        }
    }

    Ok(())
}
