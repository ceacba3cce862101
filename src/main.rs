use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use compstrength::config::Config;
use compstrength::pipeline::StrengthPipeline;

#[derive(Parser)]
#[command(
    name = "compstrength",
    version,
    about = "Estimate the field strength of a paragliding competition",
    long_about = None
)]
struct Cli {
    /// Competition name, matched fuzzily against the registry
    competition: String,

    /// Configuration file (TOML); environment variables are used otherwise
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the registry file
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Override the ranking file
    #[arg(long)]
    ranking: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long, default_value = "false")]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long)]
    log_format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => Config::from_env()?,
    };
    if let Some(registry) = cli.registry {
        config.sources.registry_path = registry;
    }
    if let Some(ranking) = cli.ranking {
        config.sources.ranking_path = ranking;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    config.validate()?;

    setup_tracing(&config.logging.format, &config.logging.level, cli.verbose)?;

    tracing::info!(competition = %cli.competition, "compstrength starting");

    let pipeline = StrengthPipeline::from_config(&config)?;
    let report = pipeline.run(&cli.competition).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} {}", report.scores.overall, report.scores.confirmed);
    }

    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("compstrength=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_new(format!("compstrength={level},warn"))
            .context("Invalid log level")?
    };

    // Logs go to stderr so stdout carries only the scores
    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}
