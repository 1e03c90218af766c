use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use postprobe::{config::Config, lifecycle, logging};

/// Exercise the full lifecycle of a remote post: create it, poll it, delete
/// it, and report timing and outcome as JSON.
#[derive(Parser)]
#[command(name = "postprobe", version, about)]
struct Cli {
    /// Path to a TOML config file (all fields optional)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the target API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }

    let _guard = logging::init(&config.log_file)?;

    let report = lifecycle::run(&config).await;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
