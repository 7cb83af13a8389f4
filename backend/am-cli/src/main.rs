//! account-merge - fold one user account into another
//!
//! # Examples
//!
//! ```bash
//! # See what merging @jdoe2 into @jdoe would change
//! account-merge preview --base jdoe --consumed jdoe2 --pretty
//!
//! # Merge it for real
//! account-merge merge --base jdoe --consumed jdoe2
//! ```

use am_cli::{Cli, CliError, CliErrorResult, logger};
use am_config::Config;
use am_db::{PoolSettings, open_pool};

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(&cli).await {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: &Cli) -> CliErrorResult<String> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    if let Some(parent) = log_file.as_deref().and_then(Path::parent) {
        std::fs::create_dir_all(parent).map_err(|source| CliError::Io {
            path: parent.display().to_string(),
            source,
        })?;
    }

    logger::initialize(&config.logging, log_file.as_deref())?;

    info!("account-merge v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let output = run_command(cli, &config).await;
    if let Err(e) = &output {
        error!("{}", e);
    }
    output
}

async fn run_command(cli: &Cli, config: &Config) -> CliErrorResult<String> {
    let settings = PoolSettings {
        max_connections: config.database.max_connections,
        busy_timeout: config.database.busy_timeout(),
    };
    let pool = open_pool(&config.database_path()?, settings).await?;

    let output = am_cli::run(cli, &pool).await;
    pool.close().await;

    output
}
