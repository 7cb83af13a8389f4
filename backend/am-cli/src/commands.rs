use crate::cli::{Cli, Command, MergeArgs};
use crate::{CliErrorResult, build_request};

use am_core::MergeResult;
use am_merge::MergeOrchestrator;

use log::info;
use sqlx::SqlitePool;

/// Run the parsed command against `pool` and render the result as JSON.
pub async fn run(cli: &Cli, pool: &SqlitePool) -> CliErrorResult<String> {
    let result = match &cli.command {
        Command::Merge(args) => merge(pool, args).await?,
        Command::Preview(args) => preview(pool, args).await?,
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };

    Ok(json)
}

pub async fn merge(pool: &SqlitePool, args: &MergeArgs) -> CliErrorResult<MergeResult> {
    let request = build_request(pool, &args.base, &args.consumed).await?;
    let result = MergeOrchestrator::new(pool.clone()).merge(&request).await?;

    info!(
        "Account {} merged into {}",
        result.consumed_identifier, result.base_identifier
    );

    Ok(result)
}

pub async fn preview(pool: &SqlitePool, args: &MergeArgs) -> CliErrorResult<MergeResult> {
    let request = build_request(pool, &args.base, &args.consumed).await?;
    Ok(MergeOrchestrator::new(pool.clone()).preview(&request).await?)
}
