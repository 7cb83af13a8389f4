use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "account-merge")]
#[command(about = "Merge one user account into another")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Merge the consumed account into the base account and delete it
    Merge(MergeArgs),

    /// Report what a merge would change without changing anything
    Preview(MergeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    /// Identifier of the account that survives the merge
    #[arg(long)]
    pub base: String,

    /// Identifier of the account that is merged away
    #[arg(long)]
    pub consumed: String,
}
