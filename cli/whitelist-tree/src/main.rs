#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod build_tree;
mod prove;
mod verify;

#[derive(Parser, Debug)]
#[command(name = "whitelist-tree")]
#[command(about = "Merkle whitelist tooling for airdrop factory campaigns", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the merkle root of a whitelist and optionally dump every proof
    BuildTree(build_tree::Args),
    /// Generate the proof for one whitelist entry
    Prove(prove::Args),
    /// Check a proof against a merkle root
    Verify(verify::Args),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildTree(args) => build_tree::run(&args)?,
        Commands::Prove(args) => prove::run(&args)?,
        Commands::Verify(args) => verify::run(&args)?,
    }

    Ok(())
}
