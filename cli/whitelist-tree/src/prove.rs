use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use whitelist_tree::{
    build_tree, encode_node, get_proof, load_whitelist, parse_identity, write_file_atomic,
};

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Whitelist JSON file the campaign root was built from
    #[arg(short, long)]
    input: PathBuf,

    /// Whitelisted identity (base58)
    #[arg(long)]
    identity: String,

    /// Allocation of the identity
    #[arg(short, long)]
    allocation: u64,

    /// Output JSON file; printed to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ProofOutput {
    merkle_root: String,
    identity: String,
    allocation: u64,
    proof: Vec<String>,
}

pub fn run(args: &Args) -> Result<()> {
    let identity = parse_identity(&args.identity)?;
    let tree = build_tree(load_whitelist(&args.input)?)?;
    let proof = get_proof(&tree, &identity, args.allocation)?;

    let output = ProofOutput {
        merkle_root: encode_node(&tree.root()),
        identity: identity.to_string(),
        allocation: args.allocation,
        proof: proof.iter().map(encode_node).collect(),
    };
    let json = serde_json::to_string_pretty(&output).context("Failed to serialize proof")?;

    match &args.output {
        Some(path) => {
            write_file_atomic(path, &json)?;
            println!("Proof written to {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
