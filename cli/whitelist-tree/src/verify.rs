use anyhow::Result;

use airdrop_factory::utils::{hash_leaf, verify, MerkleNode};
use whitelist_tree::{parse_identity, parse_node};

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Merkle root (hex)
    #[arg(short, long)]
    root: String,

    /// Claimed identity (base58)
    #[arg(long)]
    identity: String,

    /// Claimed allocation
    #[arg(short, long)]
    allocation: u64,

    /// Proof nodes (hex), leaf to root, comma separated
    #[arg(short, long, value_delimiter = ',')]
    proof: Vec<String>,
}

pub fn run(args: &Args) -> Result<()> {
    let root = parse_node(&args.root)?;
    let identity = parse_identity(&args.identity)?;
    let proof = args
        .proof
        .iter()
        .map(|node| parse_node(node))
        .collect::<Result<Vec<MerkleNode>>>()?;

    if !verify(&proof, root, hash_leaf(&identity, args.allocation)) {
        anyhow::bail!(
            "Proof does not verify: {} with allocation {} is not in the tree of root {}",
            identity,
            args.allocation,
            args.root
        );
    }

    println!("Proof is valid");
    Ok(())
}
