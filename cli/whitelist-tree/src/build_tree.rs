use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use airdrop_factory::utils::WhitelistTree;
use whitelist_tree::{build_tree, encode_node, load_whitelist, write_file_atomic};

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Whitelist JSON file: { "<base58 identity>": allocation, ... }
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the merkle root
    #[arg(short, long)]
    root_output: Option<PathBuf>,

    /// Output file for the tree dump (root plus every entry's proof)
    #[arg(short, long)]
    tree_output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct EntryDump {
    identity: String,
    allocation: u64,
    proof: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TreeDump {
    merkle_root: String,
    depth: usize,
    entries: Vec<EntryDump>,
}

fn dump_tree(tree: &WhitelistTree) -> Result<TreeDump> {
    let entries = tree
        .entries()
        .iter()
        .map(|entry| {
            let proof = whitelist_tree::get_proof(tree, &entry.identity, entry.allocation)?;
            Ok(EntryDump {
                identity: entry.identity.to_string(),
                allocation: entry.allocation,
                proof: proof.iter().map(encode_node).collect(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TreeDump {
        merkle_root: encode_node(&tree.root()),
        depth: tree.depth(),
        entries,
    })
}

pub fn run(args: &Args) -> Result<()> {
    println!("Reading whitelist from {:?}...", args.input);
    let entries = load_whitelist(&args.input)?;
    println!("Total entries: {}", entries.len());

    println!("Building merkle tree...");
    let tree = build_tree(entries)?;
    let root = encode_node(&tree.root());
    println!("Merkle root: {}", root);

    if let Some(root_path) = &args.root_output {
        write_file_atomic(root_path, &format!("{}\n", root))?;
    }

    if let Some(tree_path) = &args.tree_output {
        println!("Writing tree dump to {:?}...", tree_path);
        let dump = dump_tree(&tree)?;
        let json = serde_json::to_string_pretty(&dump).context("Failed to serialize tree dump")?;
        write_file_atomic(tree_path, &json)?;
    }

    println!("Done!");
    Ok(())
}
