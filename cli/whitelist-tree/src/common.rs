use airdrop_factory::utils::{MerkleNode, WhitelistEntry, WhitelistTree};
use anchor_lang::prelude::Pubkey;
use anyhow::{Context, Result};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// Whitelist file contents, `{ "<base58 identity>": allocation, ... }`.
///
/// Keys are kept in file order, repeated keys included, so that a duplicated
/// identity is reported instead of silently overwritten.
#[derive(Debug, Default)]
pub struct WhitelistFile(pub Vec<(String, u64)>);

impl<'de> Deserialize<'de> for WhitelistFile {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct WhitelistVisitor;

        impl<'de> Visitor<'de> for WhitelistVisitor {
            type Value = WhitelistFile;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of base58 identities to allocations")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((identity, allocation)) = map.next_entry::<String, u64>()? {
                    entries.push((identity, allocation));
                }
                Ok(WhitelistFile(entries))
            }
        }

        deserializer.deserialize_map(WhitelistVisitor)
    }
}

/// Parses a base58 account address.
///
/// # Errors
/// Returns an error if the string is not a valid 32-byte base58 key
pub fn parse_identity(identity: &str) -> Result<Pubkey> {
    Pubkey::from_str(identity.trim())
        .map_err(|e| anyhow::anyhow!("Invalid identity {:?}: {}", identity, e))
}

/// Parses a 32-byte hex node, with or without "0x" prefix.
pub fn parse_node(node: &str) -> Result<MerkleNode> {
    let cleaned = node.trim().strip_prefix("0x").unwrap_or(node.trim());
    if cleaned.len() != 64 {
        anyhow::bail!(
            "Invalid node length: expected 64 hex chars, got {}",
            cleaned.len()
        );
    }
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(cleaned, &mut bytes)
        .map_err(|e| anyhow::anyhow!("Invalid hex encoding: {}", e))?;
    Ok(bytes)
}

pub fn encode_node(node: &MerkleNode) -> String {
    format!("0x{}", hex::encode(node))
}

/// Parses whitelist JSON text into entries, in file order.
pub fn parse_whitelist(contents: &str) -> Result<Vec<WhitelistEntry>> {
    let file: WhitelistFile =
        serde_json::from_str(contents).context("Failed to parse whitelist JSON")?;
    file.0
        .iter()
        .map(|(identity, allocation)| Ok(WhitelistEntry::new(parse_identity(identity)?, *allocation)))
        .collect()
}

pub fn load_whitelist(path: &Path) -> Result<Vec<WhitelistEntry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read whitelist file {:?}", path))?;
    parse_whitelist(&contents)
}

/// Builds the tree the on-chain whitelist verifies against.
///
/// # Errors
/// Returns an error for an empty whitelist or a repeated identity
pub fn build_tree(entries: Vec<WhitelistEntry>) -> Result<WhitelistTree> {
    WhitelistTree::from_entries(entries)
        .map_err(|e| anyhow::anyhow!("Failed to build merkle tree: {}", e))
}

pub fn get_proof(tree: &WhitelistTree, identity: &Pubkey, allocation: u64) -> Result<Vec<MerkleNode>> {
    tree.proof(identity, allocation).map_err(|e| {
        anyhow::anyhow!(
            "No whitelist entry for {} with allocation {}: {}",
            identity,
            allocation,
            e
        )
    })
}

/// Writes `contents` to a sibling temp file and renames it over `path`.
pub fn write_file_atomic(path: &Path, contents: &str) -> Result<()> {
    let temp_path = path.with_extension("tmp");
    let mut file = File::create(&temp_path).context("Failed to create temp file")?;
    file.write_all(contents.as_bytes())
        .context("Failed to write to temp file")?;
    file.flush().context("Failed to flush temp file")?;
    fs::rename(&temp_path, path).context("Failed to move temp file to output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use airdrop_factory::utils::{hash_leaf, verify};

    fn key(seed: u8) -> Pubkey {
        Pubkey::new_from_array([seed; 32])
    }

    fn whitelist_json(entries: &[(Pubkey, u64)]) -> String {
        let fields: Vec<String> = entries
            .iter()
            .map(|(identity, allocation)| format!("\"{}\": {}", identity, allocation))
            .collect();
        format!("{{{}}}", fields.join(", "))
    }

    #[test]
    fn test_parse_whitelist() {
        let json = whitelist_json(&[(key(1), 5), (key(2), 10)]);
        let entries = parse_whitelist(&json).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], WhitelistEntry::new(key(1), 5));
        assert_eq!(entries[1], WhitelistEntry::new(key(2), 10));
    }

    #[test]
    fn test_duplicate_identity_is_reported() {
        let json = whitelist_json(&[(key(1), 5), (key(2), 10), (key(1), 7)]);
        let entries = parse_whitelist(&json).unwrap();
        assert_eq!(entries.len(), 3);

        let error = build_tree(entries).unwrap_err();
        assert!(error.to_string().contains("DUPLICATE_WHITELIST_ENTRY"));
    }

    #[test]
    fn test_empty_whitelist_is_reported() {
        let entries = parse_whitelist("{}").unwrap();
        let error = build_tree(entries).unwrap_err();
        assert!(error.to_string().contains("EMPTY_WHITELIST"));
    }

    #[test]
    fn test_malformed_whitelist_is_rejected() {
        assert!(parse_whitelist("[1, 2]").is_err());
        assert!(parse_whitelist("{\"not-a-key\": 5}").is_err());
        assert!(parse_whitelist(&format!("{{\"{}\": -1}}", key(1))).is_err());
    }

    #[test]
    fn test_parse_node() {
        let node = [0xab; 32];
        assert_eq!(parse_node(&encode_node(&node)).unwrap(), node);
        assert_eq!(parse_node(&hex::encode(node)).unwrap(), node);

        assert!(parse_node("0x1234").is_err());
        assert!(parse_node(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn test_proof_matches_program_verification() {
        let json = whitelist_json(&[(key(1), 5), (key(2), 10), (key(3), 15)]);
        let tree = build_tree(parse_whitelist(&json).unwrap()).unwrap();

        let proof = get_proof(&tree, &key(3), 15).unwrap();
        assert!(verify(&proof, tree.root(), hash_leaf(&key(3), 15)));

        assert!(get_proof(&tree, &key(3), 16).is_err());
        assert!(get_proof(&tree, &key(4), 15).is_err());
    }

    #[test]
    fn test_write_file_atomic() {
        let path = std::env::temp_dir().join(format!("whitelist-tree-{}.json", std::process::id()));

        write_file_atomic(&path, "{\"ok\": true}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"ok\": true}");
        assert!(!path.with_extension("tmp").exists());
        fs::remove_file(&path).unwrap();
    }
}
