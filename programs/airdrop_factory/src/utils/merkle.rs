use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use std::collections::{BTreeMap, HashMap};

use crate::error::AirdropFactoryError;

/// A 256-bit merkle tree node (leaf, intermediate or root)
pub type MerkleNode = [u8; 32];

/// One (identity, allocation) pair of a whitelist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitelistEntry {
    pub identity: Pubkey,
    pub allocation: u64,
}

impl WhitelistEntry {
    pub fn new(identity: Pubkey, allocation: u64) -> Self {
        Self { identity, allocation }
    }

    pub fn leaf(&self) -> MerkleNode {
        hash_leaf(&self.identity, self.allocation)
    }
}

/// Leaf digest: sha256(identity || allocation_le)
///
/// Both fields are fixed width (32 + 8 bytes) so no two distinct pairs can
/// produce the same preimage.
pub fn hash_leaf(identity: &Pubkey, allocation: u64) -> MerkleNode {
    hashv(&[identity.as_ref(), &allocation.to_le_bytes()]).to_bytes()
}

/// Sorted-pair combination: sha256(min(a, b) || max(a, b))
///
/// Tree construction, proof generation and verification must all go through
/// this function; changing the ordering invalidates every existing proof.
pub fn hash_pair(a: &MerkleNode, b: &MerkleNode) -> MerkleNode {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    hashv(&[&low[..], &high[..]]).to_bytes()
}

/// Folds `leaf` through every sibling of `proof` and compares against `root`.
///
/// Returns false instead of failing; callers map it to their own error.
pub fn verify(proof: &[MerkleNode], root: MerkleNode, leaf: MerkleNode) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |node, sibling| hash_pair(&node, sibling));
    computed == root
}

/**
 * Merkle tree over a complete whitelist
 *
 * Used off-chain to compute the root a whitelist clone is initialized with
 * and the proofs claimants submit to a claim engine.
 *
 * Construction Rules:
 * - Leaves are ordered by identity so the root does not depend on input order
 * - Adjacent nodes are combined with `hash_pair`
 * - An odd node at the end of a level is promoted unchanged
 * - A proof lists the sibling at every level where one exists, leaf to root
 */
#[derive(Debug, Clone)]
pub struct WhitelistTree {
    entries: Vec<WhitelistEntry>,
    levels: Vec<Vec<MerkleNode>>,
    index_by_identity: HashMap<Pubkey, usize>,
}

impl WhitelistTree {
    /// Builds a tree from a whitelist map; keys are unique by construction.
    pub fn from_map(whitelist: &BTreeMap<Pubkey, u64>) -> Result<Self> {
        Self::from_entries(
            whitelist
                .iter()
                .map(|(identity, allocation)| WhitelistEntry::new(*identity, *allocation)),
        )
    }

    /// Builds a tree from raw entries, rejecting empty input and repeated identities.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = WhitelistEntry>,
    {
        let mut entries: Vec<WhitelistEntry> = entries.into_iter().collect();
        require!(!entries.is_empty(), AirdropFactoryError::EmptyWhitelist);

        entries.sort_by(|a, b| a.identity.cmp(&b.identity));
        require!(
            entries.windows(2).all(|pair| pair[0].identity != pair[1].identity),
            AirdropFactoryError::DuplicateWhitelistEntry
        );

        let index_by_identity = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.identity, index))
            .collect();

        let leaves: Vec<MerkleNode> = entries.iter().map(WhitelistEntry::leaf).collect();
        let levels = Self::build_levels(leaves);

        Ok(Self {
            entries,
            levels,
            index_by_identity,
        })
    }

    fn build_levels(leaves: Vec<MerkleNode>) -> Vec<Vec<MerkleNode>> {
        let mut levels = vec![leaves];

        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let next: Vec<MerkleNode> = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_pair(left, right),
                    // Odd node out: promoted to the next level as-is
                    _ => pair[0],
                })
                .collect();
            levels.push(next);
        }

        levels
    }

    pub fn root(&self) -> MerkleNode {
        // Never empty: construction rejects an empty whitelist
        self.levels[self.levels.len() - 1][0]
    }

    pub fn entries(&self) -> &[WhitelistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of levels above the leaves
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Proof for an exact (identity, allocation) pair of this whitelist.
    pub fn proof(&self, identity: &Pubkey, allocation: u64) -> Result<Vec<MerkleNode>> {
        let index = *self
            .index_by_identity
            .get(identity)
            .ok_or(AirdropFactoryError::WhitelistEntryNotFound)?;
        require!(
            self.entries[index].allocation == allocation,
            AirdropFactoryError::WhitelistEntryNotFound
        );
        Ok(self.proof_at(index))
    }

    fn proof_at(&self, leaf_index: usize) -> Vec<MerkleNode> {
        let mut proof = Vec::with_capacity(self.depth());
        let mut index = leaf_index;

        for level in &self.levels[..self.depth()] {
            let sibling = index ^ 1;
            if sibling < level.len() {
                proof.push(level[sibling]);
            }
            index /= 2;
        }

        proof
    }
}
