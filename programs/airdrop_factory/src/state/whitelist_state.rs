use anchor_lang::prelude::*;
use crate::error::*;
use crate::state::CloneOrigin;
use crate::utils::{hash_leaf, verify, MerkleNode};

/**
 * Merkle whitelist clone
 *
 * Holds the root of one campaign's whitelist. The root is written exactly
 * once at creation and no instruction can change it afterwards.
 *
 * Derivation: ["whitelist", nonce]
 */
#[account]
#[derive(Default, Debug)]
pub struct WhitelistRegistry {
    /// Reference, nonce and bump this clone was created with
    pub origin: CloneOrigin,

    /// Root of the sorted-pair merkle tree over (identity, allocation) leaves
    pub merkle_root: [u8; 32],
}

impl WhitelistRegistry {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<WhitelistRegistry>();

    pub fn initialize(&mut self, origin: CloneOrigin, merkle_root: [u8; 32]) -> Result<()> {
        require!(self.merkle_root == [0; 32], AirdropFactoryError::AlreadyInitialized);
        // An all-zero root would make every claim fail
        require!(merkle_root != [0; 32], AirdropFactoryError::InvalidMerkleRoot);

        self.origin = origin;
        self.merkle_root = merkle_root;
        Ok(())
    }

    pub fn verify(&self, identity: &Pubkey, allocation: u64, proof: &[MerkleNode]) -> bool {
        verify(proof, self.merkle_root, hash_leaf(identity, allocation))
    }
}
