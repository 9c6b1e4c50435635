use anchor_lang::prelude::*;

/// Provenance stamped into every clone at creation
/// - `reference` is the approved template the clone was created from
/// - `nonce` is the factory nonce its PDA was derived from
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct CloneOrigin {
    pub bump: u8,
    pub nonce: u64,
    pub reference: Pubkey,
}

impl CloneOrigin {
    pub fn new(bump: u8, nonce: u64, reference: Pubkey) -> Self {
        Self { bump, nonce, reference }
    }
}
