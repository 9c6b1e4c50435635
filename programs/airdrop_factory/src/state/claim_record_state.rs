use anchor_lang::prelude::*;

/**
 * Claim record of one identity on one claim engine
 *
 * Derivation: ["claim", claim_engine, identity]
 *
 * Lifecycle:
 * 1. Created on the first claim attempt for the identity (using init_if_needed)
 * 2. Flipped to claimed by the first successful claim
 * 3. Never reset and never closed
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimRecord {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Claim engine the record belongs to
    pub claim_engine: Pubkey,

    /// Whitelisted identity the record tracks
    pub identity: Pubkey,

    /// Whether the identity's allocation has been minted
    pub claimed: bool,

    /// Unix timestamp of the successful claim
    pub claimed_at: i64,
}

impl ClaimRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimRecord>();

    /// Fills in the identifying fields of a freshly created account.
    pub fn bind(&mut self, bump: u8, claim_engine: Pubkey, identity: Pubkey) {
        if self.claim_engine == Pubkey::default() {
            self.bump = bump;
            self.claim_engine = claim_engine;
            self.identity = identity;
        }
    }

    pub fn is_bound_to(&self, claim_engine: &Pubkey, identity: &Pubkey) -> bool {
        self.claim_engine == *claim_engine && self.identity == *identity
    }

    pub(crate) fn mark_claimed(&mut self, now: i64) {
        self.claimed = true;
        self.claimed_at = now;
    }
}
