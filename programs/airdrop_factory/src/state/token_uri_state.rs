use anchor_lang::prelude::*;
use crate::constants::*;

/**
 * Metadata uri of one token id of one ledger
 *
 * Derivation: ["token_uri", token_ledger, token_id]
 *
 * Lifecycle:
 * 1. Created when a campaign binds the token id on a reused ledger, or by set_token_uri
 * 2. Overwritten by later bindings or set_token_uri calls from the ledger admin
 *
 * A token id without a record resolves to the ledger-wide uri.
 */
#[account]
#[derive(Default, Debug)]
pub struct TokenUri {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Ledger the token id belongs to
    pub token_ledger: Pubkey,

    /// Token id the uri describes
    pub token_id: u64,

    pub uri: String,
}

impl TokenUri {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator, fixed fields and the bounded uri
    pub const LEN: usize = 8 + 1 + 32 + 8 + (4 + MAX_URI_LEN);

    /// Fills in the identifying fields of a freshly created account.
    pub fn bind(&mut self, bump: u8, token_ledger: Pubkey, token_id: u64) {
        if self.token_ledger == Pubkey::default() {
            self.bump = bump;
            self.token_ledger = token_ledger;
            self.token_id = token_id;
        }
    }

    pub fn is_bound_to(&self, token_ledger: &Pubkey, token_id: u64) -> bool {
        self.token_ledger == *token_ledger && self.token_id == token_id
    }
}
