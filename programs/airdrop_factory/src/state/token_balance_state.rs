use anchor_lang::prelude::*;

/**
 * Balance of one owner for one token id of one ledger
 *
 * Derivation: ["balance", token_ledger, token_id, owner]
 *
 * Lifecycle:
 * 1. Created on the first mint to the owner (using init_if_needed)
 * 2. Increased by every later mint; no burn exists
 */
#[account]
#[derive(Default, Debug)]
pub struct TokenBalance {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Ledger this balance belongs to
    pub token_ledger: Pubkey,

    /// Token id within the ledger
    pub token_id: u64,

    /// Holder of the balance
    pub owner: Pubkey,

    /// Units held
    pub amount: u64,
}

impl TokenBalance {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<TokenBalance>();

    /// Fills in the identifying fields of a freshly created account.
    pub fn bind(&mut self, bump: u8, token_ledger: Pubkey, token_id: u64, owner: Pubkey) {
        if self.token_ledger == Pubkey::default() {
            self.bump = bump;
            self.token_ledger = token_ledger;
            self.token_id = token_id;
            self.owner = owner;
        }
    }

    pub fn is_bound_to(&self, token_ledger: &Pubkey, token_id: u64, owner: &Pubkey) -> bool {
        self.token_ledger == *token_ledger && self.token_id == token_id && self.owner == *owner
    }
}
