use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/// The three kinds of component a reference can be approved for
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReferenceCategory {
    Erc1155,
    Whitelist,
    Airdrop,
}

impl ReferenceCategory {
    /// Error raised when a clone is requested from a reference outside this category's allow-list
    pub fn invalid_reference_error(&self) -> AirdropFactoryError {
        match self {
            ReferenceCategory::Erc1155 => AirdropFactoryError::InvalidErc1155Reference,
            ReferenceCategory::Whitelist => AirdropFactoryError::InvalidWhitelistReference,
            ReferenceCategory::Airdrop => AirdropFactoryError::InvalidAirdropReference,
        }
    }
}

/**
 * Clone factory state account
 *
 * Process-wide coordinator holding one allow-list of approved references per
 * component category, plus the nonce every clone PDA is derived from.
 *
 * Derivation: ["factory"]
 *
 * Lifecycle:
 * 1. Created once by initialize_factory, each allow-list seeded with one reference
 * 2. Allow-lists toggled by the admin through set_*_reference_validity
 * 3. Nonce advanced by every clone creation
 * 4. Never closed
 *
 * Design Notes:
 * - Validity is only consulted at clone creation; revoking a reference has
 *   no effect on clones already created from it
 * - The factory keeps no authority over airdrop or whitelist clones, only the
 *   mint authority of token ledgers it creates (used to grant minters)
 */
#[account]
#[derive(Default, Debug)]
pub struct CloneFactory {
    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Admin allowed to toggle reference validity
    pub admin: Pubkey,

    /// Last nonce handed out to a clone
    pub nonce: u64,

    /// Approved token ledger references
    pub erc1155_references: Vec<Pubkey>,

    /// Approved whitelist references
    pub whitelist_references: Vec<Pubkey>,

    /// Approved claim engine references
    pub airdrop_references: Vec<Pubkey>,
}

impl CloneFactory {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator, fixed fields and three bounded vectors
    pub const LEN: usize = 8 + 1 + 32 + 8 + 3 * (4 + 32 * MAX_REFERENCES_PER_CATEGORY);

    pub fn initialize(
        &mut self,
        bump: u8,
        admin: Pubkey,
        erc1155_reference: Pubkey,
        whitelist_reference: Pubkey,
        airdrop_reference: Pubkey,
    ) -> Result<()> {
        require!(admin != Pubkey::default(), AirdropFactoryError::InvalidAdmin);

        self.bump = bump;
        self.admin = admin;
        self.nonce = 0;
        self.erc1155_references = vec![erc1155_reference];
        self.whitelist_references = vec![whitelist_reference];
        self.airdrop_references = vec![airdrop_reference];
        Ok(())
    }

    fn references(&self, category: ReferenceCategory) -> &Vec<Pubkey> {
        match category {
            ReferenceCategory::Erc1155 => &self.erc1155_references,
            ReferenceCategory::Whitelist => &self.whitelist_references,
            ReferenceCategory::Airdrop => &self.airdrop_references,
        }
    }

    fn references_mut(&mut self, category: ReferenceCategory) -> &mut Vec<Pubkey> {
        match category {
            ReferenceCategory::Erc1155 => &mut self.erc1155_references,
            ReferenceCategory::Whitelist => &mut self.whitelist_references,
            ReferenceCategory::Airdrop => &mut self.airdrop_references,
        }
    }

    pub fn is_valid_reference(&self, category: ReferenceCategory, reference: &Pubkey) -> bool {
        self.references(category).contains(reference)
    }

    pub fn require_valid_reference(
        &self,
        category: ReferenceCategory,
        reference: &Pubkey,
    ) -> Result<()> {
        if !self.is_valid_reference(category, reference) {
            return Err(category.invalid_reference_error().into());
        }
        Ok(())
    }

    pub fn require_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, AirdropFactoryError::OnlyFactoryAdmin);
        Ok(())
    }

    /// Adds or removes `reference` from the category's allow-list.
    ///
    /// Setting the current value again is a no-op.
    pub fn set_reference_validity(
        &mut self,
        caller: &Pubkey,
        category: ReferenceCategory,
        reference: Pubkey,
        valid: bool,
    ) -> Result<()> {
        self.require_admin(caller)?;

        let references = self.references_mut(category);
        if valid {
            if !references.contains(&reference) {
                require!(
                    references.len() < MAX_REFERENCES_PER_CATEGORY,
                    AirdropFactoryError::ReferenceRegistryFull
                );
                references.push(reference);
            }
        } else {
            references.retain(|existing| *existing != reference);
        }
        Ok(())
    }

    /// Nonce `offset` steps past the current one, checked.
    pub fn next_nonce(&self, offset: u64) -> Result<u64> {
        let nonce = self
            .nonce
            .checked_add(offset)
            .ok_or(AirdropFactoryError::ArithmeticOverflow)?;
        Ok(nonce)
    }

    /// PDA seed of the clone created `offset` steps from now.
    ///
    /// Saturates instead of wrapping; an overflowing nonce is then rejected by
    /// `reserve_nonces` in the handler, which reverts the account creation.
    pub fn nonce_seed(&self, offset: u64) -> [u8; 8] {
        self.nonce.saturating_add(offset).to_le_bytes()
    }

    /// Reserves `count` consecutive nonces and returns the first one.
    pub fn reserve_nonces(&mut self, count: u64) -> Result<u64> {
        let first = self.next_nonce(1)?;
        self.nonce = self.next_nonce(count)?;
        Ok(first)
    }
}
