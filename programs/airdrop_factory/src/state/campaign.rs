use anchor_lang::prelude::*;
use crate::error::*;
use crate::state::{
    CampaignParams, ClaimEngine, CloneFactory, CloneOrigin, ReferenceCategory, TokenLedger,
    TokenMetadata, WhitelistRegistry,
};

/// Addresses of the accounts a clone operation touches
///
/// For a reused whitelist or ledger the key is the existing account's.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CloneKeys {
    pub factory: Pubkey,
    pub token_ledger: Pubkey,
    pub whitelist: Pubkey,
    pub airdrop: Pubkey,
}

/// PDA bumps of the clones created by one operation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CloneBumps {
    pub token_ledger: u8,
    pub whitelist: u8,
    pub airdrop: u8,
}

/// Claim engine settings chosen by whoever creates a campaign
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AirdropConfig {
    /// Approved claim engine reference
    pub reference: Pubkey,
    pub token_id: u64,
    pub start_time: i64,
    /// 0 leaves the campaign open-ended
    pub end_time: i64,
    pub admin: Pubkey,
    pub payout: Pubkey,
}

impl AirdropConfig {
    fn params(&self, keys: &CloneKeys) -> CampaignParams {
        CampaignParams {
            whitelist: keys.whitelist,
            token_ledger: keys.token_ledger,
            token_id: self.token_id,
            start_time: self.start_time,
            end_time: self.end_time,
            admin: self.admin,
            payout: self.payout,
        }
    }
}

/**
 * Clone wiring shared by the new_* instructions
 *
 * Each single clone consumes the next factory nonce once it is initialized,
 * so composite operations that call them in order get consecutive nonces
 * matching the PDA seeds `nonce_seed(1)`, `nonce_seed(2)`, ...
 *
 * Composites run every reference and authorization check before creating
 * anything.
 */
impl CloneFactory {
    #[allow(clippy::too_many_arguments)]
    pub fn clone_erc1155(
        &mut self,
        keys: &CloneKeys,
        bump: u8,
        token_ledger: &mut TokenLedger,
        reference: Pubkey,
        metadata: TokenMetadata,
        admin: Pubkey,
        minter: Option<Pubkey>,
    ) -> Result<u64> {
        self.require_valid_reference(ReferenceCategory::Erc1155, &reference)?;

        let nonce = self.next_nonce(1)?;
        token_ledger.initialize(
            CloneOrigin::new(bump, nonce, reference),
            metadata,
            admin,
            keys.factory,
            minter,
        )?;
        self.reserve_nonces(1)
    }

    pub fn clone_whitelist(
        &mut self,
        bump: u8,
        whitelist: &mut WhitelistRegistry,
        reference: Pubkey,
        merkle_root: [u8; 32],
    ) -> Result<u64> {
        self.require_valid_reference(ReferenceCategory::Whitelist, &reference)?;

        let nonce = self.next_nonce(1)?;
        whitelist.initialize(CloneOrigin::new(bump, nonce, reference), merkle_root)?;
        self.reserve_nonces(1)
    }

    /// Checks that a claim engine may be bound to `token_ledger`.
    ///
    /// `token_admin` must be the ledger admin (a signer in the instruction),
    /// otherwise anyone could make themselves a minter through the factory.
    pub fn require_ledger_binding(
        keys: &CloneKeys,
        token_ledger: &TokenLedger,
        token_admin: &Pubkey,
    ) -> Result<()> {
        token_ledger.require_admin(token_admin)?;
        token_ledger.require_mint_authority(&keys.factory)?;
        require!(
            token_ledger.has_minter_slot_for(&keys.airdrop),
            AirdropFactoryError::MinterCapacityReached
        );
        Ok(())
    }

    /// Clones a claim engine onto `keys.whitelist` and `keys.token_ledger` and
    /// grants it the minter role on the ledger.
    pub fn clone_airdrop(
        &mut self,
        keys: &CloneKeys,
        bump: u8,
        engine: &mut ClaimEngine,
        token_ledger: &mut TokenLedger,
        token_admin: &Pubkey,
        config: &AirdropConfig,
    ) -> Result<u64> {
        self.require_valid_reference(ReferenceCategory::Airdrop, &config.reference)?;
        Self::require_ledger_binding(keys, token_ledger, token_admin)?;

        let nonce = self.next_nonce(1)?;
        engine.initialize(
            CloneOrigin::new(bump, nonce, config.reference),
            config.params(keys),
        )?;
        token_ledger.grant_minter_by_authority(&keys.factory, keys.airdrop)?;
        self.reserve_nonces(1)
    }

    /// Clones a whitelist and a claim engine bound to it and to an existing ledger.
    #[allow(clippy::too_many_arguments)]
    pub fn clone_airdrop_and_whitelist(
        &mut self,
        keys: &CloneKeys,
        bumps: &CloneBumps,
        whitelist: &mut WhitelistRegistry,
        engine: &mut ClaimEngine,
        token_ledger: &mut TokenLedger,
        token_admin: &Pubkey,
        whitelist_reference: Pubkey,
        merkle_root: [u8; 32],
        config: &AirdropConfig,
    ) -> Result<()> {
        self.require_valid_reference(ReferenceCategory::Airdrop, &config.reference)?;
        self.require_valid_reference(ReferenceCategory::Whitelist, &whitelist_reference)?;
        Self::require_ledger_binding(keys, token_ledger, token_admin)?;

        self.clone_whitelist(bumps.whitelist, whitelist, whitelist_reference, merkle_root)?;
        self.clone_airdrop(keys, bumps.airdrop, engine, token_ledger, token_admin, config)?;
        Ok(())
    }

    /// Clones a token ledger, a whitelist and a claim engine wired together.
    ///
    /// `config.admin` administers both the new ledger and the new engine.
    #[allow(clippy::too_many_arguments)]
    pub fn clone_airdrop_and_whitelist_and_erc1155(
        &mut self,
        keys: &CloneKeys,
        bumps: &CloneBumps,
        token_ledger: &mut TokenLedger,
        whitelist: &mut WhitelistRegistry,
        engine: &mut ClaimEngine,
        whitelist_reference: Pubkey,
        erc1155_reference: Pubkey,
        merkle_root: [u8; 32],
        metadata: TokenMetadata,
        config: &AirdropConfig,
    ) -> Result<()> {
        self.require_valid_reference(ReferenceCategory::Airdrop, &config.reference)?;
        self.require_valid_reference(ReferenceCategory::Whitelist, &whitelist_reference)?;
        self.require_valid_reference(ReferenceCategory::Erc1155, &erc1155_reference)?;

        self.clone_erc1155(
            keys,
            bumps.token_ledger,
            token_ledger,
            erc1155_reference,
            metadata,
            config.admin,
            None,
        )?;
        self.clone_whitelist(bumps.whitelist, whitelist, whitelist_reference, merkle_root)?;
        // The ledger was created above for config.admin, who thereby approves the binding
        self.clone_airdrop(keys, bumps.airdrop, engine, token_ledger, &config.admin, config)?;
        Ok(())
    }
}
