use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::state::{CloneOrigin, TokenBalance, TokenUri};

/// Descriptive metadata of a token ledger
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

impl TokenMetadata {
    pub fn new(name: String, symbol: String, uri: String) -> Self {
        Self { name, symbol, uri }
    }

    pub fn validate(&self) -> Result<()> {
        require!(
            self.name.len() <= MAX_NAME_LEN
                && self.symbol.len() <= MAX_SYMBOL_LEN
                && self.uri.len() <= MAX_URI_LEN,
            AirdropFactoryError::MetadataTooLong
        );
        Ok(())
    }
}

/**
 * Semi-fungible token ledger clone
 *
 * Tracks mint permissions for a multi-id token. Balances themselves live in
 * one TokenBalance PDA per (ledger, token id, owner).
 *
 * Derivation: ["token_ledger", nonce]
 *
 * Per-token-id uris live in TokenUri PDAs; `uri` is the fallback for ids
 * without one.
 *
 * Roles:
 * - admin: may mint, grant and revoke minters, set token uris and hand the admin role over
 * - mint_authority: may grant minters once the admin approved a binding
 *   (the factory PDA for factory-made clones)
 * - minters: may mint (claim engines bound to this ledger)
 */
#[account]
#[derive(Default, Debug)]
pub struct TokenLedger {
    /// Reference, nonce and bump this clone was created with
    pub origin: CloneOrigin,

    /// Owner of the ledger
    pub admin: Pubkey,

    /// Account allowed to grant the minter role alongside the admin
    pub mint_authority: Pubkey,

    /// Accounts allowed to mint
    pub minters: Vec<Pubkey>,

    pub name: String,
    pub symbol: String,
    pub uri: String,
}

impl TokenLedger {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator, origin, three keys, the bounded minter
    ///   list and the three bounded strings
    pub const LEN: usize = 8
        + (1 + 8 + 32)
        + 32
        + 32
        + (4 + 32 * MAX_MINTERS)
        + (4 + MAX_NAME_LEN)
        + (4 + MAX_SYMBOL_LEN)
        + (4 + MAX_URI_LEN);

    pub fn initialize(
        &mut self,
        origin: CloneOrigin,
        metadata: TokenMetadata,
        admin: Pubkey,
        mint_authority: Pubkey,
        minter: Option<Pubkey>,
    ) -> Result<()> {
        require!(admin != Pubkey::default(), AirdropFactoryError::InvalidAdmin);
        metadata.validate()?;

        self.origin = origin;
        self.admin = admin;
        self.mint_authority = mint_authority;
        self.minters = minter
            .filter(|minter| *minter != Pubkey::default())
            .into_iter()
            .collect();
        self.name = metadata.name;
        self.symbol = metadata.symbol;
        self.uri = metadata.uri;
        Ok(())
    }

    pub fn can_mint(&self, account: &Pubkey) -> bool {
        *account == self.admin || self.minters.contains(account)
    }

    pub fn require_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, AirdropFactoryError::OnlyTokenAdmin);
        Ok(())
    }

    /// Grants `minter` the right to mint. Granting an existing minter is a no-op.
    pub fn grant_minter(&mut self, caller: &Pubkey, minter: Pubkey) -> Result<()> {
        self.require_admin(caller)?;
        self.add_minter(minter)
    }

    /// Grant path of the mint authority (the factory binding a claim engine).
    ///
    /// The factory only takes it after the ledger admin signed for the binding.
    pub fn grant_minter_by_authority(&mut self, authority: &Pubkey, minter: Pubkey) -> Result<()> {
        self.require_mint_authority(authority)?;
        self.add_minter(minter)
    }

    pub fn require_mint_authority(&self, authority: &Pubkey) -> Result<()> {
        require_keys_eq!(
            *authority,
            self.mint_authority,
            AirdropFactoryError::MintAuthorityRequired
        );
        Ok(())
    }

    /// Whether `minter` could be added without exceeding MAX_MINTERS
    pub fn has_minter_slot_for(&self, minter: &Pubkey) -> bool {
        self.minters.contains(minter) || self.minters.len() < MAX_MINTERS
    }

    fn add_minter(&mut self, minter: Pubkey) -> Result<()> {
        if self.minters.contains(&minter) {
            return Ok(());
        }
        require!(
            self.minters.len() < MAX_MINTERS,
            AirdropFactoryError::MinterCapacityReached
        );
        self.minters.push(minter);
        Ok(())
    }

    /// Removes `minter` and returns whether it held the role.
    pub fn revoke_minter(&mut self, caller: &Pubkey, minter: &Pubkey) -> Result<bool> {
        self.require_admin(caller)?;

        let before = self.minters.len();
        self.minters.retain(|existing| existing != minter);
        Ok(self.minters.len() != before)
    }

    /// Sets the uri of the token id `record` is bound to.
    pub fn set_token_uri(&self, caller: &Pubkey, record: &mut TokenUri, uri: String) -> Result<()> {
        self.require_admin(caller)?;
        require!(uri.len() <= MAX_URI_LEN, AirdropFactoryError::MetadataTooLong);

        record.uri = uri;
        Ok(())
    }

    /// Uri of a token id: its own record when set, the ledger-wide uri otherwise.
    pub fn uri_for<'a>(&'a self, record: Option<&'a TokenUri>) -> &'a str {
        match record {
            Some(record) if !record.uri.is_empty() => &record.uri,
            _ => &self.uri,
        }
    }

    /// Replaces the admin and returns the previous one.
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_admin: Pubkey) -> Result<Pubkey> {
        self.require_admin(caller)?;
        require!(new_admin != Pubkey::default(), AirdropFactoryError::InvalidAdmin);

        let previous_admin = self.admin;
        self.admin = new_admin;
        Ok(previous_admin)
    }

    /// Credits `amount` to `balance` and returns the new balance.
    ///
    /// The balance account must already be bound to this ledger; PDA seeds
    /// enforce that in the instruction context.
    pub fn mint_to(&self, minter: &Pubkey, balance: &mut TokenBalance, amount: u64) -> Result<u64> {
        require!(self.can_mint(minter), AirdropFactoryError::MinterRoleRequired);
        require!(amount > 0, AirdropFactoryError::InvalidAmount);

        let new_amount = balance
            .amount
            .checked_add(amount)
            .ok_or(AirdropFactoryError::ArithmeticOverflow)?;
        balance.amount = new_amount;
        Ok(new_amount)
    }
}
