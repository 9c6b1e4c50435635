use anchor_lang::prelude::*;

declare_id!("7mVbnPhYFgb5wq2TjFEbAnrrHKiqjXNRKvSKCR8P9Lpt");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use constants::FIRST_TOKEN_ID;
use state::{AirdropConfig, ReferenceCategory, TokenMetadata};

/**
 * Airdrop Factory Program
 *
 * A Solana program for bootstrapping merkle whitelist airdrop campaigns from
 * operator-approved reference implementations. Each campaign gets its own
 * independently stateful clones of three components:
 *
 * Components:
 * - Token Ledger: semi-fungible token with admin, mint authority and minters
 * - Merkle Whitelist: immutable sorted-pair merkle root of (identity, allocation) leaves
 * - Claim Engine: time-windowed, one-claim-per-identity minting against a whitelist
 *
 * Architecture:
 * - Clone Factory PDA: allow-lists of approved references per component, clone nonce
 * - Clone PDAs: one account per component instance, derived from the factory nonce
 * - Claim Record PDAs: one-way claimed marker per (claim engine, identity)
 * - Token Balance PDAs: balance per (ledger, token id, owner)
 * - Token Uri PDAs: metadata uri per (ledger, token id)
 *
 * Workflow:
 * 1. Operator initializes the factory with one reference per component
 * 2. Operator approves or revokes further references
 * 3. Anyone clones and wires a campaign from approved references; reusing a
 *    token ledger takes its admin's signature
 * 4. Whitelisted identities (or relayers on their behalf) claim with merkle proofs
 */
#[program]
pub mod airdrop_factory {
    use super::*;

    /**
     * Creates the clone factory
     *
     * @param erc1155_reference - First approved token ledger reference
     * @param whitelist_reference - First approved whitelist reference
     * @param airdrop_reference - First approved claim engine reference
     *
     * Access Control: Signer becomes the factory admin
     */
    pub fn initialize_factory(
        ctx: Context<InitializeFactory>,
        erc1155_reference: Pubkey,
        whitelist_reference: Pubkey,
        airdrop_reference: Pubkey,
    ) -> Result<()> {
        handle_initialize_factory(ctx, erc1155_reference, whitelist_reference, airdrop_reference)
    }

    /**
     * Approves or revokes a claim engine reference
     *
     * Access Control: Factory admin only
     */
    pub fn set_clonable_airdrop_reference_validity(
        ctx: Context<SetReferenceValidity>,
        reference: Pubkey,
        valid: bool,
    ) -> Result<()> {
        handle_set_reference_validity(ctx, ReferenceCategory::Airdrop, reference, valid)
    }

    /**
     * Approves or revokes a whitelist reference
     *
     * Access Control: Factory admin only
     */
    pub fn set_clonable_whitelist_reference_validity(
        ctx: Context<SetReferenceValidity>,
        reference: Pubkey,
        valid: bool,
    ) -> Result<()> {
        handle_set_reference_validity(ctx, ReferenceCategory::Whitelist, reference, valid)
    }

    /**
     * Approves or revokes a token ledger reference
     *
     * Access Control: Factory admin only
     */
    pub fn set_clonable_erc1155_reference_validity(
        ctx: Context<SetReferenceValidity>,
        reference: Pubkey,
        valid: bool,
    ) -> Result<()> {
        handle_set_reference_validity(ctx, ReferenceCategory::Erc1155, reference, valid)
    }

    /**
     * Clones a token ledger
     *
     * @param minter - Optional account granted the minter role immediately
     *
     * Access Control: Anyone, reference must be approved
     */
    pub fn new_erc1155(
        ctx: Context<NewErc1155>,
        reference: Pubkey,
        name: String,
        symbol: String,
        uri: String,
        admin: Pubkey,
        minter: Option<Pubkey>,
    ) -> Result<()> {
        handle_new_erc1155(ctx, reference, TokenMetadata::new(name, symbol, uri), admin, minter)
    }

    /**
     * Clones a merkle whitelist
     *
     * @param merkle_root - Root stored in the clone, immutable afterwards
     *
     * Access Control: Anyone, reference must be approved
     */
    pub fn new_merkle_whitelist(
        ctx: Context<NewMerkleWhitelist>,
        reference: Pubkey,
        merkle_root: [u8; 32],
    ) -> Result<()> {
        handle_new_merkle_whitelist(ctx, reference, merkle_root)
    }

    /**
     * Clones a claim engine bound to an existing whitelist and token ledger
     *
     * @param config - Reference, token id, window, admin and payout of the engine
     * @param token_uri - Uri stored for the campaign's token id
     *
     * Access Control: Ledger admin, airdrop reference must be approved
     * Note: The whitelist and ledger are not checked against the allow-lists
     */
    pub fn new_merkle_airdrop(
        ctx: Context<NewMerkleAirdrop>,
        config: AirdropConfig,
        token_uri: String,
    ) -> Result<()> {
        handle_new_merkle_airdrop(ctx, config, token_uri)
    }

    /**
     * Clones a whitelist and a claim engine bound to it and to an existing token ledger
     *
     * Access Control: Ledger admin, both references must be approved
     */
    pub fn new_merkle_airdrop_and_whitelist(
        ctx: Context<NewMerkleAirdropAndWhitelist>,
        whitelist_reference: Pubkey,
        merkle_root: [u8; 32],
        config: AirdropConfig,
        token_uri: String,
    ) -> Result<()> {
        handle_new_merkle_airdrop_and_whitelist(ctx, whitelist_reference, merkle_root, config, token_uri)
    }

    /**
     * Clones a token ledger, a whitelist and a claim engine wired together
     *
     * The campaign mints the ledger's first token id; `token_admin` administers
     * both the ledger and the claim engine.
     *
     * Access Control: Anyone, all three references must be approved
     */
    #[allow(clippy::too_many_arguments)]
    pub fn new_merkle_airdrop_and_whitelist_and_erc1155(
        ctx: Context<NewMerkleAirdropAndWhitelistAndErc1155>,
        airdrop_reference: Pubkey,
        whitelist_reference: Pubkey,
        erc1155_reference: Pubkey,
        merkle_root: [u8; 32],
        start_time: i64,
        end_time: i64,
        name: String,
        symbol: String,
        uri: String,
        token_admin: Pubkey,
        payout: Pubkey,
    ) -> Result<()> {
        let config = AirdropConfig {
            reference: airdrop_reference,
            token_id: FIRST_TOKEN_ID,
            start_time,
            end_time,
            admin: token_admin,
            payout,
        };
        handle_new_merkle_airdrop_and_whitelist_and_erc1155(
            ctx,
            whitelist_reference,
            erc1155_reference,
            merkle_root,
            TokenMetadata::new(name, symbol, uri),
            config,
        )
    }

    /**
     * Claims an identity's allocation with merkle proof verification
     *
     * @param proof - Array of 32-byte hashes forming the merkle proof
     * @param allocation - Amount the identity is whitelisted for
     * @param identity - Whitelisted identity
     * @param recipient - Account credited, must equal identity
     *
     * Access Control: Any signer; the proof authenticates the identity
     */
    pub fn claim(
        ctx: Context<Claim>,
        proof: Vec<[u8; 32]>,
        allocation: u64,
        identity: Pubkey,
        recipient: Pubkey,
    ) -> Result<()> {
        handle_claim(ctx, proof, allocation, identity, recipient)
    }

    /**
     * Mints tokens directly on a ledger
     *
     * Access Control: Ledger admin or minter
     */
    pub fn mint(
        ctx: Context<MintTokens>,
        token_id: u64,
        recipient: Pubkey,
        amount: u64,
    ) -> Result<()> {
        handle_mint_tokens(ctx, token_id, recipient, amount)
    }

    /**
     * Grants the minter role on a ledger
     *
     * Access Control: Ledger admin only
     */
    pub fn grant_minter(ctx: Context<GrantMinter>, minter: Pubkey) -> Result<()> {
        handle_grant_minter(ctx, minter)
    }

    /**
     * Revokes the minter role on a ledger, freeing its slot
     *
     * Access Control: Ledger admin only
     */
    pub fn revoke_minter(ctx: Context<RevokeMinter>, minter: Pubkey) -> Result<()> {
        handle_revoke_minter(ctx, minter)
    }

    /**
     * Sets the metadata uri of one token id
     *
     * Access Control: Ledger admin only
     */
    pub fn set_token_uri(ctx: Context<SetTokenUri>, token_id: u64, uri: String) -> Result<()> {
        handle_set_token_uri(ctx, token_id, uri)
    }

    /**
     * Hands a ledger over to a new admin
     *
     * Access Control: Ledger admin only
     */
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_admin: Pubkey) -> Result<()> {
        handle_transfer_ownership(ctx, new_admin)
    }

    /**
     * Sets a campaign's sale configuration
     *
     * Access Control: Claim engine admin only
     */
    pub fn set_sale_config(
        ctx: Context<SetSaleConfig>,
        purchasable_allocation: u64,
        purchase_price: u64,
    ) -> Result<()> {
        handle_set_sale_config(ctx, purchasable_allocation, purchase_price)
    }

    /**
     * Returns the balance of `owner` for `token_id`, zero if never minted
     */
    pub fn balance_of(ctx: Context<BalanceOf>, token_id: u64, owner: Pubkey) -> Result<u64> {
        handle_balance_of(ctx, token_id, owner)
    }

    /**
     * Returns the uri of `token_id`, falling back to the ledger-wide uri
     */
    pub fn token_uri(ctx: Context<TokenUriOf>, token_id: u64) -> Result<String> {
        handle_token_uri(ctx, token_id)
    }
}
