use anchor_lang::prelude::*;
use crate::error::*;
use crate::state::{ClaimRecord, CloneOrigin, TokenBalance, TokenLedger, WhitelistRegistry};
use crate::utils::MerkleNode;

/// Where a point in time falls relative to a campaign's claim window
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimWindow {
    /// now < start_time
    Before,
    /// start_time <= now, and end_time == 0 or now < end_time
    Active,
    /// end_time != 0 and now >= end_time
    Ended,
}

/// Everything a claim engine is bound to at creation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CampaignParams {
    pub whitelist: Pubkey,
    pub token_ledger: Pubkey,
    pub token_id: u64,
    pub start_time: i64,
    /// 0 leaves the campaign open-ended
    pub end_time: i64,
    pub admin: Pubkey,
    pub payout: Pubkey,
}

/// Caller-supplied part of a claim
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClaimRequest {
    pub proof: Vec<MerkleNode>,
    pub allocation: u64,
    /// Whitelisted identity the proof authenticates
    pub identity: Pubkey,
    /// Account credited with the allocation; must equal `identity`
    pub recipient: Pubkey,
}

/**
 * Claim engine (airdrop) clone
 *
 * Binds one whitelist, one token ledger and one token id for a campaign and
 * mints each whitelisted identity its allocation exactly once.
 *
 * Derivation: ["airdrop", nonce]
 *
 * Lifecycle:
 * 1. Created by one of the new_merkle_airdrop* instructions, bindings fixed from then on
 * 2. Claims accepted while the window is active
 * 3. Sale configuration adjustable by the admin at any time
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimEngine {
    /// Reference, nonce and bump this clone was created with
    pub origin: CloneOrigin,

    /// Whitelist clone proofs are checked against
    pub whitelist: Pubkey,

    /// Token ledger allocations are minted on
    pub token_ledger: Pubkey,

    /// Token id minted by this campaign
    pub token_id: u64,

    /// Claims are accepted from this Unix timestamp on
    pub start_time: i64,

    /// Claims are rejected from this Unix timestamp on; 0 means never
    pub end_time: i64,

    /// Owner of the campaign
    pub admin: Pubkey,

    /// Receiver of sale proceeds
    pub payout: Pubkey,

    /// Units purchasable per account through a sale
    pub purchasable_allocation: u64,

    /// Price per purchased unit in lamports
    pub purchase_price: u64,

    /// Sum of all claimed allocations
    pub total_claimed: u64,

    /// Number of successful claims
    pub claim_count: u64,
}

impl ClaimEngine {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimEngine>();

    pub fn initialize(&mut self, origin: CloneOrigin, params: CampaignParams) -> Result<()> {
        require!(params.admin != Pubkey::default(), AirdropFactoryError::InvalidAdmin);
        require!(
            params.end_time == 0 || params.end_time >= params.start_time,
            AirdropFactoryError::InvalidClaimWindow
        );

        self.origin = origin;
        self.whitelist = params.whitelist;
        self.token_ledger = params.token_ledger;
        self.token_id = params.token_id;
        self.start_time = params.start_time;
        self.end_time = params.end_time;
        self.admin = params.admin;
        self.payout = params.payout;
        Ok(())
    }

    /// Checks that the supplied whitelist and ledger are the ones bound at creation.
    pub fn require_bindings(&self, whitelist: &Pubkey, token_ledger: &Pubkey) -> Result<()> {
        require_keys_eq!(*whitelist, self.whitelist, AirdropFactoryError::WhitelistMismatch);
        require_keys_eq!(
            *token_ledger,
            self.token_ledger,
            AirdropFactoryError::TokenLedgerMismatch
        );
        Ok(())
    }

    pub fn window(&self, now: i64) -> ClaimWindow {
        if now < self.start_time {
            ClaimWindow::Before
        } else if self.end_time != 0 && now >= self.end_time {
            ClaimWindow::Ended
        } else {
            ClaimWindow::Active
        }
    }

    pub fn require_active(&self, now: i64) -> Result<()> {
        match self.window(now) {
            ClaimWindow::Before => err!(AirdropFactoryError::ClaimWindowNotStarted),
            ClaimWindow::Ended => err!(AirdropFactoryError::ClaimWindowEnded),
            ClaimWindow::Active => Ok(()),
        }
    }

    /**
     * Mints `request.allocation` to the recipient if the request is a valid first claim
     *
     * @param engine_key - Address of this claim engine (the minter checked on the ledger)
     * @param whitelist - Whitelist clone this engine is bound to
     * @param token_ledger - Token ledger this engine is bound to
     * @param claim_record - Record of `request.identity` on this engine
     * @param recipient_balance - Balance of `request.recipient` for this engine's token id
     * @param now - Current Unix timestamp
     *
     * Checks (all before any write, so a rejection changes nothing):
     * 1. Window is active
     * 2. Identity has not claimed yet
     * 3. Proof authenticates (identity, allocation) and recipient == identity
     * 4. This engine may mint on the ledger and totals cannot overflow
     *
     * Effects then interactions:
     * 5. Claim record marked claimed
     * 6. Allocation minted to the recipient
     *
     * @return the recipient's new balance
     */
    #[allow(clippy::too_many_arguments)]
    pub fn claim(
        &mut self,
        engine_key: &Pubkey,
        whitelist: &WhitelistRegistry,
        token_ledger: &TokenLedger,
        claim_record: &mut ClaimRecord,
        recipient_balance: &mut TokenBalance,
        now: i64,
        request: &ClaimRequest,
    ) -> Result<u64> {
        // ===== CHECKS =====

        self.require_active(now)?;

        require!(
            claim_record.is_bound_to(engine_key, &request.identity),
            AirdropFactoryError::ClaimRecordMismatch
        );
        require!(!claim_record.claimed, AirdropFactoryError::ClaimAlreadyMade);

        require!(request.allocation > 0, AirdropFactoryError::InvalidAmount);

        // The leaf is keyed to the identity alone; crediting anyone else is
        // treated the same as presenting a proof for a different leaf
        require!(
            request.recipient == request.identity
                && whitelist.verify(&request.identity, request.allocation, &request.proof),
            AirdropFactoryError::InvalidMerkleProof
        );

        require!(
            token_ledger.can_mint(engine_key),
            AirdropFactoryError::MinterRoleRequired
        );
        require!(
            recipient_balance.is_bound_to(&self.token_ledger, self.token_id, &request.recipient),
            AirdropFactoryError::BalanceAccountMismatch
        );

        let total_claimed = self
            .total_claimed
            .checked_add(request.allocation)
            .ok_or(AirdropFactoryError::ArithmeticOverflow)?;
        let claim_count = self
            .claim_count
            .checked_add(1)
            .ok_or(AirdropFactoryError::ArithmeticOverflow)?;
        recipient_balance
            .amount
            .checked_add(request.allocation)
            .ok_or(AirdropFactoryError::ArithmeticOverflow)?;

        // ===== EFFECTS =====

        claim_record.mark_claimed(now);
        self.total_claimed = total_claimed;
        self.claim_count = claim_count;

        // ===== INTERACTIONS =====

        token_ledger.mint_to(engine_key, recipient_balance, request.allocation)
    }

    pub fn set_sale_config(
        &mut self,
        caller: &Pubkey,
        purchasable_allocation: u64,
        purchase_price: u64,
    ) -> Result<()> {
        require_keys_eq!(*caller, self.admin, AirdropFactoryError::OnlyAirdropAdmin);

        self.purchasable_allocation = purchasable_allocation;
        self.purchase_price = purchase_price;
        Ok(())
    }
}
