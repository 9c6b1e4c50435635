use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for claiming an allocation
 *
 * Any signer may submit a claim, which lets a relayer claim on behalf of a
 * whitelisted identity. The claim record is keyed by the identity, so the
 * allocation can be claimed once no matter who submits it.
 *
 * Access Control: Any signer with a valid merkle proof for the identity
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(proof: Vec<[u8; 32]>, allocation: u64, identity: Pubkey, recipient: Pubkey)]
pub struct Claim<'info> {
    /// The claim engine of the campaign
    /// - Modified to update claim totals
    #[account(mut)]
    pub claim_engine: Account<'info, ClaimEngine>,

    /// Whitelist bound to the claim engine, checked in the handler
    pub whitelist: Account<'info, WhitelistRegistry>,

    /// Token ledger bound to the claim engine, checked in the handler
    pub token_ledger: Account<'info, TokenLedger>,

    /// Claim record of the identity on this engine
    /// - Derived from: ["claim", claim_engine_key, identity]
    #[account(
        init_if_needed,
        payer = caller,
        space = ClaimRecord::LEN,
        seeds = [CLAIM_SEED.as_bytes(), claim_engine.key().as_ref(), identity.as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// Balance credited with the allocation
    /// - Derived from: ["balance", token_ledger_key, token_id, recipient]
    #[account(
        init_if_needed,
        payer = caller,
        space = TokenBalance::LEN,
        seeds = [
            BALANCE_SEED.as_bytes(),
            token_ledger.key().as_ref(),
            claim_engine.token_id.to_le_bytes().as_ref(),
            recipient.as_ref()
        ],
        bump
    )]
    pub recipient_balance: Account<'info, TokenBalance>,

    /// Submitter of the claim, pays for any new account
    #[account(mut)]
    pub caller: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Processes a claim with merkle proof verification
 *
 * @param proof - Sibling digests from the identity's leaf to the root
 * @param allocation - Amount the identity is whitelisted for
 * @param identity - Whitelisted identity being claimed for
 * @param recipient - Account credited; must equal identity
 *
 * The whole sequence is one transaction: if minting fails, the claim record
 * write is rolled back with it.
 */
pub fn handle_claim(
    ctx: Context<Claim>,
    proof: Vec<[u8; 32]>,
    allocation: u64,
    identity: Pubkey,
    recipient: Pubkey,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let claim_engine_key = ctx.accounts.claim_engine.key();
    let token_ledger_key = ctx.accounts.token_ledger.key();
    let token_id = ctx.accounts.claim_engine.token_id;

    ctx.accounts
        .claim_engine
        .require_bindings(&ctx.accounts.whitelist.key(), &token_ledger_key)?;

    ctx.accounts
        .claim_record
        .bind(ctx.bumps.claim_record, claim_engine_key, identity);
    ctx.accounts.recipient_balance.bind(
        ctx.bumps.recipient_balance,
        token_ledger_key,
        token_id,
        recipient,
    );

    let request = ClaimRequest {
        proof,
        allocation,
        identity,
        recipient,
    };

    let accounts = &mut *ctx.accounts;
    let balance = accounts.claim_engine.claim(
        &claim_engine_key,
        &accounts.whitelist,
        &accounts.token_ledger,
        &mut accounts.claim_record,
        &mut accounts.recipient_balance,
        now,
        &request,
    )?;

    msg!("Claimed {} for {}, balance {}", allocation, identity, balance);

    emit_cpi!(MerkleClaimMade {
        airdrop: claim_engine_key,
        identity,
        recipient,
        caller: ctx.accounts.caller.key(),
        token_id,
        allocation,
    });

    Ok(())
}
