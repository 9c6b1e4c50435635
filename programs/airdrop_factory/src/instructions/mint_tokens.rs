use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for minting directly on a token ledger
 *
 * Access Control: Ledger admin or a granted minter
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(token_id: u64, recipient: Pubkey)]
pub struct MintTokens<'info> {
    /// The token ledger to mint on
    pub token_ledger: Account<'info, TokenLedger>,

    /// Balance credited with the minted amount
    /// - Derived from: ["balance", token_ledger_key, token_id, recipient]
    #[account(
        init_if_needed,
        payer = authority,
        space = TokenBalance::LEN,
        seeds = [
            BALANCE_SEED.as_bytes(),
            token_ledger.key().as_ref(),
            token_id.to_le_bytes().as_ref(),
            recipient.as_ref()
        ],
        bump
    )]
    pub recipient_balance: Account<'info, TokenBalance>,

    /// Admin or minter of the ledger, pays for a new balance account
    #[account(mut)]
    pub authority: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_mint_tokens(
    ctx: Context<MintTokens>,
    token_id: u64,
    recipient: Pubkey,
    amount: u64,
) -> Result<()> {
    let token_ledger_key = ctx.accounts.token_ledger.key();
    let authority = ctx.accounts.authority.key();

    let recipient_balance = &mut ctx.accounts.recipient_balance;
    recipient_balance.bind(ctx.bumps.recipient_balance, token_ledger_key, token_id, recipient);

    let balance = ctx
        .accounts
        .token_ledger
        .mint_to(&authority, recipient_balance, amount)?;

    emit_cpi!(TokensMinted {
        token_ledger: token_ledger_key,
        minter: authority,
        recipient,
        token_id,
        amount,
        balance,
    });

    Ok(())
}
