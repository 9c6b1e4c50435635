use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for setting the uri of one token id
 *
 * Access Control: Ledger admin only
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct SetTokenUri<'info> {
    /// The token ledger the token id belongs to
    pub token_ledger: Account<'info, TokenLedger>,

    /// Uri record of the token id
    /// - Derived from: ["token_uri", token_ledger_key, token_id]
    #[account(
        init_if_needed,
        payer = admin,
        space = TokenUri::LEN,
        seeds = [
            TOKEN_URI_SEED.as_bytes(),
            token_ledger.key().as_ref(),
            token_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub token_uri: Account<'info, TokenUri>,

    /// The ledger admin, pays for a new record
    #[account(
        mut,
        constraint = admin.key() == token_ledger.admin @ AirdropFactoryError::OnlyTokenAdmin
    )]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_set_token_uri(ctx: Context<SetTokenUri>, token_id: u64, uri: String) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let token_ledger_key = ctx.accounts.token_ledger.key();

    let accounts = &mut *ctx.accounts;
    accounts
        .token_uri
        .bind(ctx.bumps.token_uri, token_ledger_key, token_id);
    accounts
        .token_ledger
        .set_token_uri(&admin, &mut accounts.token_uri, uri.clone())?;

    emit_cpi!(TokenUriSet {
        token_ledger: token_ledger_key,
        token_id,
        uri,
    });

    Ok(())
}
