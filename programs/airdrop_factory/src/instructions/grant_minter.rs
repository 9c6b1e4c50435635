use anchor_lang::prelude::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for granting the minter role on a token ledger
 *
 * Lets an admin bind a ledger to a claim engine the factory could not grant
 * itself (for instance a ledger whose mint authority is not the factory).
 *
 * Access Control: Ledger admin only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct GrantMinter<'info> {
    /// The token ledger to update
    #[account(mut)]
    pub token_ledger: Account<'info, TokenLedger>,

    /// The ledger admin
    #[account(constraint = admin.key() == token_ledger.admin @ AirdropFactoryError::OnlyTokenAdmin)]
    pub admin: Signer<'info>,
}

pub fn handle_grant_minter(ctx: Context<GrantMinter>, minter: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let token_ledger = &mut ctx.accounts.token_ledger;

    token_ledger.grant_minter(&admin, minter)?;

    emit_cpi!(MinterGranted {
        token_ledger: token_ledger.key(),
        granter: admin,
        minter,
    });

    Ok(())
}
