use anchor_lang::prelude::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for revoking the minter role on a token ledger
 *
 * Frees the slot of a finished campaign's claim engine. Revoking an account
 * that is not a minter succeeds without an event.
 *
 * Access Control: Ledger admin only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct RevokeMinter<'info> {
    /// The token ledger to update
    #[account(mut)]
    pub token_ledger: Account<'info, TokenLedger>,

    /// The ledger admin
    #[account(constraint = admin.key() == token_ledger.admin @ AirdropFactoryError::OnlyTokenAdmin)]
    pub admin: Signer<'info>,
}

pub fn handle_revoke_minter(ctx: Context<RevokeMinter>, minter: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let token_ledger = &mut ctx.accounts.token_ledger;

    if token_ledger.revoke_minter(&admin, &minter)? {
        msg!("Minter {} revoked on {}", minter, token_ledger.key());

        emit_cpi!(MinterRevoked {
            token_ledger: token_ledger.key(),
            minter,
        });
    }

    Ok(())
}
