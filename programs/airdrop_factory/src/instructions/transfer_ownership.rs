use anchor_lang::prelude::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for handing a token ledger over to a new admin
 *
 * Access Control: Current ledger admin only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    /// The token ledger to update
    #[account(mut)]
    pub token_ledger: Account<'info, TokenLedger>,

    /// The current admin
    #[account(constraint = admin.key() == token_ledger.admin @ AirdropFactoryError::OnlyTokenAdmin)]
    pub admin: Signer<'info>,
}

pub fn handle_transfer_ownership(ctx: Context<TransferOwnership>, new_admin: Pubkey) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let token_ledger = &mut ctx.accounts.token_ledger;

    let previous_admin = token_ledger.transfer_ownership(&admin, new_admin)?;

    msg!("Token ledger {} admin is now {}", token_ledger.key(), new_admin);

    emit_cpi!(OwnershipTransferred {
        token_ledger: token_ledger.key(),
        previous_admin,
        new_admin,
    });

    Ok(())
}
