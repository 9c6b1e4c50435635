use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for toggling reference validity
 *
 * Adds a reference to, or removes it from, one of the factory allow-lists.
 * Only future clone creations are affected; clones already created from a
 * revoked reference keep working.
 *
 * Access Control: Factory admin only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetReferenceValidity<'info> {
    /// The clone factory holding the allow-lists
    #[account(
        mut,
        seeds = [FACTORY_SEED.as_bytes()],
        bump = factory.bump
    )]
    pub factory: Account<'info, CloneFactory>,

    /// The factory admin
    #[account(constraint = admin.key() == factory.admin @ AirdropFactoryError::OnlyFactoryAdmin)]
    pub admin: Signer<'info>,
}

pub fn handle_set_reference_validity(
    ctx: Context<SetReferenceValidity>,
    category: ReferenceCategory,
    reference: Pubkey,
    valid: bool,
) -> Result<()> {
    ctx.accounts.factory.set_reference_validity(
        &ctx.accounts.admin.key(),
        category,
        reference,
        valid,
    )?;

    msg!("Reference {} validity set to {} ({:?})", reference, valid, category);

    emit_cpi!(ReferenceValiditySet {
        category,
        reference,
        valid,
    });

    Ok(())
}
