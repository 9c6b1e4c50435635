use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for cloning a merkle whitelist
 *
 * Creates a new whitelist PDA from an approved reference and stores its
 * root. The root cannot be changed afterwards.
 *
 * Access Control: Anyone (the reference must be approved)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct NewMerkleWhitelist<'info> {
    /// The clone factory; its nonce is advanced
    #[account(
        mut,
        seeds = [FACTORY_SEED.as_bytes()],
        bump = factory.bump
    )]
    pub factory: Account<'info, CloneFactory>,

    /// The new whitelist
    /// - Derived from: ["whitelist", factory.nonce + 1]
    #[account(
        init,
        payer = payer,
        space = WhitelistRegistry::LEN,
        seeds = [WHITELIST_SEED.as_bytes(), factory.nonce_seed(1).as_ref()],
        bump
    )]
    pub whitelist_clone: Account<'info, WhitelistRegistry>,

    /// Pays for the new account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_new_merkle_whitelist(
    ctx: Context<NewMerkleWhitelist>,
    reference: Pubkey,
    merkle_root: [u8; 32],
) -> Result<()> {
    let whitelist_key = ctx.accounts.whitelist_clone.key();

    let accounts = &mut *ctx.accounts;
    accounts.factory.clone_whitelist(
        ctx.bumps.whitelist_clone,
        &mut accounts.whitelist_clone,
        reference,
        merkle_root,
    )?;

    msg!("Whitelist clone {} created", whitelist_key);

    emit_cpi!(NewMerkleWhitelistClone {
        whitelist_clone: whitelist_key,
        reference,
        merkle_root,
    });

    Ok(())
}
