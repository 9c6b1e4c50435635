use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating the clone factory
 *
 * Creates the single factory PDA. The signer becomes the factory admin and
 * each allow-list is seeded with one reference, valid from the start.
 *
 * Access Control: First caller only (the PDA can be created once)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    /// The clone factory account (PDA)
    /// - Derived from: ["factory"]
    #[account(
        init,
        payer = admin,
        space = CloneFactory::LEN,
        seeds = [FACTORY_SEED.as_bytes()],
        bump
    )]
    pub factory: Account<'info, CloneFactory>,

    /// Admin of the factory, pays for the account
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_initialize_factory(
    ctx: Context<InitializeFactory>,
    erc1155_reference: Pubkey,
    whitelist_reference: Pubkey,
    airdrop_reference: Pubkey,
) -> Result<()> {
    let factory = &mut ctx.accounts.factory;

    factory.initialize(
        ctx.bumps.factory,
        ctx.accounts.admin.key(),
        erc1155_reference,
        whitelist_reference,
        airdrop_reference,
    )?;

    msg!("Clone factory initialized, admin {}", factory.admin);

    emit_cpi!(FactoryInitialized {
        factory: factory.key(),
        admin: factory.admin,
        erc1155_reference,
        whitelist_reference,
        airdrop_reference,
    });

    Ok(())
}
