use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for cloning a token ledger
 *
 * Creates a new token ledger PDA from an approved reference. The factory
 * PDA becomes its mint authority so later claim engines can be granted the
 * minter role on it.
 *
 * Access Control: Anyone (the reference must be approved)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct NewErc1155<'info> {
    /// The clone factory; its nonce is advanced
    #[account(
        mut,
        seeds = [FACTORY_SEED.as_bytes()],
        bump = factory.bump
    )]
    pub factory: Account<'info, CloneFactory>,

    /// The new token ledger
    /// - Derived from: ["token_ledger", factory.nonce + 1]
    #[account(
        init,
        payer = payer,
        space = TokenLedger::LEN,
        seeds = [TOKEN_LEDGER_SEED.as_bytes(), factory.nonce_seed(1).as_ref()],
        bump
    )]
    pub erc1155_clone: Account<'info, TokenLedger>,

    /// Pays for the new account
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Clones and initializes a token ledger
 *
 * @param reference - Approved token ledger reference
 * @param metadata - Name, symbol and uri of the new ledger
 * @param admin - Owner of the new ledger
 * @param minter - Optional account granted the minter role right away
 */
pub fn handle_new_erc1155(
    ctx: Context<NewErc1155>,
    reference: Pubkey,
    metadata: TokenMetadata,
    admin: Pubkey,
    minter: Option<Pubkey>,
) -> Result<()> {
    let keys = CloneKeys {
        factory: ctx.accounts.factory.key(),
        token_ledger: ctx.accounts.erc1155_clone.key(),
        ..CloneKeys::default()
    };

    let accounts = &mut *ctx.accounts;
    accounts.factory.clone_erc1155(
        &keys,
        ctx.bumps.erc1155_clone,
        &mut accounts.erc1155_clone,
        reference,
        metadata,
        admin,
        minter,
    )?;

    msg!("Token ledger clone {} created", keys.token_ledger);

    emit_cpi!(NewERC1155Clone {
        erc1155_clone: keys.token_ledger,
        reference,
        admin,
    });

    Ok(())
}
