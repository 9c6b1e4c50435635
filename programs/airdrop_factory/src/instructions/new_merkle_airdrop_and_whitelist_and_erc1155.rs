use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for cloning a full campaign bundle in one call
 *
 * Creates a token ledger, a whitelist and a claim engine, with the engine
 * bound to both and holding the minter role on the new ledger from the
 * start. The campaign mints FIRST_TOKEN_ID.
 *
 * Access Control: Anyone (all three references must be approved)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct NewMerkleAirdropAndWhitelistAndErc1155<'info> {
    /// The clone factory; its nonce is advanced by three
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

    /// The new whitelist
    /// - Derived from: ["whitelist", factory.nonce + 2]
    #[account(
        init,
        payer = payer,
        space = WhitelistRegistry::LEN,
        seeds = [WHITELIST_SEED.as_bytes(), factory.nonce_seed(2).as_ref()],
        bump
    )]
    pub whitelist_clone: Account<'info, WhitelistRegistry>,

    /// The new claim engine
    /// - Derived from: ["airdrop", factory.nonce + 3]
    #[account(
        init,
        payer = payer,
        space = ClaimEngine::LEN,
        seeds = [AIRDROP_SEED.as_bytes(), factory.nonce_seed(3).as_ref()],
        bump
    )]
    pub airdrop_clone: Account<'info, ClaimEngine>,

    /// Pays for the new accounts
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Clones and wires a token ledger, a whitelist and a claim engine
 *
 * @param metadata - Name, symbol and uri of the new ledger
 * @param config - Engine settings; `config.admin` also administers the new ledger
 *   and `config.token_id` is FIRST_TOKEN_ID
 */
pub fn handle_new_merkle_airdrop_and_whitelist_and_erc1155(
    ctx: Context<NewMerkleAirdropAndWhitelistAndErc1155>,
    whitelist_reference: Pubkey,
    erc1155_reference: Pubkey,
    merkle_root: [u8; 32],
    metadata: TokenMetadata,
    config: AirdropConfig,
) -> Result<()> {
    let keys = CloneKeys {
        factory: ctx.accounts.factory.key(),
        token_ledger: ctx.accounts.erc1155_clone.key(),
        whitelist: ctx.accounts.whitelist_clone.key(),
        airdrop: ctx.accounts.airdrop_clone.key(),
    };
    let bumps = CloneBumps {
        token_ledger: ctx.bumps.erc1155_clone,
        whitelist: ctx.bumps.whitelist_clone,
        airdrop: ctx.bumps.airdrop_clone,
    };

    let accounts = &mut *ctx.accounts;
    accounts.factory.clone_airdrop_and_whitelist_and_erc1155(
        &keys,
        &bumps,
        &mut accounts.erc1155_clone,
        &mut accounts.whitelist_clone,
        &mut accounts.airdrop_clone,
        whitelist_reference,
        erc1155_reference,
        merkle_root,
        metadata,
        &config,
    )?;

    msg!(
        "Campaign bundle created: airdrop {}, whitelist {}, token ledger {}",
        keys.airdrop,
        keys.whitelist,
        keys.token_ledger
    );

    emit_cpi!(NewERC1155Clone {
        erc1155_clone: keys.token_ledger,
        reference: erc1155_reference,
        admin: config.admin,
    });
    emit_cpi!(NewMerkleWhitelistClone {
        whitelist_clone: keys.whitelist,
        reference: whitelist_reference,
        merkle_root,
    });
    emit_cpi!(MinterGranted {
        token_ledger: keys.token_ledger,
        granter: keys.factory,
        minter: keys.airdrop,
    });
    emit_cpi!(NewMerkle1155AirdropClone {
        airdrop_clone: keys.airdrop,
        merkle_proof_whitelist: keys.whitelist,
        erc1155_clone: keys.token_ledger,
        token_id: config.token_id,
        reference: config.reference,
    });

    Ok(())
}
