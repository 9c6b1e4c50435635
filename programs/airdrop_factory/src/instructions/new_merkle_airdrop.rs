use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for cloning a claim engine onto an existing whitelist and token ledger
 *
 * The whitelist and ledger are taken as-is and are not checked against the
 * factory allow-lists, so one whitelist or ledger can serve several campaigns.
 * The ledger admin must sign: the factory then grants the new engine the
 * minter role, which requires the factory to be the ledger's mint authority.
 *
 * Access Control: Ledger admin (the airdrop reference must be approved)
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(config: AirdropConfig)]
pub struct NewMerkleAirdrop<'info> {
    /// The clone factory; its nonce is advanced
    #[account(
        mut,
        seeds = [FACTORY_SEED.as_bytes()],
        bump = factory.bump
    )]
    pub factory: Account<'info, CloneFactory>,

    /// The new claim engine
    /// - Derived from: ["airdrop", factory.nonce + 1]
    #[account(
        init,
        payer = payer,
        space = ClaimEngine::LEN,
        seeds = [AIRDROP_SEED.as_bytes(), factory.nonce_seed(1).as_ref()],
        bump
    )]
    pub airdrop_clone: Account<'info, ClaimEngine>,

    /// Whitelist the engine will verify proofs against
    pub whitelist: Account<'info, WhitelistRegistry>,

    /// Token ledger the engine will mint on
    /// - Modified to add the engine as a minter
    #[account(mut)]
    pub token_ledger: Account<'info, TokenLedger>,

    /// Uri record of the campaign's token id
    /// - Derived from: ["token_uri", token_ledger_key, token_id]
    #[account(
        init_if_needed,
        payer = payer,
        space = TokenUri::LEN,
        seeds = [
            TOKEN_URI_SEED.as_bytes(),
            token_ledger.key().as_ref(),
            config.token_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub token_uri: Account<'info, TokenUri>,

    /// Admin of the token ledger, approving the new minter
    #[account(constraint = token_admin.key() == token_ledger.admin @ AirdropFactoryError::OnlyTokenAdmin)]
    pub token_admin: Signer<'info>,

    /// Pays for the new accounts
    #[account(mut)]
    pub payer: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Clones a claim engine and wires it to the supplied whitelist and ledger
 *
 * @param config - Reference, token id, window, admin and payout of the engine
 * @param token_uri - Uri stored for the campaign's token id
 */
pub fn handle_new_merkle_airdrop(
    ctx: Context<NewMerkleAirdrop>,
    config: AirdropConfig,
    token_uri: String,
) -> Result<()> {
    let keys = CloneKeys {
        factory: ctx.accounts.factory.key(),
        token_ledger: ctx.accounts.token_ledger.key(),
        whitelist: ctx.accounts.whitelist.key(),
        airdrop: ctx.accounts.airdrop_clone.key(),
    };
    let token_admin = ctx.accounts.token_admin.key();

    let accounts = &mut *ctx.accounts;
    accounts.factory.clone_airdrop(
        &keys,
        ctx.bumps.airdrop_clone,
        &mut accounts.airdrop_clone,
        &mut accounts.token_ledger,
        &token_admin,
        &config,
    )?;

    accounts
        .token_uri
        .bind(ctx.bumps.token_uri, keys.token_ledger, config.token_id);
    accounts
        .token_ledger
        .set_token_uri(&token_admin, &mut accounts.token_uri, token_uri.clone())?;

    msg!("Claim engine clone {} created", keys.airdrop);

    emit_cpi!(MinterGranted {
        token_ledger: keys.token_ledger,
        granter: keys.factory,
        minter: keys.airdrop,
    });
    emit_cpi!(TokenUriSet {
        token_ledger: keys.token_ledger,
        token_id: config.token_id,
        uri: token_uri,
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
