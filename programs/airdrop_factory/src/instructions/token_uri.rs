use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::state::*;

/**
 * Account context for reading the uri of a token id
 *
 * Read-only view: without a record the ledger-wide uri is returned.
 */
#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct TokenUriOf<'info> {
    /// The token ledger the token id belongs to
    pub token_ledger: Account<'info, TokenLedger>,

    /// Uri record of the token id, possibly uninitialized
    /// CHECK: Address is checked through seeds; contents are validated before deserializing
    #[account(
        seeds = [
            TOKEN_URI_SEED.as_bytes(),
            token_ledger.key().as_ref(),
            token_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub token_uri: AccountInfo<'info>,
}

pub fn handle_token_uri(ctx: Context<TokenUriOf>, token_id: u64) -> Result<String> {
    let token_ledger = &ctx.accounts.token_ledger;
    let record_info = &ctx.accounts.token_uri;

    if record_info.data_len() == 0 {
        return Ok(token_ledger.uri_for(None).to_string());
    }

    require!(
        record_info.owner == &crate::ID,
        AirdropFactoryError::TokenUriMismatch
    );

    let record_data = record_info.try_borrow_data()?;
    let record = TokenUri::try_deserialize(&mut record_data.as_ref())?;

    require!(
        record.is_bound_to(&token_ledger.key(), token_id),
        AirdropFactoryError::TokenUriMismatch
    );

    Ok(token_ledger.uri_for(Some(&record)).to_string())
}
