use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::state::*;

/**
 * Account context for reading a balance
 *
 * Read-only view: the balance account may not exist yet, in which case the
 * balance is zero.
 */
#[derive(Accounts)]
#[instruction(token_id: u64, owner: Pubkey)]
pub struct BalanceOf<'info> {
    /// The token ledger the balance belongs to
    pub token_ledger: Account<'info, TokenLedger>,

    /// Balance account of the owner, possibly uninitialized
    /// CHECK: Address is checked through seeds; contents are validated before deserializing
    #[account(
        seeds = [
            BALANCE_SEED.as_bytes(),
            token_ledger.key().as_ref(),
            token_id.to_le_bytes().as_ref(),
            owner.as_ref()
        ],
        bump
    )]
    pub balance: AccountInfo<'info>,
}

pub fn handle_balance_of(ctx: Context<BalanceOf>, token_id: u64, owner: Pubkey) -> Result<u64> {
    let balance_info = &ctx.accounts.balance;

    if balance_info.data_len() == 0 {
        return Ok(0);
    }

    require!(
        balance_info.owner == &crate::ID,
        AirdropFactoryError::BalanceAccountMismatch
    );

    let balance_data = balance_info.try_borrow_data()?;
    let balance = TokenBalance::try_deserialize(&mut balance_data.as_ref())?;

    require!(
        balance.is_bound_to(&ctx.accounts.token_ledger.key(), token_id, &owner),
        AirdropFactoryError::BalanceAccountMismatch
    );

    Ok(balance.amount)
}
