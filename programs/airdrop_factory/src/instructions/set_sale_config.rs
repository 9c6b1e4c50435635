use anchor_lang::prelude::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for setting a campaign's sale configuration
 *
 * Stores the purchasable allocation and unit price next to the claim
 * bindings. Claims never read these values.
 *
 * Access Control: Claim engine admin only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetSaleConfig<'info> {
    /// The claim engine to update
    #[account(mut)]
    pub claim_engine: Account<'info, ClaimEngine>,

    /// The claim engine admin
    #[account(constraint = admin.key() == claim_engine.admin @ AirdropFactoryError::OnlyAirdropAdmin)]
    pub admin: Signer<'info>,
}

pub fn handle_set_sale_config(
    ctx: Context<SetSaleConfig>,
    purchasable_allocation: u64,
    purchase_price: u64,
) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    let claim_engine = &mut ctx.accounts.claim_engine;

    claim_engine.set_sale_config(&admin, purchasable_allocation, purchase_price)?;

    emit_cpi!(SaleConfigSet {
        airdrop: claim_engine.key(),
        purchasable_allocation,
        purchase_price,
    });

    Ok(())
}
