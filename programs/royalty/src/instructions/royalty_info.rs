use anchor_lang::prelude::*;

use crate::{state::TokenRoyalty, utils::calc_payout};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct RoyaltyInfo<'info> {
    /// CHECK: read manually so a token with no allocation yet quotes zero
    #[account(
        seeds = [b"token-royalty", token_id.to_le_bytes().as_ref()],
        bump
    )]
    pub token_royalty: UncheckedAccount<'info>,

    pub beneficiary: Signer<'info>,
}

pub fn royalty_info_handler(
    ctx: Context<RoyaltyInfo>,
    _token_id: u64,
    sale_price: u64,
) -> Result<u64> {
    let info = ctx.accounts.token_royalty.to_account_info();

    let amount = if info.data_is_empty() {
        0
    } else {
        let data = info.try_borrow_data()?;
        let token_royalty = TokenRoyalty::try_deserialize(&mut data.as_ref())?;
        token_royalty.share_of(&ctx.accounts.beneficiary.key())
    };

    calc_payout(amount, sale_price)
}
