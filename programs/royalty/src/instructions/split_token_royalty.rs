use anchor_lang::prelude::*;

use crate::state::TokenRoyalty;

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct SplitTokenRoyalty<'info> {
    #[account(
        mut,
        seeds = [b"token-royalty", token_id.to_le_bytes().as_ref()],
        bump = token_royalty.bump
    )]
    pub token_royalty: Account<'info, TokenRoyalty>,

    pub beneficiary: Signer<'info>,
}

pub fn split_token_royalty_handler(
    ctx: Context<SplitTokenRoyalty>,
    _token_id: u64,
    recipient: Pubkey,
    value: u16,
) -> Result<()> {
    let sender = ctx.accounts.beneficiary.key();
    let token_royalty = &mut ctx.accounts.token_royalty;

    token_royalty.split(sender, recipient, value)?;

    msg!(
        "{} split {} bps of token {} to {}",
        sender,
        value,
        token_royalty.token_id,
        recipient
    );

    Ok(())
}
