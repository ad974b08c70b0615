use anchor_lang::prelude::*;

use crate::{
    state::{RoyaltyConfig, TokenRoyalty},
    RoyaltyError,
};

#[derive(Accounts)]
#[instruction(token_id: u64)]
pub struct SetTokenRoyalty<'info> {
    #[account(
        seeds = [b"royalty-config"],
        bump = config.bump
    )]
    pub config: Account<'info, RoyaltyConfig>,

    #[account(
        init_if_needed,
        payer = authority,
        space = TokenRoyalty::LEN,
        seeds = [b"token-royalty", token_id.to_le_bytes().as_ref()],
        bump
    )]
    pub token_royalty: Account<'info, TokenRoyalty>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn set_token_royalty_handler(
    ctx: Context<SetTokenRoyalty>,
    token_id: u64,
    beneficiaries: Vec<Pubkey>,
    values: Vec<u16>,
) -> Result<()> {
    ctx.accounts
        .config
        .assert_admin(&ctx.accounts.authority.key())?;

    let token_royalty = &mut ctx.accounts.token_royalty;

    // the account survives across calls, so an existing table means a repeat
    require!(
        token_royalty.total_bps == 0,
        RoyaltyError::AlreadyInitialized
    );

    **token_royalty = TokenRoyalty::init(token_id, ctx.bumps.token_royalty);
    token_royalty.init_shares(&beneficiaries, &values)?;

    msg!(
        "royalty for token {} set across {} beneficiaries",
        token_id,
        token_royalty.shares.len()
    );

    Ok(())
}
