use anchor_lang::prelude::*;

use crate::state::RoyaltyConfig;

#[derive(Accounts)]
pub struct SetAdmin<'info> {
    #[account(
        mut,
        seeds = [b"royalty-config"],
        bump = config.bump
    )]
    pub config: Account<'info, RoyaltyConfig>,

    pub authority: Signer<'info>,
}

pub fn set_admin_handler(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let config = &mut ctx.accounts.config;

    config.assert_admin(&authority)?;
    config.set_admin(new_admin)?;

    msg!("royalty admin set to {}", new_admin);

    Ok(())
}
