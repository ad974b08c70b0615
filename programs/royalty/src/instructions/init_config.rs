use anchor_lang::prelude::*;

use crate::{program::Royalty, state::RoyaltyConfig, RoyaltyError};

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(
        init,
        space = RoyaltyConfig::LEN,
        payer = authority,
        seeds = [b"royalty-config"],
        bump
    )]
    pub config: Account<'info, RoyaltyConfig>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        constraint = program.programdata_address()? == Some(program_data.key()) @ RoyaltyError::Unauthorized
    )]
    pub program: Program<'info, Royalty>,

    #[account(
        constraint = program_data.upgrade_authority_address == Some(authority.key()) @ RoyaltyError::Unauthorized
    )]
    pub program_data: Account<'info, ProgramData>,

    pub system_program: Program<'info, System>,
}

pub fn init_config_handler(ctx: Context<InitConfig>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let bump = ctx.bumps.config;

    **config = RoyaltyConfig::init(ctx.accounts.authority.key(), bump);

    Ok(())
}
