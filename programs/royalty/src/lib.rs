use anchor_lang::prelude::*;

mod instructions;
mod state;
mod utils;

use instructions::*;

declare_id!("HC83YtJi4xMLHNovsdBLAeBKqc6tuAvQ6SusEfjQvKi8");

#[constant]
pub const MAX_BPS: u16 = 10_000;

/// beneficiary entries a token allocation has room for
pub const MAX_BENEFICIARIES: usize = 64;

#[program]
pub mod royalty {

    use super::*;

    pub fn init_config(ctx: Context<InitConfig>) -> Result<()> {
        init_config_handler(ctx)
    }

    pub fn set_admin(ctx: Context<SetAdmin>, new_admin: Pubkey) -> Result<()> {
        set_admin_handler(ctx, new_admin)
    }

    pub fn set_token_royalty(
        ctx: Context<SetTokenRoyalty>,
        token_id: u64,
        beneficiaries: Vec<Pubkey>,
        values: Vec<u16>,
    ) -> Result<()> {
        set_token_royalty_handler(ctx, token_id, beneficiaries, values)
    }

    pub fn split_token_royalty(
        ctx: Context<SplitTokenRoyalty>,
        token_id: u64,
        recipient: Pubkey,
        value: u16,
    ) -> Result<()> {
        split_token_royalty_handler(ctx, token_id, recipient, value)
    }

    pub fn royalty_info(ctx: Context<RoyaltyInfo>, token_id: u64, sale_price: u64) -> Result<u64> {
        royalty_info_handler(ctx, token_id, sale_price)
    }
}

#[error_code]
pub enum RoyaltyError {
    #[msg("only the royalty admin can use this instruction")]
    Unauthorized,
    #[msg("royalty for this token has already been set")]
    AlreadyInitialized,
    #[msg("beneficiaries and values must pair up, with non-zero values totalling at most 10000")]
    InvalidInput,
    #[msg("invalid recipient address")]
    InvalidRecipient,
    #[msg("value must be greater than zero and at most 10000")]
    InvalidAmount,
    #[msg("sender is not a royalty account")]
    NotABeneficiary,
    #[msg("sender does not have enough royalty")]
    InsufficientShare,
    #[msg("too many royalty beneficiaries for this token")]
    TooManyBeneficiaries,
    #[msg("unable to perform the royalty calculation")]
    MathOverflow,
}
