use anchor_lang::prelude::*;

use crate::RoyaltyError;

#[account]
pub struct RoyaltyConfig {
    /// account allowed to set token allocations (32)
    pub admin: Pubkey,
    /// bump of the royalty config account (1)
    pub bump: u8,
}

impl RoyaltyConfig {
    pub const LEN: usize = 8 + 32 + 1;

    pub fn init(admin: Pubkey, bump: u8) -> Self {
        Self { admin, bump }
    }

    pub fn assert_admin(&self, caller: &Pubkey) -> std::result::Result<(), RoyaltyError> {
        if self.admin != *caller {
            return Err(RoyaltyError::Unauthorized);
        }
        Ok(())
    }

    pub fn set_admin(&mut self, new_admin: Pubkey) -> std::result::Result<(), RoyaltyError> {
        if new_admin == Pubkey::default() {
            return Err(RoyaltyError::InvalidRecipient);
        }
        self.admin = new_admin;
        Ok(())
    }
}
