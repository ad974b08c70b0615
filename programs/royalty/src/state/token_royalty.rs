use anchor_lang::prelude::*;

use crate::{RoyaltyError, MAX_BENEFICIARIES, MAX_BPS};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoyaltyShare {
    /// beneficiary entitled to this slice (32)
    pub beneficiary: Pubkey,
    /// amount in basis points (2)
    pub amount: u16,
}

impl RoyaltyShare {
    pub const LEN: usize = 32 + 2;
}

#[account]
pub struct TokenRoyalty {
    /// token this allocation belongs to (8)
    pub token_id: u64,
    /// total allocated royalty in basis points (2)
    pub total_bps: u16,
    /// live beneficiary shares, zeroed entries are removed (4 + 64 * 34)
    pub shares: Vec<RoyaltyShare>,
    /// bump of the token royalty account (1)
    pub bump: u8,
}

impl TokenRoyalty {
    pub const LEN: usize = 8 + 8 + 2 + (4 + MAX_BENEFICIARIES * RoyaltyShare::LEN) + 1;

    pub fn init(token_id: u64, bump: u8) -> Self {
        Self {
            token_id,
            total_bps: 0,
            shares: vec![],
            bump,
        }
    }

    pub fn share_of(&self, beneficiary: &Pubkey) -> u16 {
        self.shares
            .iter()
            .find(|share| share.beneficiary == *beneficiary)
            .map(|share| share.amount)
            .unwrap_or(0)
    }

    /// Upserts one entry, removing it when the amount hits zero, and
    /// keeps the running total in step with the table.
    pub fn set_share(
        &mut self,
        beneficiary: Pubkey,
        amount: u16,
    ) -> std::result::Result<(), RoyaltyError> {
        let current = self.share_of(&beneficiary);
        let prospective = u32::from(self.total_bps)
            .checked_sub(u32::from(current))
            .and_then(|total| total.checked_add(u32::from(amount)))
            .ok_or(RoyaltyError::MathOverflow)?;
        let total = u16::try_from(prospective).map_err(|_| RoyaltyError::MathOverflow)?;

        if amount == 0 {
            self.shares.retain(|share| share.beneficiary != beneficiary);
        } else if let Some(share) = self
            .shares
            .iter_mut()
            .find(|share| share.beneficiary == beneficiary)
        {
            share.amount = amount;
        } else {
            if self.shares.len() >= MAX_BENEFICIARIES {
                return Err(RoyaltyError::TooManyBeneficiaries);
            }
            self.shares.push(RoyaltyShare { beneficiary, amount });
        }

        self.total_bps = total;
        Ok(())
    }

    /// Seeds the allocation table once. Duplicate beneficiaries in the
    /// batch accumulate into a single entry.
    pub fn init_shares(
        &mut self,
        beneficiaries: &[Pubkey],
        values: &[u16],
    ) -> std::result::Result<(), RoyaltyError> {
        if self.total_bps > 0 {
            return Err(RoyaltyError::AlreadyInitialized);
        }
        if beneficiaries.is_empty() || beneficiaries.len() != values.len() {
            return Err(RoyaltyError::InvalidInput);
        }
        if beneficiaries.len() > MAX_BENEFICIARIES {
            return Err(RoyaltyError::TooManyBeneficiaries);
        }

        let mut total: u32 = 0;
        for (beneficiary, value) in beneficiaries.iter().zip(values) {
            if *beneficiary == Pubkey::default() {
                return Err(RoyaltyError::InvalidRecipient);
            }
            if *value == 0 {
                return Err(RoyaltyError::InvalidInput);
            }
            total += u32::from(*value);
        }
        if total > u32::from(MAX_BPS) {
            return Err(RoyaltyError::InvalidInput);
        }

        for (beneficiary, value) in beneficiaries.iter().zip(values) {
            let amount = self
                .share_of(beneficiary)
                .checked_add(*value)
                .ok_or(RoyaltyError::MathOverflow)?;
            self.set_share(*beneficiary, amount)?;
        }

        Ok(())
    }

    /// Moves `value` basis points from `sender` to `recipient`. All
    /// checks run before the first write, so a rejected split leaves
    /// the table untouched.
    pub fn split(
        &mut self,
        sender: Pubkey,
        recipient: Pubkey,
        value: u16,
    ) -> std::result::Result<(), RoyaltyError> {
        if recipient == Pubkey::default() || recipient == sender {
            return Err(RoyaltyError::InvalidRecipient);
        }
        if value == 0 || value > MAX_BPS {
            return Err(RoyaltyError::InvalidAmount);
        }

        let sender_share = self.share_of(&sender);
        if sender_share == 0 {
            return Err(RoyaltyError::NotABeneficiary);
        }
        if value > sender_share {
            return Err(RoyaltyError::InsufficientShare);
        }

        // a full drain frees the sender's slot, so only a partial
        // split to a newcomer can need a fresh one
        let recipient_share = self.share_of(&recipient);
        if recipient_share == 0 && value < sender_share && self.shares.len() >= MAX_BENEFICIARIES {
            return Err(RoyaltyError::TooManyBeneficiaries);
        }

        let debited = sender_share
            .checked_sub(value)
            .ok_or(RoyaltyError::MathOverflow)?;
        let credited = recipient_share
            .checked_add(value)
            .ok_or(RoyaltyError::MathOverflow)?;

        self.set_share(sender, debited)?;
        self.set_share(recipient, credited)?;

        Ok(())
    }
}
