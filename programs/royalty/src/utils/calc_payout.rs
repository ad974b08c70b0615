use anchor_lang::prelude::*;

use crate::{RoyaltyError, MAX_BPS};

/// Amount owed for a share of `amount` basis points on `sale_price`,
/// rounded down.
pub fn calc_payout(amount: u16, sale_price: u64) -> Result<u64> {
    if amount == 0 {
        return Ok(0);
    }

    let owed = u128::from(sale_price) * u128::from(amount) / u128::from(MAX_BPS);

    match u64::try_from(owed) {
        Ok(owed) => Ok(owed),
        _ => err!(RoyaltyError::MathOverflow),
    }
}
