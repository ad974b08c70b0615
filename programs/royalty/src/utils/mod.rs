pub use calc_payout::*;

pub mod calc_payout;
