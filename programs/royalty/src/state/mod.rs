pub use config::*;
pub use token_royalty::*;

pub mod config;
pub mod token_royalty;
