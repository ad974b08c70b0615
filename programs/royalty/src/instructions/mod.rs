pub use init_config::*;
pub use royalty_info::*;
pub use set_admin::*;
pub use set_token_royalty::*;
pub use split_token_royalty::*;

pub mod init_config;
pub mod royalty_info;
pub mod set_admin;
pub mod set_token_royalty;
pub mod split_token_royalty;
