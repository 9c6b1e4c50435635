pub mod initialize_factory;
pub mod set_reference_validity;
pub mod new_erc1155;
pub mod new_merkle_whitelist;
pub mod new_merkle_airdrop;
pub mod new_merkle_airdrop_and_whitelist;
pub mod new_merkle_airdrop_and_whitelist_and_erc1155;
pub mod claim;
pub mod mint_tokens;
pub mod grant_minter;
pub mod revoke_minter;
pub mod transfer_ownership;
pub mod set_sale_config;
pub mod balance_of;
pub mod set_token_uri;
pub mod token_uri;

pub use initialize_factory::*;
pub use set_reference_validity::*;
pub use new_erc1155::*;
pub use new_merkle_whitelist::*;
pub use new_merkle_airdrop::*;
pub use new_merkle_airdrop_and_whitelist::*;
pub use new_merkle_airdrop_and_whitelist_and_erc1155::*;
pub use claim::*;
pub use mint_tokens::*;
pub use grant_minter::*;
pub use revoke_minter::*;
pub use transfer_ownership::*;
pub use set_sale_config::*;
pub use balance_of::*;
pub use set_token_uri::*;
pub use token_uri::*;
