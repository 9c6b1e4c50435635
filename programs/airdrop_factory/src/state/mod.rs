pub mod clone_origin;
pub mod factory_state;
pub mod whitelist_state;
pub mod token_ledger_state;
pub mod token_balance_state;
pub mod token_uri_state;
pub mod claim_engine_state;
pub mod claim_record_state;
pub mod campaign;

pub use clone_origin::*;
pub use factory_state::*;
pub use whitelist_state::*;
pub use token_ledger_state::*;
pub use token_balance_state::*;
pub use token_uri_state::*;
pub use claim_engine_state::*;
pub use claim_record_state::*;
pub use campaign::*;
