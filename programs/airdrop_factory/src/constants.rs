use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines the constant values used throughout the airdrop factory program.
 * These constants control PDA derivation and the bounds of every variable-length account field.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for the clone factory PDA
/// - Used in: ["factory"]
/// - One factory per program; it owns the reference allow-lists and the clone nonce
pub const FACTORY_SEED: &str = "factory";

/// Seed for token ledger clones
/// - Used in: ["token_ledger", nonce]
pub const TOKEN_LEDGER_SEED: &str = "token_ledger";

/// Seed for merkle whitelist clones
/// - Used in: ["whitelist", nonce]
pub const WHITELIST_SEED: &str = "whitelist";

/// Seed for claim engine (airdrop) clones
/// - Used in: ["airdrop", nonce]
pub const AIRDROP_SEED: &str = "airdrop";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", claim_engine, identity]
/// - Keyed by the whitelisted identity, not by the transaction signer,
///   so a relayed claim still lands on the identity's record
pub const CLAIM_SEED: &str = "claim";

/// Seed for token balance PDA derivation
/// - Used in: ["balance", token_ledger, token_id, owner]
pub const BALANCE_SEED: &str = "balance";

/// Seed for per-token-id uri PDA derivation
/// - Used in: ["token_uri", token_ledger, token_id]
pub const TOKEN_URI_SEED: &str = "token_uri";

/// ===== CAPACITY CONSTANTS =====

/// Maximum number of reference addresses held per allow-list category
pub const MAX_REFERENCES_PER_CATEGORY: usize = 16;

/// Maximum number of minters a single token ledger can carry
/// - Every claim engine bound to a ledger occupies one slot
pub const MAX_MINTERS: usize = 16;

/// Maximum byte length of a token ledger name
pub const MAX_NAME_LEN: usize = 32;

/// Maximum byte length of a token ledger symbol
pub const MAX_SYMBOL_LEN: usize = 10;

/// Maximum byte length of a token ledger metadata uri
pub const MAX_URI_LEN: usize = 200;

/// ===== CAMPAIGN CONSTANTS =====

/// Token id minted by a campaign whose token ledger is created alongside it
pub const FIRST_TOKEN_ID: u64 = 1;
