use anchor_lang::prelude::*;

/// Messages are stable identifiers so callers and indexers can branch on cause.
#[error_code]
pub enum AirdropFactoryError {
    // Reference gating errors
    #[msg("INVALID_AIRDROP_REFERENCE_CONTRACT")]
    InvalidAirdropReference,
    #[msg("INVALID_WHITELIST_REFERENCE_CONTRACT")]
    InvalidWhitelistReference,
    #[msg("INVALID_ERC1155_REFERENCE_CONTRACT")]
    InvalidErc1155Reference,
    #[msg("REFERENCE_REGISTRY_FULL")]
    ReferenceRegistryFull,

    // Claim errors
    #[msg("INVALID_MERKLE_PROOF")]
    InvalidMerkleProof,
    #[msg("MERKLE_CLAIM_ALREADY_MADE")]
    ClaimAlreadyMade,
    #[msg("CLAIM_WINDOW_NOT_STARTED")]
    ClaimWindowNotStarted,
    #[msg("CLAIM_WINDOW_ENDED")]
    ClaimWindowEnded,
    #[msg("INVALID_CLAIM_WINDOW")]
    InvalidClaimWindow,

    // Access control errors
    #[msg("ONLY_FACTORY_ADMIN")]
    OnlyFactoryAdmin,
    #[msg("ONLY_TOKEN_ADMIN")]
    OnlyTokenAdmin,
    #[msg("ONLY_AIRDROP_ADMIN")]
    OnlyAirdropAdmin,
    #[msg("MINTER_ROLE_REQUIRED")]
    MinterRoleRequired,
    #[msg("MINT_AUTHORITY_REQUIRED")]
    MintAuthorityRequired,
    #[msg("MINTER_CAPACITY_REACHED")]
    MinterCapacityReached,
    #[msg("INVALID_ADMIN")]
    InvalidAdmin,

    // Account binding errors
    #[msg("WHITELIST_MISMATCH")]
    WhitelistMismatch,
    #[msg("TOKEN_LEDGER_MISMATCH")]
    TokenLedgerMismatch,
    #[msg("BALANCE_ACCOUNT_MISMATCH")]
    BalanceAccountMismatch,
    #[msg("CLAIM_RECORD_MISMATCH")]
    ClaimRecordMismatch,
    #[msg("TOKEN_URI_MISMATCH")]
    TokenUriMismatch,

    // Whitelist construction errors
    #[msg("EMPTY_WHITELIST")]
    EmptyWhitelist,
    #[msg("DUPLICATE_WHITELIST_ENTRY")]
    DuplicateWhitelistEntry,
    #[msg("WHITELIST_ENTRY_NOT_FOUND")]
    WhitelistEntryNotFound,
    #[msg("INVALID_MERKLE_ROOT")]
    InvalidMerkleRoot,
    #[msg("ALREADY_INITIALIZED")]
    AlreadyInitialized,

    // Amount and metadata validation errors
    #[msg("INVALID_AMOUNT")]
    InvalidAmount,
    #[msg("METADATA_TOO_LONG")]
    MetadataTooLong,

    // System level errors
    #[msg("ARITHMETIC_OVERFLOW")]
    ArithmeticOverflow,
}
