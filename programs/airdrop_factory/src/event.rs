use anchor_lang::prelude::*;
use crate::state::ReferenceCategory;

/// Event emitted when the clone factory is created
#[event]
pub struct FactoryInitialized {
    /// The factory account public key
    pub factory: Pubkey,
    /// Admin allowed to toggle reference validity
    pub admin: Pubkey,
    /// Initial token ledger reference
    pub erc1155_reference: Pubkey,
    /// Initial whitelist reference
    pub whitelist_reference: Pubkey,
    /// Initial claim engine reference
    pub airdrop_reference: Pubkey,
}

/// Event emitted when a reference is added to or removed from an allow-list
#[event]
pub struct ReferenceValiditySet {
    /// Allow-list that changed
    pub category: ReferenceCategory,
    /// The reference address
    pub reference: Pubkey,
    /// Whether clones may now be created from it
    pub valid: bool,
}

/// Event emitted when a token ledger clone is created
#[event]
pub struct NewERC1155Clone {
    /// The new token ledger
    pub erc1155_clone: Pubkey,
    /// Reference it was cloned from
    pub reference: Pubkey,
    /// Admin of the new ledger
    pub admin: Pubkey,
}

/// Event emitted when a whitelist clone is created
#[event]
pub struct NewMerkleWhitelistClone {
    /// The new whitelist
    pub whitelist_clone: Pubkey,
    /// Reference it was cloned from
    pub reference: Pubkey,
    /// Root stored in the new whitelist
    pub merkle_root: [u8; 32],
}

/// Event emitted when a claim engine clone is created
/// - Carries every address needed to reconstruct the campaign bundle
#[event]
pub struct NewMerkle1155AirdropClone {
    /// The new claim engine
    pub airdrop_clone: Pubkey,
    /// Whitelist the engine verifies against (new or reused)
    pub merkle_proof_whitelist: Pubkey,
    /// Token ledger the engine mints on (new or reused)
    pub erc1155_clone: Pubkey,
    /// Token id minted by the engine
    pub token_id: u64,
    /// Reference the engine was cloned from
    pub reference: Pubkey,
}

/// Event emitted when an allocation is claimed
#[event]
pub struct MerkleClaimMade {
    /// The claim engine account public key
    pub airdrop: Pubkey,
    /// Whitelisted identity that claimed
    pub identity: Pubkey,
    /// Account credited with the allocation
    pub recipient: Pubkey,
    /// Signer who submitted the claim
    pub caller: Pubkey,
    /// Token id minted
    pub token_id: u64,
    /// Amount minted
    pub allocation: u64,
}

/// Event emitted when tokens are minted outside of a claim
#[event]
pub struct TokensMinted {
    /// The token ledger account public key
    pub token_ledger: Pubkey,
    /// Admin or minter who minted
    pub minter: Pubkey,
    /// Account credited
    pub recipient: Pubkey,
    /// Token id minted
    pub token_id: u64,
    /// Amount minted
    pub amount: u64,
    /// Recipient balance after the mint
    pub balance: u64,
}

/// Event emitted when an account is granted the minter role
#[event]
pub struct MinterGranted {
    /// The token ledger account public key
    pub token_ledger: Pubkey,
    /// Account that granted the role
    pub granter: Pubkey,
    /// New minter
    pub minter: Pubkey,
}

/// Event emitted when a token ledger changes admin
#[event]
pub struct OwnershipTransferred {
    /// The token ledger account public key
    pub token_ledger: Pubkey,
    /// Admin before the transfer
    pub previous_admin: Pubkey,
    /// Admin after the transfer
    pub new_admin: Pubkey,
}

/// Event emitted when a campaign's sale configuration is set
#[event]
pub struct SaleConfigSet {
    /// The claim engine account public key
    pub airdrop: Pubkey,
    /// Units purchasable per account
    pub purchasable_allocation: u64,
    /// Price per unit in lamports
    pub purchase_price: u64,
}

/// Event emitted when an account loses the minter role
#[event]
pub struct MinterRevoked {
    /// The token ledger account public key
    pub token_ledger: Pubkey,
    /// Former minter
    pub minter: Pubkey,
}

/// Event emitted when a token id's uri is set
#[event]
pub struct TokenUriSet {
    /// The token ledger account public key
    pub token_ledger: Pubkey,
    /// Token id described
    pub token_id: u64,
    /// New uri
    pub uri: String,
}
