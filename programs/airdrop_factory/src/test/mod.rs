pub mod test_token_ledger;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;
use std::collections::{BTreeMap, HashMap};

use crate::constants::FIRST_TOKEN_ID;
use crate::state::*;
use crate::utils::{MerkleNode, WhitelistTree};

pub const START_TIME: i64 = 1_700_000_000;
pub const END_TIME: i64 = START_TIME + 3_600;

pub const ALLOCATION_A: u64 = 5;
pub const ALLOCATION_B: u64 = 10;

pub fn key(seed: u8) -> Pubkey {
    Pubkey::new_from_array([seed; 32])
}

pub fn claimant_a() -> Pubkey {
    key(1)
}

pub fn claimant_b() -> Pubkey {
    key(2)
}

pub fn outsider() -> Pubkey {
    key(3)
}

pub fn admin() -> Pubkey {
    key(100)
}

pub fn payout() -> Pubkey {
    key(101)
}

pub fn erc1155_reference() -> Pubkey {
    key(200)
}

pub fn whitelist_reference() -> Pubkey {
    key(201)
}

pub fn airdrop_reference() -> Pubkey {
    key(202)
}

/// {A: 5, B: 10}
pub fn sample_whitelist() -> BTreeMap<Pubkey, u64> {
    BTreeMap::from([(claimant_a(), ALLOCATION_A), (claimant_b(), ALLOCATION_B)])
}

pub fn new_factory() -> CloneFactory {
    let mut factory = CloneFactory::default();
    factory
        .initialize(
            255,
            admin(),
            erc1155_reference(),
            whitelist_reference(),
            airdrop_reference(),
        )
        .unwrap();
    factory
}

pub fn sample_metadata() -> TokenMetadata {
    TokenMetadata::new("Testoken".into(), "TEST".into(), "ipfs://".into())
}

pub fn airdrop_config(token_id: u64, start_time: i64, end_time: i64) -> AirdropConfig {
    AirdropConfig {
        reference: airdrop_reference(),
        token_id,
        start_time,
        end_time,
        admin: admin(),
        payout: payout(),
    }
}

/// Addresses the bundle's PDAs would have on chain
pub fn bundle_keys() -> CloneKeys {
    CloneKeys {
        factory: key(50),
        token_ledger: key(60),
        whitelist: key(61),
        airdrop: key(62),
    }
}

pub fn bundle_bumps() -> CloneBumps {
    CloneBumps {
        token_ledger: 254,
        whitelist: 253,
        airdrop: 252,
    }
}

/// Stable identifier carried by a failed result
pub fn error_message<T: std::fmt::Debug>(result: Result<T>) -> String {
    match result.expect_err("expected the call to fail") {
        Error::AnchorError(error) => error.error_msg.clone(),
        Error::ProgramError(error) => error.program_error.to_string(),
    }
}

/**
 * A full campaign bundle created through the same factory wiring
 * new_merkle_airdrop_and_whitelist_and_erc1155 runs
 *
 * Claim records and balances are kept in maps keyed the way their PDAs are
 * derived (identity, recipient), and are written back after every claim
 * attempt, failed or not.
 */
pub struct Campaign {
    pub factory: CloneFactory,
    pub factory_key: Pubkey,
    pub tree: WhitelistTree,
    pub whitelist: WhitelistRegistry,
    pub whitelist_key: Pubkey,
    pub token_ledger: TokenLedger,
    pub token_ledger_key: Pubkey,
    pub engine: ClaimEngine,
    pub engine_key: Pubkey,
    pub records: HashMap<Pubkey, ClaimRecord>,
    pub balances: HashMap<Pubkey, TokenBalance>,
}

impl Campaign {
    pub fn new(start_time: i64, end_time: i64) -> Self {
        Self::with_whitelist(&sample_whitelist(), start_time, end_time)
    }

    pub fn with_whitelist(entries: &BTreeMap<Pubkey, u64>, start_time: i64, end_time: i64) -> Self {
        let mut factory = new_factory();
        let keys = bundle_keys();
        let tree = WhitelistTree::from_map(entries).unwrap();

        let mut token_ledger = TokenLedger::default();
        let mut whitelist = WhitelistRegistry::default();
        let mut engine = ClaimEngine::default();
        factory
            .clone_airdrop_and_whitelist_and_erc1155(
                &keys,
                &bundle_bumps(),
                &mut token_ledger,
                &mut whitelist,
                &mut engine,
                whitelist_reference(),
                erc1155_reference(),
                tree.root(),
                sample_metadata(),
                &airdrop_config(FIRST_TOKEN_ID, start_time, end_time),
            )
            .unwrap();

        Self {
            factory,
            factory_key: keys.factory,
            tree,
            whitelist,
            whitelist_key: keys.whitelist,
            token_ledger,
            token_ledger_key: keys.token_ledger,
            engine,
            engine_key: keys.airdrop,
            records: HashMap::new(),
            balances: HashMap::new(),
        }
    }

    /// Keys of a further engine and whitelist cloned onto this campaign's ledger
    pub fn reuse_keys(&self, whitelist: Pubkey, airdrop: Pubkey) -> CloneKeys {
        CloneKeys {
            factory: self.factory_key,
            token_ledger: self.token_ledger_key,
            whitelist,
            airdrop,
        }
    }

    pub fn proof(&self, identity: &Pubkey, allocation: u64) -> Vec<MerkleNode> {
        self.tree.proof(identity, allocation).unwrap()
    }

    pub fn claim(
        &mut self,
        now: i64,
        proof: Vec<MerkleNode>,
        allocation: u64,
        identity: Pubkey,
        recipient: Pubkey,
    ) -> Result<u64> {
        self.engine
            .require_bindings(&self.whitelist_key, &self.token_ledger_key)?;

        let mut record = self.records.get(&identity).cloned().unwrap_or_default();
        record.bind(1, self.engine_key, identity);

        let mut balance = self.balances.get(&recipient).cloned().unwrap_or_default();
        balance.bind(1, self.token_ledger_key, self.engine.token_id, recipient);

        let request = ClaimRequest {
            proof,
            allocation,
            identity,
            recipient,
        };
        let result = self.engine.claim(
            &self.engine_key,
            &self.whitelist,
            &self.token_ledger,
            &mut record,
            &mut balance,
            now,
            &request,
        );

        self.records.insert(identity, record);
        self.balances.insert(recipient, balance);
        result
    }

    /// Claims `identity`'s own allocation with a freshly generated proof
    pub fn claim_own(&mut self, now: i64, identity: Pubkey, allocation: u64) -> Result<u64> {
        let proof = self.proof(&identity, allocation);
        self.claim(now, proof, allocation, identity, identity)
    }

    pub fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.balances.get(owner).map_or(0, |balance| balance.amount)
    }

    pub fn is_claimed(&self, identity: &Pubkey) -> bool {
        self.records.get(identity).is_some_and(|record| record.claimed)
    }
}
