use anchor_lang::prelude::Pubkey;

use crate::constants::MAX_URI_LEN;
use crate::state::{CloneOrigin, TokenBalance, TokenLedger, TokenMetadata, TokenUri};
use crate::test::{admin, erc1155_reference, key};

const LEDGER: u8 = 60;
const AUTHORITY: u8 = 50;
const MINTER: u8 = 62;

fn metadata() -> TokenMetadata {
    TokenMetadata::new("Testoken".into(), "TEST".into(), "ipfs://token/{id}".into())
}

fn new_ledger(minter: Option<Pubkey>) -> TokenLedger {
    let mut ledger = TokenLedger::default();
    ledger
        .initialize(
            CloneOrigin::new(254, 1, erc1155_reference()),
            metadata(),
            admin(),
            key(AUTHORITY),
            minter,
        )
        .unwrap();
    ledger
}

fn balance_for(owner: Pubkey, token_id: u64) -> TokenBalance {
    let mut balance = TokenBalance::default();
    balance.bind(1, key(LEDGER), token_id, owner);
    balance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_MINTERS;
    use crate::test::{claimant_a, error_message, outsider};

    #[test]
    fn test_initialize_records_roles_and_metadata() {
        let ledger = new_ledger(Some(key(MINTER)));

        assert_eq!(ledger.admin, admin());
        assert_eq!(ledger.mint_authority, key(AUTHORITY));
        assert_eq!(ledger.minters, vec![key(MINTER)]);
        assert_eq!(ledger.name, "Testoken");
        assert_eq!(ledger.symbol, "TEST");
        assert_eq!(ledger.origin.reference, erc1155_reference());
    }

    #[test]
    fn test_default_minter_is_ignored() {
        let ledger = new_ledger(Some(Pubkey::default()));
        assert!(ledger.minters.is_empty());
        assert!(!ledger.can_mint(&Pubkey::default()));

        let ledger = new_ledger(None);
        assert!(ledger.minters.is_empty());
    }

    #[test]
    fn test_initialize_validates_inputs() {
        let mut ledger = TokenLedger::default();
        let long_uri = TokenMetadata::new("Testoken".into(), "TEST".into(), "u".repeat(MAX_URI_LEN + 1));
        let result = ledger.initialize(CloneOrigin::default(), long_uri, admin(), key(AUTHORITY), None);
        assert_eq!(error_message(result), "METADATA_TOO_LONG");

        let mut ledger = TokenLedger::default();
        let result = ledger.initialize(
            CloneOrigin::default(),
            metadata(),
            Pubkey::default(),
            key(AUTHORITY),
            None,
        );
        assert_eq!(error_message(result), "INVALID_ADMIN");
    }

    #[test]
    fn test_admin_and_minter_can_mint() {
        let ledger = new_ledger(Some(key(MINTER)));
        let mut balance = balance_for(claimant_a(), 1);

        assert_eq!(ledger.mint_to(&admin(), &mut balance, 3).unwrap(), 3);
        assert_eq!(ledger.mint_to(&key(MINTER), &mut balance, 4).unwrap(), 7);
        assert_eq!(balance.amount, 7);
    }

    #[test]
    fn test_stranger_cannot_mint() {
        let ledger = new_ledger(Some(key(MINTER)));
        let mut balance = balance_for(claimant_a(), 1);

        // The mint authority grants minters but does not mint itself
        for stranger in [outsider(), key(AUTHORITY)] {
            assert_eq!(
                error_message(ledger.mint_to(&stranger, &mut balance, 1)),
                "MINTER_ROLE_REQUIRED"
            );
        }
        assert_eq!(balance.amount, 0);
    }

    #[test]
    fn test_mint_rejects_zero_and_overflow() {
        let ledger = new_ledger(None);
        let mut balance = balance_for(claimant_a(), 1);

        assert_eq!(
            error_message(ledger.mint_to(&admin(), &mut balance, 0)),
            "INVALID_AMOUNT"
        );

        balance.amount = u64::MAX;
        assert_eq!(
            error_message(ledger.mint_to(&admin(), &mut balance, 1)),
            "ARITHMETIC_OVERFLOW"
        );
        assert_eq!(balance.amount, u64::MAX);
    }

    #[test]
    fn test_admin_grants_minters() {
        let mut ledger = new_ledger(None);

        ledger.grant_minter(&admin(), key(71)).unwrap();
        ledger.grant_minter_by_authority(&key(AUTHORITY), key(70)).unwrap();

        assert!(ledger.can_mint(&key(70)));
        assert!(ledger.can_mint(&key(71)));
    }

    #[test]
    fn test_only_admin_grants_minters_directly() {
        let mut ledger = new_ledger(Some(key(MINTER)));

        // Neither minters nor the mint authority can grant without the admin
        for granter in [outsider(), key(MINTER), key(AUTHORITY)] {
            assert_eq!(
                error_message(ledger.grant_minter(&granter, key(70))),
                "ONLY_TOKEN_ADMIN"
            );
        }
        assert!(!ledger.can_mint(&key(70)));
        assert_eq!(ledger.minters, vec![key(MINTER)]);
    }

    #[test]
    fn test_grant_by_authority_requires_the_mint_authority() {
        let mut ledger = new_ledger(None);

        for granter in [outsider(), admin()] {
            assert_eq!(
                error_message(ledger.grant_minter_by_authority(&granter, key(70))),
                "MINT_AUTHORITY_REQUIRED"
            );
        }
        assert!(ledger.minters.is_empty());
    }

    #[test]
    fn test_strangers_cannot_fill_minter_slots() {
        let mut ledger = new_ledger(None);

        for seed in 0..MAX_MINTERS as u8 {
            assert!(ledger.grant_minter(&outsider(), key(120 + seed)).is_err());
        }
        assert!(ledger.minters.is_empty());
        assert!(ledger.has_minter_slot_for(&key(70)));
    }

    #[test]
    fn test_grant_minter_is_idempotent_and_bounded() {
        let mut ledger = new_ledger(Some(key(MINTER)));

        ledger.grant_minter(&admin(), key(MINTER)).unwrap();
        assert_eq!(ledger.minters.len(), 1);

        for seed in 0..(MAX_MINTERS - 1) as u8 {
            ledger.grant_minter(&admin(), key(120 + seed)).unwrap();
        }
        assert_eq!(ledger.minters.len(), MAX_MINTERS);

        assert_eq!(
            error_message(ledger.grant_minter(&admin(), key(160))),
            "MINTER_CAPACITY_REACHED"
        );
        // Re-granting an existing minter still succeeds when full
        ledger.grant_minter(&admin(), key(MINTER)).unwrap();
    }

    #[test]
    fn test_revoke_minter_frees_a_slot() {
        let mut ledger = new_ledger(Some(key(MINTER)));
        for seed in 0..(MAX_MINTERS - 1) as u8 {
            ledger.grant_minter(&admin(), key(120 + seed)).unwrap();
        }
        assert!(!ledger.has_minter_slot_for(&key(160)));

        assert!(ledger.revoke_minter(&admin(), &key(MINTER)).unwrap());
        assert!(!ledger.can_mint(&key(MINTER)));
        assert!(ledger.has_minter_slot_for(&key(160)));

        ledger.grant_minter(&admin(), key(160)).unwrap();
        assert_eq!(ledger.minters.len(), MAX_MINTERS);

        // Revoking an account without the role changes nothing
        assert!(!ledger.revoke_minter(&admin(), &key(MINTER)).unwrap());
        assert_eq!(ledger.minters.len(), MAX_MINTERS);
    }

    #[test]
    fn test_revoke_minter_is_admin_only() {
        let mut ledger = new_ledger(Some(key(MINTER)));

        for caller in [outsider(), key(MINTER), key(AUTHORITY)] {
            assert_eq!(
                error_message(ledger.revoke_minter(&caller, &key(MINTER))),
                "ONLY_TOKEN_ADMIN"
            );
        }
        assert!(ledger.can_mint(&key(MINTER)));
    }

    #[test]
    fn test_token_uri_falls_back_to_ledger_uri() {
        let ledger = new_ledger(None);
        let mut record = TokenUri::default();
        record.bind(1, key(LEDGER), 2);

        assert_eq!(ledger.uri_for(None), "ipfs://token/{id}");
        assert_eq!(ledger.uri_for(Some(&record)), "ipfs://token/{id}");

        ledger
            .set_token_uri(&admin(), &mut record, "ipfs://token/2".into())
            .unwrap();
        assert_eq!(ledger.uri_for(Some(&record)), "ipfs://token/2");
        assert!(record.is_bound_to(&key(LEDGER), 2));
        assert!(!record.is_bound_to(&key(LEDGER), 1));
    }

    #[test]
    fn test_set_token_uri_validates_caller_and_length() {
        let ledger = new_ledger(None);
        let mut record = TokenUri::default();
        record.bind(1, key(LEDGER), 2);
        ledger
            .set_token_uri(&admin(), &mut record, "ipfs://token/2".into())
            .unwrap();

        assert_eq!(
            error_message(ledger.set_token_uri(&outsider(), &mut record, "ipfs://other".into())),
            "ONLY_TOKEN_ADMIN"
        );
        assert_eq!(
            error_message(ledger.set_token_uri(&admin(), &mut record, "u".repeat(MAX_URI_LEN + 1))),
            "METADATA_TOO_LONG"
        );
        assert_eq!(record.uri, "ipfs://token/2");

        // A later binding keeps the record's identity
        record.bind(9, key(99), 3);
        assert!(record.is_bound_to(&key(LEDGER), 2));
    }

    #[test]
    fn test_transfer_ownership() {
        let mut ledger = new_ledger(None);
        let new_admin = key(102);

        assert_eq!(
            error_message(ledger.transfer_ownership(&outsider(), new_admin)),
            "ONLY_TOKEN_ADMIN"
        );
        assert_eq!(
            error_message(ledger.transfer_ownership(&admin(), Pubkey::default())),
            "INVALID_ADMIN"
        );

        let previous = ledger.transfer_ownership(&admin(), new_admin).unwrap();
        assert_eq!(previous, admin());
        assert_eq!(ledger.admin, new_admin);

        // The previous admin loses its implicit rights
        let mut balance = balance_for(claimant_a(), 1);
        assert_eq!(
            error_message(ledger.mint_to(&admin(), &mut balance, 1)),
            "MINTER_ROLE_REQUIRED"
        );
        assert_eq!(
            error_message(ledger.transfer_ownership(&admin(), admin())),
            "ONLY_TOKEN_ADMIN"
        );
        assert_eq!(ledger.mint_to(&new_admin, &mut balance, 1).unwrap(), 1);
    }

    #[test]
    fn test_balance_binding_is_set_once() {
        let mut balance = balance_for(claimant_a(), 1);
        balance.bind(9, key(99), 2, outsider());

        assert!(balance.is_bound_to(&key(LEDGER), 1, &claimant_a()));
        assert!(!balance.is_bound_to(&key(LEDGER), 2, &claimant_a()));
        assert!(!balance.is_bound_to(&key(99), 1, &claimant_a()));
        assert_eq!(balance.bump, 1);
    }
}
