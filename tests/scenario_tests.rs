//! End-to-end scenario tests
//!
//! These tests drive the public ledger API against a real store file in a
//! temp directory, covering:
//! - Save/load round-trips and malformed-row recovery
//! - Account opening rules (positive initial deposit, one account per owner)
//! - The transfer protocol's all-or-nothing and conservation properties
//! - Full interactive sessions through the menu shell

use bank_ledger::cli::menu;
use bank_ledger::core::Ledger;
use bank_ledger::types::LedgerError;
use std::fs;
use std::io::Cursor;
use tempfile::tempdir;

/// Ledger backed by a store file in a fresh temp directory
fn temp_ledger() -> (tempfile::TempDir, Ledger) {
    let dir = tempdir().unwrap();
    let ledger = Ledger::new(dir.path().join("Bank.csv"));
    (dir, ledger)
}

#[test]
fn round_trip_preserves_account_set() {
    let (_dir, mut ledger) = temp_ledger();
    let alice = ledger.create_account("Alice", 111, 5000).unwrap().clone();
    let bob = ledger.create_account("Bob", 222, 800).unwrap().clone();

    let mut reloaded = Ledger::new(ledger.store_path());
    reloaded.load().unwrap();

    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.find_by_account_id(alice.account_id()), Some(&alice));
    assert_eq!(reloaded.find_by_account_id(bob.account_id()), Some(&bob));
}

#[test]
fn malformed_row_is_skipped_and_load_continues() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("Bank.csv");
    fs::write(
        &path,
        "Customer,National ID,Acc Num,Credit\n\
         Alice,111,100000001,5000\n\
         Broken,222,100000002,not-a-balance\n",
    )
    .unwrap();

    let mut ledger = Ledger::new(&path);
    ledger.load().unwrap();

    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.find_by_account_id(100_000_001).unwrap().name(), "Alice");
    assert!(ledger.find_by_account_id(100_000_002).is_none());
}

#[test]
fn create_account_scenario() {
    let (_dir, mut ledger) = temp_ledger();

    let account = ledger.create_account("Bob", 222, 1000).unwrap();
    assert_eq!(account.balance(), 1000);
    let id = account.account_id();
    assert!((100_000_000..=999_999_999).contains(&id), "not a 9-digit id: {id}");

    let err = ledger.create_account("Bob2", 222, 500).unwrap_err();
    assert_eq!(err, LedgerError::DuplicateOwner { owner: 222 });
}

#[test]
fn transfer_scenario_exact_balance_then_one_below() {
    let (_dir, mut ledger) = temp_ledger();
    let a = ledger.create_account("Alice", 111, 1000).unwrap().account_id();
    let b = ledger.create_account("Bob", 222, 200).unwrap().account_id();

    let err = ledger.transfer(a, b, 1000).unwrap_err();
    assert!(matches!(
        err,
        LedgerError::TransferFailed { ref source, .. }
            if matches!(**source, LedgerError::WouldEmptyAccount { .. })
    ));
    assert_eq!(ledger.find_by_account_id(a).unwrap().balance(), 1000);
    assert_eq!(ledger.find_by_account_id(b).unwrap().balance(), 200);

    ledger.transfer(a, b, 999).unwrap();
    assert_eq!(ledger.find_by_account_id(a).unwrap().balance(), 1);
    assert_eq!(ledger.find_by_account_id(b).unwrap().balance(), 1199);
}

#[test]
fn transfer_to_self_is_rejected_regardless_of_balance() {
    let (_dir, mut ledger) = temp_ledger();
    let a = ledger.create_account("Alice", 111, 1000).unwrap().account_id();

    let err = ledger.transfer(a, a, 100).unwrap_err();
    assert_eq!(err, LedgerError::SameAccount { account: a });
}

#[test]
fn transfer_conserves_total_funds_across_reload() {
    let (_dir, mut ledger) = temp_ledger();
    let a = ledger.create_account("Alice", 111, 7500).unwrap().account_id();
    let b = ledger.create_account("Bob", 222, 2500).unwrap().account_id();

    ledger.transfer(a, b, 4321).unwrap();

    let mut reloaded = Ledger::new(ledger.store_path());
    reloaded.load().unwrap();
    let balance_a = reloaded.find_by_account_id(a).unwrap().balance();
    let balance_b = reloaded.find_by_account_id(b).unwrap().balance();
    assert_eq!(balance_a + balance_b, 10_000);
    assert_eq!(balance_a, 7500 - 4321);
}

#[test]
fn full_interactive_session_persists_to_store() {
    let (_dir, mut ledger) = temp_ledger();
    let b = ledger.create_account("Bob", 222, 200).unwrap().account_id();

    // First session creates Alice's account; second session logs in with
    // her account number, deposits and transfers to Bob
    let script = "1\nAlice\n111\n1000\n3\n";
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    menu::run(&mut ledger, &mut input, &mut output).unwrap();
    let a = ledger.find_by_owner(111).unwrap().account_id();

    let script = format!("2\n{a}\n2\n500\n4\n{b}\n700\n5\n3\n");
    let mut input = Cursor::new(script.into_bytes());
    let mut output = Vec::new();
    menu::run(&mut ledger, &mut input, &mut output).unwrap();

    let mut reloaded = Ledger::new(ledger.store_path());
    reloaded.load().unwrap();
    assert_eq!(reloaded.find_by_account_id(a).unwrap().balance(), 800);
    assert_eq!(reloaded.find_by_account_id(b).unwrap().balance(), 900);
}
