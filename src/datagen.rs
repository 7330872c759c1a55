//! Synthetic account generation
//!
//! Populates a record store with fake customer accounts for testing and
//! demonstration. Owner ids are unique 10-digit numbers, account numbers
//! are unique 9-digit numbers and balances fall in 500..=100,000 Rial.

use crate::core::{ACCOUNT_ID_MAX, ACCOUNT_ID_MIN};
use crate::io::store;
use crate::types::{Account, LedgerError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::path::Path;

/// Smallest generated balance, in Rial
pub const BALANCE_MIN: i64 = 500;

/// Largest generated balance, in Rial
pub const BALANCE_MAX: i64 = 100_000;

const FIRST_NAMES: [&str; 16] = [
    "Alice", "Bahram", "Carol", "Dariush", "Elaheh", "Farhad", "Golnar", "Hamid", "Iris",
    "Jasmin", "Kaveh", "Leila", "Mina", "Navid", "Omid", "Parisa",
];

const LAST_NAMES: [&str; 12] = [
    "Ahmadi", "Bennett", "Carter", "Esfahani", "Fischer", "Hosseini", "Jafari", "Karimi",
    "Moradi", "Novak", "Rahimi", "Tehrani",
];

/// Generate `count` accounts with unique owner and account ids
///
/// Collisions in either id space are re-rolled, mirroring the ledger's own
/// collision-retry id assignment.
pub fn generate_accounts(rng: &mut impl Rng, count: usize) -> Vec<Account> {
    let mut used_owner_ids = HashSet::new();
    let mut used_account_ids = HashSet::new();
    let mut accounts = Vec::with_capacity(count);

    while accounts.len() < count {
        let owner_id = rng.random_range(1_000_000_000..=9_999_999_999u64);
        if !used_owner_ids.insert(owner_id) {
            continue;
        }

        let account_id = rng.random_range(ACCOUNT_ID_MIN..=ACCOUNT_ID_MAX);
        if !used_account_ids.insert(account_id) {
            used_owner_ids.remove(&owner_id);
            continue;
        }

        let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
        let balance = rng.random_range(BALANCE_MIN..=BALANCE_MAX);

        accounts.push(Account::new(
            format!("{first} {last}"),
            owner_id,
            account_id,
            balance,
        ));
    }

    accounts
}

/// Generate `count` synthetic accounts and write them to a store file
///
/// Replaces any existing store at `path`. Returns the number of accounts
/// written.
///
/// # Errors
///
/// Returns [`LedgerError::PersistenceFailure`] if the store cannot be
/// written.
pub fn generate_store(path: &Path, count: usize) -> Result<usize, LedgerError> {
    let mut rng = StdRng::from_os_rng();
    let accounts = generate_accounts(&mut rng, count);
    let refs: Vec<&Account> = accounts.iter().collect();
    store::write_store(path, &refs)?;
    Ok(accounts.len())
}
