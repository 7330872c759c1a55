//! Ledger orchestration
//!
//! This module provides the `Ledger` struct which owns the full collection
//! of accounts and coordinates everything that spans more than one account:
//! identifier assignment, lookups, cross-account transfers and persistence
//! to the record store.
//!
//! The Ledger is responsible for:
//! - Loading accounts from and saving accounts to the record store
//! - Generating unique 9-digit account numbers
//! - Opening new accounts (one per owner)
//! - Atomic two-leg transfers between accounts

use crate::io::store;
use crate::types::{Account, AccountId, LedgerError, OwnerId};
use rand::Rng;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Lowest valid 9-digit account number
pub const ACCOUNT_ID_MIN: AccountId = 100_000_000;

/// Highest valid 9-digit account number
pub const ACCOUNT_ID_MAX: AccountId = 999_999_999;

/// The in-memory account collection plus its persistence operations
///
/// The Ledger exclusively owns every [`Account`], keyed by account number.
/// All mutating operations run synchronously to completion and rewrite the
/// whole record store when they need durability; in-memory state stays
/// authoritative even when a save fails.
pub struct Ledger {
    /// Path of the record store backing this ledger
    store_path: PathBuf,

    /// Map of account numbers to accounts
    accounts: HashMap<AccountId, Account>,
}

impl Ledger {
    /// Create an empty ledger backed by the given store path
    ///
    /// No I/O happens here; call [`Ledger::load`] to populate the ledger
    /// from the store.
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Ledger {
            store_path: store_path.into(),
            accounts: HashMap::new(),
        }
    }

    /// Path of the record store backing this ledger
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Number of accounts currently in the ledger
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the ledger holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Replace the in-memory accounts with the store's contents
    ///
    /// A missing store file yields an empty ledger (the file is created on
    /// first save). Malformed rows and header mismatches are warned about
    /// and skipped, never fatal.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::PersistenceFailure`] only when the store
    /// exists but cannot be opened.
    pub fn load(&mut self) -> Result<(), LedgerError> {
        let accounts = store::read_store(&self.store_path)?;
        self.accounts = accounts
            .into_iter()
            .map(|account| (account.account_id(), account))
            .collect();
        Ok(())
    }

    /// Rewrite the record store with every in-memory account
    ///
    /// Rows are written sorted by account number for deterministic output.
    /// A failed save leaves the in-memory state untouched and authoritative;
    /// the caller should retry or escalate.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::PersistenceFailure`] if the store cannot be
    /// written.
    pub fn save(&self) -> Result<(), LedgerError> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| account.account_id());
        store::write_store(&self.store_path, &accounts)
    }

    /// Generate a 9-digit account number not yet present in the ledger
    ///
    /// Samples uniformly from the 9-digit space and retries on collision.
    /// With at most a few thousand accounts against a 900-million id space
    /// collisions are vanishingly rare, but the retry loop keeps the
    /// operation correct at any fill level below the full space.
    pub fn generate_unique_account_id(&self) -> AccountId {
        self.generate_unique_account_id_with(&mut rand::rng())
    }

    fn generate_unique_account_id_with(&self, rng: &mut impl Rng) -> AccountId {
        loop {
            let account_id = rng.random_range(ACCOUNT_ID_MIN..=ACCOUNT_ID_MAX);
            if !self.accounts.contains_key(&account_id) {
                return account_id;
            }
        }
    }

    /// Find the account belonging to an owner
    ///
    /// Linear scan; the one-account-per-owner invariant means the first
    /// match is the only match.
    pub fn find_by_owner(&self, owner_id: OwnerId) -> Option<&Account> {
        self.accounts
            .values()
            .find(|account| account.owner_id() == owner_id)
    }

    /// Look up an account by its account number
    pub fn find_by_account_id(&self, account_id: AccountId) -> Option<&Account> {
        self.accounts.get(&account_id)
    }

    /// Look up an account by its account number, mutably
    ///
    /// Used by the shell's logged-in session to call
    /// [`Account::deposit`]/[`Account::withdraw`] directly; the account
    /// stays owned by the ledger and the caller must [`Ledger::save`]
    /// after a successful mutation.
    pub fn find_by_account_id_mut(&mut self, account_id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&account_id)
    }

    /// Open a new account and persist it immediately
    ///
    /// Allocates a fresh unique account number, inserts the account and
    /// rewrites the store so the creation is durable before returning.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::InvalidAmount`] if `initial_deposit <= 0`
    /// * [`LedgerError::DuplicateOwner`] if the owner already has an account
    /// * [`LedgerError::PersistenceFailure`] if the store cannot be written;
    ///   the account stays in the in-memory ledger regardless
    pub fn create_account(
        &mut self,
        name: &str,
        owner_id: OwnerId,
        initial_deposit: i64,
    ) -> Result<&Account, LedgerError> {
        if initial_deposit <= 0 {
            return Err(LedgerError::invalid_amount(initial_deposit));
        }
        if self.find_by_owner(owner_id).is_some() {
            return Err(LedgerError::duplicate_owner(owner_id));
        }

        let account_id = self.generate_unique_account_id();
        let account = Account::new(name, owner_id, account_id, initial_deposit);
        self.accounts.insert(account_id, account);
        self.save()?;

        // The entry was inserted just above; the lookup cannot miss
        self.accounts
            .get(&account_id)
            .ok_or_else(|| LedgerError::account_not_found(account_id))
    }

    /// Move funds between two accounts, all-or-nothing
    ///
    /// The protocol:
    ///
    /// 1. Reject self-transfers.
    /// 2. Resolve both account numbers before touching any balance.
    /// 3. Withdraw from the source. On failure the deposit leg is never
    ///    attempted and no state has changed.
    /// 4. Deposit into the destination. If the deposit is rejected (the
    ///    destination balance would overflow), the withdrawn funds are
    ///    re-credited to the source, so a failed transfer never moves money.
    /// 5. Persist the whole ledger once, only after both legs succeeded.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::SameAccount`] if `from_id == to_id`
    /// * [`LedgerError::AccountNotFound`] if either id does not resolve
    /// * [`LedgerError::TransferFailed`] wrapping the account-level failure
    ///   of either leg; both balances are unchanged
    /// * [`LedgerError::PersistenceFailure`] if the final save fails; both
    ///   in-memory balances already reflect the transfer
    pub fn transfer(
        &mut self,
        from_id: AccountId,
        to_id: AccountId,
        amount: i64,
    ) -> Result<(), LedgerError> {
        if from_id == to_id {
            return Err(LedgerError::same_account(from_id));
        }
        if !self.accounts.contains_key(&from_id) {
            return Err(LedgerError::account_not_found(from_id));
        }
        if !self.accounts.contains_key(&to_id) {
            return Err(LedgerError::account_not_found(to_id));
        }

        // Withdraw first; on failure nothing has changed and the deposit
        // leg is never attempted.
        let source = self
            .accounts
            .get_mut(&from_id)
            .ok_or_else(|| LedgerError::account_not_found(from_id))?;
        source
            .withdraw(amount)
            .map_err(|e| LedgerError::transfer_failed(from_id, to_id, e))?;

        let destination = self
            .accounts
            .get_mut(&to_id)
            .ok_or_else(|| LedgerError::account_not_found(to_id))?;
        if let Err(deposit_error) = destination.deposit(amount) {
            // Compensating re-credit keeps the transfer all-or-nothing
            if let Some(source) = self.accounts.get_mut(&from_id) {
                source.restore(amount);
            }
            return Err(LedgerError::transfer_failed(from_id, to_id, deposit_error));
        }

        self.save()
    }
}
