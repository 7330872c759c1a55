//! Account-related types for the bank ledger
//!
//! This module defines the Account structure and the single-account
//! operations that enforce its balance rules.

use crate::types::error::LedgerError;

/// Unique identifier of an account (9 digits, 100,000,000..=999,999,999)
pub type AccountId = u64;

/// Unique identifier of the account owner (national id)
pub type OwnerId = u64;

/// A single customer account
///
/// Holds the account's identity and balance, and enforces the
/// single-account business rules:
///
/// - deposits and withdrawals must be strictly positive
/// - withdrawals must not exceed the balance
/// - a withdrawal may not empty the account exactly (the balance stays
///   strictly positive after any successful withdrawal)
///
/// The balance is an integer in the smallest currency unit (Rial). Accounts
/// are exclusively owned by the [`Ledger`](crate::core::Ledger) collection;
/// all fields are private and exposed through read-only accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Customer display name
    name: String,

    /// National id of the owner (at most one account per owner)
    owner_id: OwnerId,

    /// The 9-digit account number, unique across the ledger
    account_id: AccountId,

    /// Current balance in Rial, never negative
    balance: i64,
}

impl Account {
    /// Create an account with an initial balance
    ///
    /// Balance validation (initial deposit > 0) is the responsibility of
    /// [`Ledger::create_account`](crate::core::Ledger::create_account);
    /// this constructor is also used when rehydrating accounts from the
    /// record store, where any persisted balance must round-trip unchanged.
    pub fn new(
        name: impl Into<String>,
        owner_id: OwnerId,
        account_id: AccountId,
        balance: i64,
    ) -> Self {
        Account {
            name: name.into(),
            owner_id,
            account_id,
            balance,
        }
    }

    /// Customer display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owner's national id
    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    /// The 9-digit account number
    pub fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Current balance in Rial
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Deposit a positive amount into the account
    ///
    /// Increases the balance by `amount`. Persistence is the caller's
    /// responsibility; this only changes the in-memory balance.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::InvalidAmount`] if `amount <= 0`
    /// * [`LedgerError::ArithmeticOverflow`] if the balance would overflow
    ///
    /// On error the balance is unchanged.
    pub fn deposit(&mut self, amount: i64) -> Result<(), LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::invalid_amount(amount));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", self.account_id))?;

        Ok(())
    }

    /// Withdraw a positive amount from the account
    ///
    /// Decreases the balance by `amount`. Persistence is the caller's
    /// responsibility; this only changes the in-memory balance.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::InvalidAmount`] if `amount <= 0`
    /// * [`LedgerError::InsufficientFunds`] if `amount` exceeds the balance
    /// * [`LedgerError::WouldEmptyAccount`] if `amount` equals the balance
    ///   exactly (accounts may not be emptied by withdrawal)
    ///
    /// On error the balance is unchanged.
    pub fn withdraw(&mut self, amount: i64) -> Result<(), LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::invalid_amount(amount));
        }
        if amount > self.balance {
            return Err(LedgerError::insufficient_funds(
                self.account_id,
                self.balance,
                amount,
            ));
        }
        if amount == self.balance {
            return Err(LedgerError::would_empty_account(
                self.account_id,
                self.balance,
            ));
        }

        // amount < balance is guaranteed by the checks above
        self.balance -= amount;
        Ok(())
    }

    /// Return funds withdrawn moments earlier from this account
    ///
    /// Used by the transfer protocol to undo a completed withdrawal when
    /// the deposit leg fails. Cannot overflow: the balance held these funds
    /// before the withdrawal.
    pub(crate) fn restore(&mut self, amount: i64) {
        self.balance += amount;
    }

    /// Human-readable account snapshot
    ///
    /// Pure read-only rendering of name, owner id, account number and
    /// balance; no side effects.
    pub fn summary(&self) -> String {
        format!(
            "Customer Name:   {}\n\
             National ID:     {}\n\
             Account Number:  {}\n\
             Balance:         {} Rial",
            self.name, self.owner_id, self.account_id, self.balance
        )
    }
}
