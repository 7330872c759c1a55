//! Error types for the bank ledger
//!
//! This module defines all error kinds that can occur during ledger
//! operations. Errors are designed to be descriptive and user-friendly for
//! CLI output.
//!
//! # Error Categories
//!
//! - **Validation errors**: non-positive amounts, overdrafts, duplicate
//!   owners, self-transfers, unknown accounts. Reported synchronously and
//!   always leave all state unchanged.
//! - **Load errors**: `MalformedRecord` is recoverable; the offending row is
//!   skipped with a warning and loading continues.
//! - **Save errors**: `PersistenceFailure` is surfaced to the caller but
//!   never rolls back in-memory state.

use crate::types::account::{AccountId, OwnerId};
use thiserror::Error;

/// Main error type for the bank ledger
///
/// Each variant carries enough context to diagnose the failure without
/// access to the ledger itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A non-positive amount was given to deposit, withdraw, create or
    /// transfer
    #[error("Amount must be positive, got {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: i64,
    },

    /// A withdrawal exceeds the account balance
    ///
    /// Recoverable: the withdrawal is rejected and the balance unchanged.
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account the withdrawal targeted
        account: AccountId,
        /// Balance at the time of the attempt
        balance: i64,
        /// Requested withdrawal amount
        requested: i64,
    },

    /// A withdrawal equals the exact balance
    ///
    /// Emptying an account by withdrawal is disallowed; the balance stays
    /// strictly positive after any successful withdrawal.
    #[error("Withdrawal would empty account {account} (balance {balance}); accounts cannot be emptied")]
    WouldEmptyAccount {
        /// Account the withdrawal targeted
        account: AccountId,
        /// Balance the withdrawal would have removed in full
        balance: i64,
    },

    /// An account already exists for this owner
    ///
    /// The ledger holds at most one account per owner id.
    #[error("An account already exists for national ID {owner}")]
    DuplicateOwner {
        /// Owner id that already has an account
        owner: OwnerId,
    },

    /// Transfer source and destination are the same account
    #[error("Cannot transfer from account {account} to itself")]
    SameAccount {
        /// The account id given for both legs
        account: AccountId,
    },

    /// No account with this id exists in the ledger
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The unresolved account id
        account: AccountId,
    },

    /// A balance update would overflow
    ///
    /// Recoverable: the operation is rejected to keep the balance intact.
    #[error("Arithmetic overflow in {operation} on account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account whose balance was being updated
        account: AccountId,
    },

    /// A store row could not be parsed
    ///
    /// Recoverable and load-time only: the row is skipped with a warning
    /// and loading continues with the next row.
    #[error("Malformed store record{}: {message}", line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    MalformedRecord {
        /// Line number in the store file, when known
        line: Option<u64>,
        /// Description of the parse failure
        message: String,
    },

    /// The record store could not be written
    ///
    /// Surfaced to the caller; in-memory state remains authoritative and is
    /// not rolled back. Callers should treat this as requiring a retry or
    /// operator intervention.
    #[error("Could not write record store at {path}: {message}")]
    PersistenceFailure {
        /// Path of the store that failed to write
        path: String,
        /// Description of the I/O failure
        message: String,
    },

    /// A transfer leg failed
    ///
    /// Wraps the account-level failure with the transfer's endpoints. No
    /// state has changed when this is returned.
    #[error("Transfer from {from} to {to} failed: {source}")]
    TransferFailed {
        /// Source account id
        from: AccountId,
        /// Destination account id
        to: AccountId,
        /// The underlying account-level failure
        #[source]
        source: Box<LedgerError>,
    },
}

// Conversion from csv::Error, carrying the line number when available
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::MalformedRecord {
            line,
            message: error.to_string(),
        }
    }
}

// Helper constructors for common errors

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: i64) -> Self {
        LedgerError::InvalidAmount { amount }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountId, balance: i64, requested: i64) -> Self {
        LedgerError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create a WouldEmptyAccount error
    pub fn would_empty_account(account: AccountId, balance: i64) -> Self {
        LedgerError::WouldEmptyAccount { account, balance }
    }

    /// Create a DuplicateOwner error
    pub fn duplicate_owner(owner: OwnerId) -> Self {
        LedgerError::DuplicateOwner { owner }
    }

    /// Create a SameAccount error
    pub fn same_account(account: AccountId) -> Self {
        LedgerError::SameAccount { account }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountId) -> Self {
        LedgerError::AccountNotFound { account }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountId) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }

    /// Create a MalformedRecord error
    pub fn malformed_record(line: Option<u64>, message: impl Into<String>) -> Self {
        LedgerError::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    /// Create a PersistenceFailure error
    pub fn persistence_failure(path: impl Into<String>, message: impl Into<String>) -> Self {
        LedgerError::PersistenceFailure {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Wrap an account-level failure with transfer context
    pub fn transfer_failed(from: AccountId, to: AccountId, source: LedgerError) -> Self {
        LedgerError::TransferFailed {
            from,
            to,
            source: Box::new(source),
        }
    }
}
