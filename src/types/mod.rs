//! Types module
//!
//! Contains core data structures used throughout the application:
//! - `account`: the Account record, its identifiers and balance operations
//! - `error`: error types for ledger operations

pub mod account;
pub mod error;

pub use account::{Account, AccountId, OwnerId};
pub use error::LedgerError;
