//! Bank Ledger Library
//! # Overview
//!
//! This library provides a single-user account ledger persisted to a flat
//! CSV record store, with deposits, withdrawals and atomic two-account
//! transfers.
//!
//! # Architecture
//!
//! The system is organized into several key components, read bottom-up:
//!
//! - [`types`] - Core data types:
//!   - [`types::account`] - a single account and its balance rules
//!   - [`types::error`] - the error taxonomy for all ledger operations
//! - [`core`] - Business logic:
//!   - [`core::ledger`] - the owning account collection, id assignment,
//!     transfer orchestration and persistence
//! - [`io`] - Record store format handling
//! - [`cli`] - Argument parsing and the interactive menu shell
//! - [`datagen`] - Synthetic account generation for demos and testing
//!
//! # Invariants
//!
//! - Balances are non-negative integers in the smallest currency unit and a
//!   successful withdrawal always leaves the balance strictly positive
//!   (emptying an account by withdrawal is a business-rule violation).
//! - Account numbers are unique 9-digit identifiers; each owner holds at
//!   most one account.
//! - Transfers are all-or-nothing: a failing transfer leaves both balances
//!   bit-for-bit unchanged, a successful one conserves total funds and is
//!   persisted in a single store rewrite.
//! - Validation failures never mutate state; a failed save never rolls back
//!   in-memory state, which stays authoritative.

// Module declarations
pub mod cli;
pub mod core;
pub mod datagen;
pub mod io;
pub mod types;

pub use core::{Ledger, ACCOUNT_ID_MAX, ACCOUNT_ID_MIN};
pub use types::{Account, AccountId, LedgerError, OwnerId};
