//! Core module
//!
//! Business logic components:
//! - `ledger` - account collection, identifier assignment, transfers and
//!   persistence orchestration

pub mod ledger;

pub use ledger::{Ledger, ACCOUNT_ID_MAX, ACCOUNT_ID_MIN};
