//! I/O module
//!
//! Handles the flat-file record store.
//!
//! # Components
//!
//! - `store` - store format handling (row conversion, whole-file read/write)

pub mod store;

pub use store::{account_row, convert_store_row, read_store, write_store, StoreRow, STORE_HEADER};
