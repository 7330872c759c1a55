//! Record store format handling
//!
//! This module centralizes all flat-file format concerns for the ledger's
//! record store, providing:
//! - the store header and `StoreRow` structure for (de)serialization
//! - pure conversion between rows and [`Account`] values
//! - whole-file read and write functions
//!
//! # Format
//!
//! The store is a CSV file with exactly four columns:
//!
//! ```csv
//! Customer,National ID,Acc Num,Credit
//! Alice,111,100000001,5000
//! ```
//!
//! # Error Handling
//!
//! - A missing store file is an empty ledger, not an error; the file is
//!   created on first save.
//! - A header mismatch is logged as a warning and rows are still parsed
//!   positionally.
//! - A row with the wrong field count or a non-integer numeric field is
//!   skipped with a warning; loading continues with the next row.
//! - Write failures are fatal to the save operation and reported as
//!   [`LedgerError::PersistenceFailure`].

use crate::types::{Account, LedgerError};
use csv::{ReaderBuilder, Trim, Writer};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use tracing::warn;

/// Expected store header, in column order
pub const STORE_HEADER: [&str; 4] = ["Customer", "National ID", "Acc Num", "Credit"];

/// One row of the record store
///
/// Numeric fields are kept as strings at this layer so that a single
/// unparseable field condemns only its own row, not the whole file.
/// Serialization uses the renamed field names, which makes the CSV writer
/// emit the exact store header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRow {
    #[serde(rename = "Customer")]
    pub customer: String,
    #[serde(rename = "National ID")]
    pub national_id: String,
    #[serde(rename = "Acc Num")]
    pub acc_num: String,
    #[serde(rename = "Credit")]
    pub credit: String,
}

/// Convert a store row into an Account
///
/// Parses the three numeric fields; any parse failure describes the field
/// that failed. Pure function, no I/O.
pub fn convert_store_row(row: StoreRow) -> Result<Account, String> {
    let owner_id = row
        .national_id
        .trim()
        .parse()
        .map_err(|_| format!("invalid national ID '{}'", row.national_id))?;

    let account_id = row
        .acc_num
        .trim()
        .parse()
        .map_err(|_| format!("invalid account number '{}'", row.acc_num))?;

    let balance = row
        .credit
        .trim()
        .parse()
        .map_err(|_| format!("invalid balance '{}'", row.credit))?;

    Ok(Account::new(row.customer, owner_id, account_id, balance))
}

/// Render an Account as a store row
///
/// Pure function, no I/O. Inverse of [`convert_store_row`] for well-formed
/// accounts.
pub fn account_row(account: &Account) -> StoreRow {
    StoreRow {
        customer: account.name().to_string(),
        national_id: account.owner_id().to_string(),
        acc_num: account.account_id().to_string(),
        credit: account.balance().to_string(),
    }
}

/// Read every well-formed account record from the store
///
/// A missing file yields an empty vector. A header mismatch is logged as a
/// warning; rows are parsed positionally so loading still proceeds. Rows
/// that fail to parse are skipped with a warning.
///
/// # Errors
///
/// Returns [`LedgerError::PersistenceFailure`] only when the store exists
/// but cannot be opened (for example a permission error).
pub fn read_store(path: &Path) -> Result<Vec<Account>, LedgerError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "record store not found; starting with an empty ledger");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(LedgerError::persistence_failure(
                path.display().to_string(),
                e.to_string(),
            ))
        }
    };

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(file);

    match reader.headers() {
        Ok(headers) if headers.is_empty() => return Ok(Vec::new()),
        Ok(headers) if headers.iter().ne(STORE_HEADER.iter().copied()) => {
            warn!(
                expected = ?STORE_HEADER,
                actual = ?headers,
                "store header mismatch; parsing rows positionally"
            );
        }
        Ok(_) => {}
        Err(e) => {
            // An unreadable header line condemns only itself
            warn!(error = %e, "could not read store header");
        }
    }

    let mut accounts = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                let parse_error: LedgerError = e.into();
                warn!(error = %parse_error, "skipping malformed store row");
                continue;
            }
        };

        if record.is_empty() {
            continue;
        }

        let line = record.position().map(|pos| pos.line());

        // Positional deserialization: four string fields in header order
        let row: StoreRow = match record.deserialize(None) {
            Ok(row) => row,
            Err(e) => {
                warn!(
                    error = %LedgerError::malformed_record(line, e.to_string()),
                    "skipping malformed store row"
                );
                continue;
            }
        };

        match convert_store_row(row) {
            Ok(account) => accounts.push(account),
            Err(message) => {
                warn!(
                    error = %LedgerError::malformed_record(line, message),
                    "skipping malformed store row"
                );
            }
        }
    }

    Ok(accounts)
}

/// Write the full account set to the store, replacing prior contents
///
/// Emits the store header followed by one row per account, in the order
/// given by the caller.
///
/// # Errors
///
/// Returns [`LedgerError::PersistenceFailure`] if the file cannot be
/// created or written.
pub fn write_store(path: &Path, accounts: &[&Account]) -> Result<(), LedgerError> {
    let fail = |e: &dyn std::fmt::Display| {
        LedgerError::persistence_failure(path.display().to_string(), e.to_string())
    };

    let mut writer = Writer::from_path(path).map_err(|e| fail(&e))?;

    // serialize() writes the renamed field names as the header row first
    for account in accounts {
        writer.serialize(account_row(account)).map_err(|e| fail(&e))?;
    }

    // An empty ledger still gets its header
    if accounts.is_empty() {
        writer
            .write_record(STORE_HEADER.iter())
            .map_err(|e| fail(&e))?;
    }

    writer.flush().map_err(|e| fail(&e))?;
    Ok(())
}
