//! Bank Ledger CLI
//!
//! Interactive shell over the account ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --db Bank.csv
//! cargo run -- generate --accounts 50 --output Bank.csv
//! ```
//!
//! Without a subcommand the program loads the record store and runs the
//! interactive menu (create account, log in, deposit, withdraw, transfer).
//! The `generate` subcommand seeds a store with synthetic accounts.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (store not readable, generation failed, etc.)

use bank_ledger::cli::{self, menu, Command};
use bank_ledger::core::Ledger;
use bank_ledger::datagen;
use std::error::Error;
use std::io;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Warnings (malformed store rows, header mismatches) go to stderr so
    // they never interleave with menu output parsing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = cli::parse_args();

    let result = match args.command {
        Some(Command::Generate { accounts, output }) => {
            let path = output.unwrap_or_else(|| args.db.clone());
            generate(&path, accounts)
        }
        None => run_menu(&args.db),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Seed a record store with synthetic accounts
fn generate(path: &Path, accounts: usize) -> Result<(), Box<dyn Error>> {
    let written = datagen::generate_store(path, accounts)?;
    println!(
        "Successfully generated '{}' with {written} accounts.",
        path.display()
    );
    Ok(())
}

/// Load the ledger and run the interactive menu on stdin/stdout
fn run_menu(db: &Path) -> Result<(), Box<dyn Error>> {
    let mut ledger = Ledger::new(db);
    ledger.load()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    menu::run(&mut ledger, &mut input, &mut output)?;
    Ok(())
}
