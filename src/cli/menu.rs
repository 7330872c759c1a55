//! Interactive menu shell
//!
//! A thin rendering layer over the ledger's entry points: it prompts,
//! parses integers, invokes Ledger/Account operations and prints their
//! results. No business rules live here.
//!
//! The loop is generic over its input and output streams so tests can
//! drive a full session from a string buffer.

use crate::core::Ledger;
use crate::types::{AccountId, LedgerError};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Run the main menu loop until the user exits or input ends
///
/// Errors from ledger operations are printed and the loop continues; only
/// I/O errors on the streams themselves abort the session.
pub fn run(
    ledger: &mut Ledger,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "Welcome to the Bank of Wonderland!")?;
    writeln!(
        output,
        "Loaded {} accounts from {}",
        ledger.len(),
        ledger.store_path().display()
    )?;

    loop {
        writeln!(
            output,
            "\n--- Main Menu ---\n  1 ) Create an account\n  2 ) Log in to existing account\n  3 ) Exit program"
        )?;
        write!(output, "Enter your choice: ")?;
        output.flush()?;

        let Some(choice) = read_line(input)? else {
            return Ok(());
        };

        match choice.trim() {
            "1" => {
                if !create_account(ledger, input, output)? {
                    return Ok(());
                }
            }
            "2" => {
                writeln!(output, "\n--- Account Login ---")?;
                let Some(account_id) = read_number("Enter account number: ", input, output)? else {
                    return Ok(());
                };
                if ledger.find_by_account_id(account_id).is_some() {
                    if !run_account_menu(ledger, account_id, input, output)? {
                        return Ok(());
                    }
                } else {
                    writeln!(output, "No matching account. Check your info and try again.")?;
                }
            }
            "3" => {
                writeln!(output, "\nThank you for banking with the Bank of Wonderland!")?;
                return Ok(());
            }
            _ => writeln!(output, "Invalid choice. Please enter a number from 1 to 3.")?,
        }
    }
}

/// Prompt for the new account's details and open it
///
/// Returns `Ok(false)` when input ended mid-dialog.
fn create_account(
    ledger: &mut Ledger,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<bool> {
    writeln!(output, "\n--- Create New Account ---")?;

    write!(output, "Enter customer name: ")?;
    output.flush()?;
    let Some(name) = read_line(input)? else {
        return Ok(false);
    };
    let Some(owner_id) = read_number("Enter national ID number: ", input, output)? else {
        return Ok(false);
    };
    let Some(initial_deposit) =
        read_number("Enter initial deposit amount (in Rial): ", input, output)?
    else {
        return Ok(false);
    };

    match ledger.create_account(name.trim(), owner_id, initial_deposit) {
        Ok(account) => {
            writeln!(output, "Account was successfully created!")?;
            writeln!(output, "Your new account number is: {}", account.account_id())?;
        }
        Err(e) => writeln!(output, "Error: {e}")?,
    }

    Ok(true)
}

/// Run the per-account menu for a logged-in session
///
/// Returns `Ok(false)` when input ended mid-dialog.
fn run_account_menu(
    ledger: &mut Ledger,
    account_id: AccountId,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<bool> {
    if let Some(account) = ledger.find_by_account_id(account_id) {
        writeln!(output, "\nWelcome, {}!", account.name())?;
    }

    loop {
        writeln!(
            output,
            "\n--- Account Menu ---\n  1 ) Show info\n  2 ) Deposit\n  3 ) Withdraw\n  4 ) Transfer\n  5 ) Exit account"
        )?;
        write!(output, "Enter number of option: ")?;
        output.flush()?;

        let Some(choice) = read_line(input)? else {
            return Ok(false);
        };

        match choice.trim() {
            "1" => {
                if let Some(account) = ledger.find_by_account_id(account_id) {
                    writeln!(output, "\n--- Account Details ---")?;
                    writeln!(output, "{}", account.summary())?;
                }
            }
            "2" => {
                let Some(amount) =
                    read_number("Enter amount to deposit (in Rial): ", input, output)?
                else {
                    return Ok(false);
                };
                let outcome = match ledger.find_by_account_id_mut(account_id) {
                    Some(account) => account.deposit(amount).map(|()| account.balance()),
                    None => Err(LedgerError::account_not_found(account_id)),
                };
                report_balance_change(ledger, outcome, "Deposit", output)?;
            }
            "3" => {
                let Some(amount) =
                    read_number("Enter amount to withdraw (in Rial): ", input, output)?
                else {
                    return Ok(false);
                };
                let outcome = match ledger.find_by_account_id_mut(account_id) {
                    Some(account) => account.withdraw(amount).map(|()| account.balance()),
                    None => Err(LedgerError::account_not_found(account_id)),
                };
                report_balance_change(ledger, outcome, "Withdrawal", output)?;
            }
            "4" => {
                writeln!(output, "\n--- Transfer Funds ---")?;
                let Some(to_id) =
                    read_number("Enter recipient's account number: ", input, output)?
                else {
                    return Ok(false);
                };
                let Some(amount) =
                    read_number("Enter amount to transfer (in Rial): ", input, output)?
                else {
                    return Ok(false);
                };
                match ledger.transfer(account_id, to_id, amount) {
                    Ok(()) => {
                        let balance = ledger
                            .find_by_account_id(account_id)
                            .map(|account| account.balance())
                            .unwrap_or_default();
                        writeln!(output, "Transfer successful! Your new balance: {balance} Rial")?;
                    }
                    Err(e) => writeln!(output, "Error: {e}")?,
                }
            }
            "5" => {
                writeln!(output, "Have a nice day! Returning to main menu...")?;
                return Ok(true);
            }
            _ => writeln!(output, "Invalid choice. Please enter a number from 1 to 5.")?,
        }
    }
}

/// Persist and report a successful single-account mutation, or print the
/// validation error
fn report_balance_change(
    ledger: &Ledger,
    outcome: Result<i64, LedgerError>,
    operation: &str,
    output: &mut impl Write,
) -> io::Result<()> {
    match outcome {
        Ok(balance) => {
            if let Err(e) = ledger.save() {
                writeln!(output, "Warning: {e}")?;
            }
            writeln!(output, "{operation} successful! New balance: {balance} Rial")
        }
        Err(e) => writeln!(output, "Error: {e}"),
    }
}

/// Read one line, returning None at end of input
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Prompt until an integer is entered, returning None at end of input
fn read_number<T: FromStr>(
    prompt: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<Option<T>> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.trim().parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(output, "Oops! Input must be an integer. Please try again.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn temp_ledger() -> (tempfile::TempDir, Ledger) {
        let dir = tempdir().unwrap();
        let ledger = Ledger::new(dir.path().join("Bank.csv"));
        (dir, ledger)
    }

    fn run_session(ledger: &mut Ledger, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run(ledger, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let (_dir, mut ledger) = temp_ledger();
        let transcript = run_session(&mut ledger, "3\n");
        assert!(transcript.contains("Thank you for banking"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (_dir, mut ledger) = temp_ledger();
        let transcript = run_session(&mut ledger, "");
        assert!(transcript.contains("Main Menu"));
    }

    #[test]
    fn test_create_account_via_menu() {
        let (_dir, mut ledger) = temp_ledger();
        let transcript = run_session(&mut ledger, "1\nAlice\n111\n1000\n3\n");

        assert!(transcript.contains("Account was successfully created!"));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.find_by_owner(111).unwrap().balance(), 1000);
    }

    #[test]
    fn test_create_account_reprompts_on_non_integer_input() {
        let (_dir, mut ledger) = temp_ledger();
        let transcript = run_session(&mut ledger, "1\nAlice\nnot-a-number\n111\n1000\n3\n");

        assert!(transcript.contains("Oops! Input must be an integer."));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_duplicate_owner_is_reported() {
        let (_dir, mut ledger) = temp_ledger();
        ledger.create_account("Alice", 111, 1000).unwrap();

        let transcript = run_session(&mut ledger, "1\nAlice Again\n111\n500\n3\n");
        assert!(transcript.contains("An account already exists for national ID 111"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_login_unknown_account() {
        let (_dir, mut ledger) = temp_ledger();
        let transcript = run_session(&mut ledger, "2\n123456789\n3\n");
        assert!(transcript.contains("No matching account"));
    }

    #[test]
    fn test_deposit_and_withdraw_session() {
        let (_dir, mut ledger) = temp_ledger();
        let account_id = ledger.create_account("Alice", 111, 1000).unwrap().account_id();

        let script = format!("2\n{account_id}\n2\n500\n3\n200\n5\n3\n");
        let transcript = run_session(&mut ledger, &script);

        assert!(transcript.contains("Welcome, Alice!"));
        assert!(transcript.contains("Deposit successful! New balance: 1500 Rial"));
        assert!(transcript.contains("Withdrawal successful! New balance: 1300 Rial"));
        assert_eq!(ledger.find_by_account_id(account_id).unwrap().balance(), 1300);
    }

    #[test]
    fn test_withdrawal_error_keeps_session_alive() {
        let (_dir, mut ledger) = temp_ledger();
        let account_id = ledger.create_account("Alice", 111, 1000).unwrap().account_id();

        // Exact-balance withdrawal is rejected, then the summary still works
        let script = format!("2\n{account_id}\n3\n1000\n1\n5\n3\n");
        let transcript = run_session(&mut ledger, &script);

        assert!(transcript.contains("accounts cannot be emptied"));
        assert!(transcript.contains("Balance:         1000 Rial"));
        assert_eq!(ledger.find_by_account_id(account_id).unwrap().balance(), 1000);
    }

    #[test]
    fn test_transfer_session() {
        let (_dir, mut ledger) = temp_ledger();
        let a = ledger.create_account("Alice", 111, 1000).unwrap().account_id();
        let b = ledger.create_account("Bob", 222, 200).unwrap().account_id();

        let script = format!("2\n{a}\n4\n{b}\n300\n5\n3\n");
        let transcript = run_session(&mut ledger, &script);

        assert!(transcript.contains("Transfer successful! Your new balance: 700 Rial"));
        assert_eq!(ledger.find_by_account_id(b).unwrap().balance(), 500);
    }
}
