use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Single-user account ledger over a flat-file record store
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Bank of Wonderland account ledger", long_about = None)]
pub struct CliArgs {
    /// Path to the bank's CSV record store
    #[arg(
        long = "db",
        value_name = "PATH",
        default_value = "Bank.csv",
        help = "Path to the bank's CSV record store (default: Bank.csv)"
    )]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Maintenance subcommands; without one the interactive menu runs
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Populate a record store with synthetic accounts
    Generate {
        /// Number of accounts to generate
        #[arg(
            long = "accounts",
            value_name = "COUNT",
            default_value_t = 50,
            help = "Number of synthetic accounts to generate"
        )]
        accounts: usize,

        /// Where to write the generated store (defaults to the --db path)
        #[arg(long = "output", value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

/// Parse command-line arguments
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case::default_db(&["bank-ledger"], "Bank.csv")]
    #[case::custom_db(&["bank-ledger", "--db", "other.csv"], "other.csv")]
    fn test_db_path_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.db, Path::new(expected));
        assert!(parsed.command.is_none());
    }

    #[rstest]
    #[case::defaults(&["bank-ledger", "generate"], 50, None)]
    #[case::custom_count(&["bank-ledger", "generate", "--accounts", "10"], 10, None)]
    #[case::custom_output(
        &["bank-ledger", "generate", "--accounts", "10", "--output", "seed.csv"],
        10,
        Some("seed.csv")
    )]
    fn test_generate_subcommand(
        #[case] args: &[&str],
        #[case] expected_accounts: usize,
        #[case] expected_output: Option<&str>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        match parsed.command {
            Some(Command::Generate { accounts, output }) => {
                assert_eq!(accounts, expected_accounts);
                assert_eq!(output.as_deref(), expected_output.map(Path::new));
            }
            other => panic!("Expected generate subcommand, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(CliArgs::try_parse_from(["bank-ledger", "frobnicate"]).is_err());
    }
}
