//! Helper functions that render session output

use crate::accounts::Account;
use crate::cli::constants::*;
use crate::errors::BankingError;
use std::fmt::Write;

/// Wraps a success message, e.g. `=== Deposit completed successfully! ===`.
pub fn success(message: &str) -> String {
    format!("\n=== {message} ===")
}

/// Wraps an error message, e.g. `@@@ Account "9" not found! @@@`.
pub fn failure(err: &BankingError) -> String {
    format!("\n@@@ {err} @@@")
}

/// **Renders the statement of an account**
///
/// Lists every transaction in the order it happened, then the current balance.
pub fn format_statement(account: &Account) -> String {
    let mut report = format!("\n{STATEMENT_HEADER}\n");

    if account.statement().is_empty() {
        report.push_str(NO_TRANSACTIONS);
        report.push('\n');
    } else {
        for tx in account.statement() {
            // Writing into a `String` cannot fail.
            let _ = writeln!(report, "{tx}");
        }
    }

    let _ = write!(
        report,
        "\nBalance:\t\t{}\n{STATEMENT_FOOTER}",
        account.balance()
    );

    report
}

/// **Renders all accounts, one block per account**
pub fn format_account_listing(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return NO_ACCOUNTS.to_string();
    }

    let separator = "=".repeat(LISTING_SEPARATOR_WIDTH);
    let mut listing = String::new();

    for account in accounts {
        let _ = write!(
            listing,
            "{separator}\nBranch:\t\t{}\nAccount:\t{}\nHolder:\t\t{}\n",
            account.branch_code(),
            account.number(),
            account.owner().full_name
        );
    }

    listing.truncate(listing.trim_end().len());
    listing
}
