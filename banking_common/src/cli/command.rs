//! The menu commands
//!
//! Every command has exactly one short token, and the menu is generated from
//! the same table that resolves tokens, so the two cannot drift apart.

use crate::cli::constants::*;
use crate::errors::BankingError;

/// **A menu command**
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewUser,
    Quit,
}

impl Command {
    /// All commands, in menu order, with their tokens and menu labels
    pub const TABLE: [(&'static str, Command, &'static str); 7] = [
        (DEPOSIT, Command::Deposit, "Deposit"),
        (WITHDRAW, Command::Withdraw, "Withdraw"),
        (STATEMENT, Command::Statement, "Statement"),
        (NEW_ACCOUNT, Command::NewAccount, "New account"),
        (LIST_ACCOUNTS, Command::ListAccounts, "List accounts"),
        (NEW_USER, Command::NewUser, "New user"),
        (QUIT, Command::Quit, "Quit"),
    ];

    /// **Resolves a token typed in by the operator.**
    ///
    /// Surrounding whitespace is ignored; matching is case-sensitive.
    ///
    /// # Errors
    /// - Unknown token, `BankingError::UnrecognizedCommand`
    pub fn from_token(token: &str) -> Result<Self, BankingError> {
        let token = token.trim();

        Self::TABLE
            .iter()
            .find(|(candidate, _, _)| *candidate == token)
            .map(|&(_, command, _)| command)
            .ok_or_else(|| BankingError::UnrecognizedCommand(token.to_string()))
    }

    pub fn token(self) -> &'static str {
        Self::TABLE
            .iter()
            .find(|(_, command, _)| *command == self)
            .map(|&(token, _, _)| token)
            .unwrap_or_default()
    }

    /// Whether the command first needs an account to be selected
    pub fn targets_account(self) -> bool {
        matches!(self, Command::Deposit | Command::Withdraw | Command::Statement)
    }
}

/// **Contains the full menu.**
///
/// Ends with the prompt, without a trailing newline.
pub fn menu() -> String {
    let mut menu = format!("\n{MENU_HEADER}\n");
    for (token, _, label) in Command::TABLE {
        menu.push_str(&format!("[{token}]\t{label}\n"));
    }
    menu.push_str(MENU_PROMPT);
    menu
}
