use crate::core::types::{Amount, Money};
use thiserror::Error;

/// **An application-specific error type**
///
/// The `Display` text of every variant is the message shown to the operator.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BankingError {
    /// The identifier is not exactly 11 ASCII digits.
    #[error("Invalid CPF \"{0}\"; it must contain exactly 11 digits.")]
    InvalidCpf(String),

    #[error("A user with CPF {0} already exists!")]
    DuplicateUser(String),

    #[error("User with CPF \"{0}\" not found; account creation aborted!")]
    UserNotFound(String),

    #[error("No more account numbers are available!")]
    AccountNumbersExhausted,

    #[error("Account \"{0}\" not found!")]
    AccountNotFound(String),

    /// Covers both an unparsable amount and a non-positive one.
    #[error("Operation failed! The amount provided is invalid.")]
    InvalidAmount(String),

    #[error("Operation failed! A deposit of {amount} would overflow the balance ({balance}).")]
    BalanceOverflow { balance: Money, amount: Amount },

    #[error("Operation failed! Insufficient balance ({balance}) for a withdrawal of {amount}.")]
    InsufficientFunds { balance: Money, amount: Amount },

    #[error("Operation failed! The withdrawal of {amount} exceeds the limit of {limit}.")]
    LimitExceeded { limit: Amount, amount: Amount },

    #[error("Operation failed! The maximum number of withdrawals ({0}) has been reached.")]
    WithdrawalCountExceeded(u32),

    #[error("Invalid operation \"{0}\"; please select the desired operation again.")]
    UnrecognizedCommand(String),
}
