use crate::core::types::Amount;
use std::fmt;

/// **A transaction type**
///
/// Every successful deposit or withdrawal is recorded as one `Tx`
/// in the account's statement, in the order it happened.
/// Replaying the statement from a zero balance rebuilds the current balance.
#[derive(Clone, Debug, PartialEq)]
pub enum Tx {
    Deposit { amount: Amount },
    Withdraw { amount: Amount },
}

/// One statement line, e.g. `Deposit:	R$ 100.00`.
impl fmt::Display for Tx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tx::Deposit { amount } => write!(f, "Deposit:\t{amount}"),
            Tx::Withdraw { amount } => write!(f, "Withdrawal:\t{amount}"),
        }
    }
}
