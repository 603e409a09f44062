use crate::constants::{BRANCH_CODE, FIRST_ACCOUNT_NUMBER, MAX_WITHDRAWALS, MAX_WITHDRAWAL_AMOUNT};
use crate::core::types::{Amount, Money};
use crate::errors::BankingError;
use crate::tx::Tx;
use crate::users::{User, Users};
use log::{info, warn};
use rust_decimal::Decimal;
use std::rc::Rc;

/// **Withdrawal limits applied to every account**
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    /// Ceiling for a single withdrawal
    pub max_withdrawal_amount: Amount,
    /// How many withdrawals an account may make per session
    pub max_withdrawals: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_withdrawal_amount: Amount::from(MAX_WITHDRAWAL_AMOUNT),
            max_withdrawals: MAX_WITHDRAWALS,
        }
    }
}

/// **A bank account**
///
/// The owner never changes. The statement only ever grows.
#[derive(Debug)]
pub struct Account {
    branch_code: &'static str,
    number: u32,
    owner: Rc<User>,
    balance: Decimal,
    statement: Vec<Tx>,
    withdrawals: u32,
}

impl Account {
    fn new(number: u32, owner: Rc<User>) -> Self {
        Self {
            branch_code: BRANCH_CODE,
            number,
            owner,
            balance: Decimal::ZERO,
            statement: Vec::new(),
            withdrawals: 0,
        }
    }

    pub fn branch_code(&self) -> &str {
        self.branch_code
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn owner(&self) -> &User {
        &self.owner
    }

    pub fn balance(&self) -> Money {
        Money(self.balance)
    }

    /// All transactions, oldest first
    pub fn statement(&self) -> &[Tx] {
        &self.statement
    }

    /// Number of successful withdrawals so far
    pub fn withdrawals(&self) -> u32 {
        self.withdrawals
    }

    /// Deposits the `amount` provided and records it in the statement.
    ///
    /// # Errors
    /// - The balance would overflow, `BankingError::BalanceOverflow`;
    ///   the account is left unchanged.
    pub fn deposit(&mut self, amount: Amount) -> Result<Tx, BankingError> {
        let Some(balance) = self.balance.checked_add(amount.value()) else {
            warn!("Account {}: deposit of {amount} refused: balance overflow", self.number);
            return Err(BankingError::BalanceOverflow {
                balance: self.balance(),
                amount,
            });
        };
        self.balance = balance;

        let tx = Tx::Deposit { amount };
        self.statement.push(tx.clone());
        info!("Account {}: {tx}", self.number);

        Ok(tx)
    }

    /// Withdraws the `amount` provided and records it in the statement.
    ///
    /// The guards are checked in this exact order, and only the first one that fails is reported.
    ///
    /// # Errors
    /// - Amount larger than the balance, `BankingError::InsufficientFunds`;
    /// - Amount larger than the per-withdrawal ceiling, `BankingError::LimitExceeded`;
    /// - Withdrawal count already at the cap, `BankingError::WithdrawalCountExceeded`.
    pub fn withdraw(&mut self, amount: Amount, limits: &Limits) -> Result<Tx, BankingError> {
        let result = if amount.value() > self.balance {
            Err(BankingError::InsufficientFunds {
                balance: self.balance(),
                amount,
            })
        } else if amount > limits.max_withdrawal_amount {
            Err(BankingError::LimitExceeded {
                limit: limits.max_withdrawal_amount,
                amount,
            })
        } else if self.withdrawals >= limits.max_withdrawals {
            Err(BankingError::WithdrawalCountExceeded(limits.max_withdrawals))
        } else {
            Ok(())
        };

        if let Err(err) = result {
            warn!("Account {}: withdrawal of {amount} refused: {err}", self.number);
            return Err(err);
        }

        self.balance -= amount.value();
        self.withdrawals += 1;

        let tx = Tx::Withdraw { amount };
        self.statement.push(tx.clone());
        info!("Account {}: {tx}", self.number);

        Ok(tx)
    }
}

/// **The account registry**
///
/// Account numbers are handed out sequentially, starting from [`FIRST_ACCOUNT_NUMBER`].
/// Accounts are never closed, so a number is never reused.
#[derive(Debug, Default)]
pub struct Accounts {
    accounts: Vec<Account>,
}

impl Accounts {
    /// Returns an empty instance of the [`Accounts`] type
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new account for the user with the `cpf` provided.
    ///
    /// A user may own any number of accounts.
    ///
    /// # Errors
    /// - No such user, `BankingError::UserNotFound`;
    /// - No account numbers left, `BankingError::AccountNumbersExhausted`.
    pub fn open_account(&mut self, users: &Users, cpf: &str) -> Result<&Account, BankingError> {
        let Some(owner) = users.find_by_identifier(cpf) else {
            warn!("Cannot open an account: user {cpf} not found");
            return Err(BankingError::UserNotFound(cpf.to_string()));
        };

        let number = next_account_number(self.accounts.len())?;
        self.accounts.push(Account::new(number, Rc::clone(owner)));
        info!("Opened account {number} for user {cpf}");

        Ok(&self.accounts[self.accounts.len() - 1])
    }

    /// All accounts, in the order they were opened
    pub fn list_accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn find_by_number(&self, number: u32) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number == number)
    }

    pub fn find_by_number_mut(&mut self, number: u32) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number == number)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// The number for the account opened after `opened` others.
///
/// # Errors
/// - No numbers left, `BankingError::AccountNumbersExhausted`
fn next_account_number(opened: usize) -> Result<u32, BankingError> {
    u32::try_from(opened)
        .ok()
        .and_then(|opened| FIRST_ACCOUNT_NUMBER.checked_add(opened))
        .ok_or(BankingError::AccountNumbersExhausted)
}
