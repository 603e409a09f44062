use crate::accounts::{Account, Accounts, Limits};
use crate::core::types::{Amount, Cpf};
use crate::errors::BankingError;
use crate::tx::Tx;
use crate::users::{User, Users};
use log::warn;
use std::rc::Rc;

/// **Owns the user and account registries for one session**
///
/// Nothing else mutates the registries; every change goes through a `Bank` method.
#[derive(Debug, Default)]
pub struct Bank {
    users: Users,
    accounts: Accounts,
    limits: Limits,
}

impl Bank {
    /// **Creates a new instance without any data**, with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// **Creates a new instance without any data**, with custom withdrawal limits.
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn users(&self) -> &Users {
        &self.users
    }

    pub fn accounts(&self) -> &Accounts {
        &self.accounts
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// **Checks a CPF before collecting the rest of a new user's data**
    ///
    /// # Errors
    /// - Malformed identifier, `BankingError::InvalidCpf`;
    /// - Identifier already taken, `BankingError::DuplicateUser`.
    pub fn ensure_cpf_available(&self, cpf: &str) -> Result<Cpf, BankingError> {
        self.users.ensure_available(cpf)
    }

    /// **Registers a new user**
    ///
    /// # Errors
    /// - Malformed identifier, `BankingError::InvalidCpf`;
    /// - Identifier already taken, `BankingError::DuplicateUser`.
    pub fn register_user(
        &mut self,
        cpf: &str,
        full_name: &str,
        birth_date: &str,
        address: &str,
    ) -> Result<Rc<User>, BankingError> {
        self.users.register(cpf, full_name, birth_date, address)
    }

    /// **Opens a new account for an existing user**
    ///
    /// # Errors
    /// - No such user, `BankingError::UserNotFound`;
    /// - No account numbers left, `BankingError::AccountNumbersExhausted`.
    pub fn open_account(&mut self, cpf: &str) -> Result<&Account, BankingError> {
        self.accounts.open_account(&self.users, cpf)
    }

    /// **Selects an account by the number the operator typed in**
    ///
    /// Anything that isn't the number of an existing account is a miss.
    ///
    /// # Errors
    /// - No such account, `BankingError::AccountNotFound`
    pub fn select_account(&self, raw: &str) -> Result<u32, BankingError> {
        raw.trim()
            .parse::<u32>()
            .ok()
            .and_then(|number| self.accounts.find_by_number(number))
            .map(Account::number)
            .ok_or_else(|| {
                warn!("Account \"{raw}\" not found");
                BankingError::AccountNotFound(raw.to_string())
            })
    }

    /// **Looks up an account by its number**
    ///
    /// # Errors
    /// - No such account, `BankingError::AccountNotFound`
    pub fn account(&self, number: u32) -> Result<&Account, BankingError> {
        self.accounts
            .find_by_number(number)
            .ok_or_else(|| BankingError::AccountNotFound(number.to_string()))
    }

    /// **Deposit funds**
    ///
    /// # Errors
    /// - No such account, `BankingError::AccountNotFound`;
    /// - The balance would overflow, `BankingError::BalanceOverflow`.
    pub fn deposit(&mut self, number: u32, amount: Amount) -> Result<Tx, BankingError> {
        let account = self.account_mut(number)?;
        account.deposit(amount)
    }

    /// **Withdraw funds**
    ///
    /// # Errors
    /// - No such account, `BankingError::AccountNotFound`;
    /// - Any of the withdrawal guards, see [`Account::withdraw`].
    pub fn withdraw(&mut self, number: u32, amount: Amount) -> Result<Tx, BankingError> {
        let limits = self.limits;
        let account = self.account_mut(number)?;
        account.withdraw(amount, &limits)
    }

    fn account_mut(&mut self, number: u32) -> Result<&mut Account, BankingError> {
        self.accounts
            .find_by_number_mut(number)
            .ok_or_else(|| BankingError::AccountNotFound(number.to_string()))
    }
}
