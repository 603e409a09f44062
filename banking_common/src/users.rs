use crate::core::types::Cpf;
use crate::errors::BankingError;
use crate::validation::validate_cpf;
use log::{info, warn};
use std::rc::Rc;

/// **A registered individual**
///
/// Users are never changed or removed once registered.
#[derive(Debug, PartialEq)]
pub struct User {
    pub full_name: String,
    /// Free-form, expected as `dd-mm-yyyy`, but not validated.
    pub birth_date: String,
    pub cpf: Cpf,
    pub address: String,
}

/// **The user registry**
///
/// Keeps users in registration order. A CPF appears at most once.
#[derive(Debug, Default)]
pub struct Users {
    users: Vec<Rc<User>>,
}

impl Users {
    /// Returns an empty instance of the [`Users`] type
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether a new user could be registered with the `cpf` provided.
    ///
    /// Lets a caller reject an identifier before asking for the rest of the user's data.
    ///
    /// # Errors
    /// - Malformed identifier, `BankingError::InvalidCpf`;
    /// - Identifier already taken, `BankingError::DuplicateUser`.
    pub fn ensure_available(&self, cpf: &str) -> Result<Cpf, BankingError> {
        let cpf = validate_cpf(cpf)?;

        if self.find_by_identifier(cpf.as_str()).is_some() {
            warn!("Rejected duplicate CPF {cpf}");
            return Err(BankingError::DuplicateUser(cpf.to_string()));
        }

        Ok(cpf)
    }

    /// Registers a new user.
    ///
    /// # Errors
    /// - Malformed identifier, `BankingError::InvalidCpf`;
    /// - Identifier already taken, `BankingError::DuplicateUser`.
    pub fn register(
        &mut self,
        cpf: &str,
        full_name: &str,
        birth_date: &str,
        address: &str,
    ) -> Result<Rc<User>, BankingError> {
        let cpf = self.ensure_available(cpf)?;

        let user = Rc::new(User {
            full_name: full_name.to_string(),
            birth_date: birth_date.to_string(),
            cpf,
            address: address.to_string(),
        });
        self.users.push(Rc::clone(&user));
        info!("Registered user {} ({})", user.cpf, user.full_name);

        Ok(user)
    }

    /// Looks up a user by their CPF.
    pub fn find_by_identifier(&self, cpf: &str) -> Option<&Rc<User>> {
        self.users.iter().find(|user| user.cpf.as_str() == cpf)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
