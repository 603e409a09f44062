pub mod accounts;
pub mod bank;
pub mod cli;
pub mod constants;
pub mod core;
pub mod errors;
pub mod tx;
pub mod users;
pub mod validation;

pub use bank::Bank;
pub use crate::core::types;
pub use errors::BankingError;
