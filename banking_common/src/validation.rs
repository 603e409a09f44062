//! Validation of raw operator input

use crate::constants::CPF_PATTERN;
use crate::core::types::{Amount, Cpf};
use crate::errors::BankingError;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

static CPF_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(CPF_PATTERN).expect("The CPF pattern is a valid regex."));

/// **Checks that a CPF consists of exactly 11 ASCII digits**
///
/// The input is matched as is; no trimming is done here.
///
/// # Errors
/// - Anything else, `BankingError::InvalidCpf`
pub fn validate_cpf(raw: &str) -> Result<Cpf, BankingError> {
    if CPF_REGEX.is_match(raw) {
        Ok(Cpf::new_unchecked(raw))
    } else {
        Err(BankingError::InvalidCpf(raw.to_string()))
    }
}

/// **Parses a monetary amount typed in by the operator**
///
/// Surrounding whitespace is ignored.
/// Accepts plain decimal notation, like `100.50`, and scientific notation, like `1e2`.
///
/// # Errors
/// - Not a number, or not strictly positive, `BankingError::InvalidAmount`;
///   the two causes are told apart only in the log.
pub fn validate_amount(raw: &str) -> Result<Amount, BankingError> {
    let trimmed = raw.trim();

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|err| {
            debug!("Amount \"{trimmed}\" is not a number: {err}");
            BankingError::InvalidAmount(raw.to_string())
        })?;

    Amount::new(value).ok_or_else(|| {
        debug!("Amount {value} is not positive");
        BankingError::InvalidAmount(raw.to_string())
    })
}
