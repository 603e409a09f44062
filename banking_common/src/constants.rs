//! Banking constants

use std::num::NonZeroU32;

/// Every account is opened in this branch.
pub const BRANCH_CODE: &str = "0001";

/// The largest amount a single withdrawal may take out, in whole currency units.
pub const MAX_WITHDRAWAL_AMOUNT: NonZeroU32 = match NonZeroU32::new(500) {
    Some(limit) => limit,
    None => panic!("The withdrawal ceiling must be positive."),
};

/// How many withdrawals an account may make during one session.
pub const MAX_WITHDRAWALS: u32 = 3;

pub const CURRENCY_SYMBOL: &str = "R$";

/// A CPF is exactly 11 ASCII digits.
///
/// `\d` would also match non-ASCII digits in the `regex` crate, hence the explicit class.
pub const CPF_PATTERN: &str = r"^[0-9]{11}$";

/// Account numbers start from this value and grow by one.
pub const FIRST_ACCOUNT_NUMBER: u32 = 1;
