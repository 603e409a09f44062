use crate::constants::CURRENCY_SYMBOL;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::num::NonZeroU32;

/// A validated CPF: exactly 11 ASCII digits
///
/// It can only be obtained through [`crate::validation::validate_cpf`],
/// so holding a `Cpf` means the format check has already passed.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Cpf(String);

impl Cpf {
    pub(crate) fn new_unchecked(digits: &str) -> Self {
        Self(digits.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A sum of money, rendered as currency with exactly two decimal places
///
/// Used for balances, which may be zero.
/// Rounding to cents happens only when displaying; the stored value keeps full precision.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Money(pub Decimal);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{CURRENCY_SYMBOL} {cents:.2}")
    }
}

/// **A strictly positive amount of money for a single deposit or withdrawal**
///
/// Parse one from operator input with [`crate::validation::validate_amount`].
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    /// Returns `None` unless `value` is greater than zero.
    pub fn new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<NonZeroU32> for Amount {
    fn from(whole_units: NonZeroU32) -> Self {
        Self(Decimal::from(whole_units.get()))
    }
}

impl From<Amount> for Money {
    fn from(amount: Amount) -> Self {
        Money(amount.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Money::from(*self), f)
    }
}
