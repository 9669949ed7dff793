use crate::types::errors::MonetaryError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DISPLAY_PLACES: u32 = 2;

/// Exact base-10 amount. Arithmetic never goes through binary floating point.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Monetary(Decimal);

impl Monetary {
    pub const ZERO: Monetary = Monetary(Decimal::ZERO);

    pub fn checked_add(self, rhs: Monetary) -> Result<Monetary, MonetaryError> {
        self.0.checked_add(rhs.0).map(Monetary).ok_or(MonetaryError::Overflow)
    }

    pub fn checked_sub(self, rhs: Monetary) -> Result<Monetary, MonetaryError> {
        self.0.checked_sub(rhs.0).map(Monetary).ok_or(MonetaryError::Overflow)
    }
}

impl From<Decimal> for Monetary {
    fn from(value: Decimal) -> Self {
        Monetary(value)
    }
}

impl From<Monetary> for Decimal {
    fn from(value: Monetary) -> Self {
        value.0
    }
}

impl Display for Monetary {
    /// Always two fraction digits, `.` as the decimal point, midpoint away from zero.
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let mut rounded = self.0.round_dp_with_strategy(DISPLAY_PLACES, RoundingStrategy::MidpointAwayFromZero);

        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }

        write!(formatter, "{:.places$}", rounded, places = DISPLAY_PLACES as usize)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        //NOTE: Decimal::from_str tolerates '_' separators, which are not part of the ledger format
        if !value.bytes().all(|byte| byte.is_ascii_digit() || matches!(byte, b'.' | b'-' | b'+')) {
            return Err(MonetaryError::InvalidFormat(format!("Value [{value}] contains invalid characters")));
        }

        Decimal::from_str(value)
            .map(Monetary)
            .map_err(|error| MonetaryError::InvalidFormat(format!("Value [{value}] is not a decimal: {error}")))
    }
}
