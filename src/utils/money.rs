use bigdecimal::num_traits::ToPrimitive;
use bigdecimal::{BigDecimal, ParseBigDecimalError, RoundingMode};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

const SCALE: i64 = 100;

/// Longest amount text handed to `BigDecimal`. Enough for any value that fits
/// in an i64 of minor units, with sign and fraction.
const MAX_INPUT_LEN: usize = 24;

/// A currency amount stored as a whole number of minor units (kopecks, cents).
///
/// Balances are allowed to go negative, so the inner value is signed.
///
/// ```ignore
/// let amount: Money = "48250".parse().unwrap();
/// assert_eq!(amount.to_string(), "48250.00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Whole units plus minor units, e.g. `Money::new(125_430, 50)` is 125430.50.
    pub const fn new(units: i64, minor: i64) -> Self {
        Money(units * SCALE + minor)
    }

    pub const fn zero() -> Self {
        Money(0)
    }

    pub fn minor(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    pub fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

/// Accept only `[+-]digits[.digits]` with ASCII digits.
///
/// Exponents, `NaN`, thousands separators and non-ASCII digits never reach the
/// decimal parser, which would otherwise expand `1e50000000` digit by digit.
fn is_plain_decimal(s: &str) -> bool {
    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    all_digits(whole) && fraction.map_or(true, all_digits)
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        if t.len() > MAX_INPUT_LEN {
            return Err(ParseBigDecimalError::Other("amount too long".into()));
        }
        if !is_plain_decimal(t) {
            return Err(ParseBigDecimalError::Other("not a plain decimal amount".into()));
        }

        let bd: BigDecimal = t.parse()?;
        let scaled = (bd * BigDecimal::from(SCALE)).with_scale_round(0, RoundingMode::HalfUp);
        let value = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / SCALE as u64, abs % SCALE as u64)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

/// Saturates at the i64 bounds instead of overflowing.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Money::saturating_add)
    }
}
