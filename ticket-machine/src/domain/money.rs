//! Fixed-point money and price scaling factors.
//!
//! All amounts are held as whole pence so arithmetic never drifts. Rounding
//! only happens at the edges: when text with more than two decimal places is
//! parsed, and when a price is multiplied by a [`Factor`]. Both round half-up.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The single currency symbol the machine understands.
pub const CURRENCY_SYMBOL: char = '£';

const PENCE_PER_POUND: u64 = 100;

/// Maximum number of decimal places accepted in a [`Factor`].
const MAX_FACTOR_SCALE: u32 = 9;

/// Errors from parsing or combining money values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    /// Input text is not a non-negative decimal amount
    #[error("invalid amount: {reason}")]
    InvalidAmount { reason: &'static str },

    /// Scaling factor is not a positive decimal
    #[error("invalid factor: {reason}")]
    InvalidFactor { reason: &'static str },

    /// An operation would produce a value below zero
    #[error("amount cannot be negative")]
    NegativeAmount,
}

/// A non-negative amount of money, stored in pence.
///
/// # Examples
///
/// ```
/// use ticket_machine::domain::Money;
///
/// let fare = Money::parse("£46.00").unwrap();
/// let paid = Money::parse("50").unwrap();
/// assert_eq!(paid.checked_sub(fare).unwrap().to_string(), "£4.00");
///
/// // Negative amounts are rejected
/// assert!(Money::parse("-1.00").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(u64);

impl Money {
    /// £0.00
    pub const ZERO: Money = Money(0);

    /// Create an amount from a count of pence.
    pub const fn from_pence(pence: u64) -> Self {
        Money(pence)
    }

    /// Create an amount from pounds and pence, e.g. `from_pounds_pence(46, 50)` is £46.50.
    pub const fn from_pounds_pence(pounds: u64, pence: u64) -> Self {
        Money(pounds * PENCE_PER_POUND + pence)
    }

    /// Returns the amount in pence.
    pub const fn pence(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Parse an amount typed by a person or stored in config.
    ///
    /// Surrounding whitespace, one leading `£` and `,` separators are
    /// ignored. More than two decimal places are rounded half-up.
    pub fn parse(s: &str) -> Result<Self, MoneyError> {
        let trimmed = s.trim();
        let trimmed = trimmed
            .strip_prefix(CURRENCY_SYMBOL)
            .unwrap_or(trimmed)
            .trim_start();
        let cleaned: String = trimmed.chars().filter(|&c| c != ',').collect();

        let decimal =
            Decimal::split(&cleaned).map_err(|reason| MoneyError::InvalidAmount { reason })?;

        let mut fraction = decimal.fraction.bytes().map(|b| u64::from(b - b'0'));
        let tenths = fraction.next().unwrap_or(0);
        let hundredths = fraction.next().unwrap_or(0);
        let round_up = fraction.next().is_some_and(|d| d >= 5);

        digits_value(decimal.whole)
            .and_then(|pounds| pounds.checked_mul(PENCE_PER_POUND))
            .and_then(|pence| pence.checked_add(tenths * 10 + hundredths + u64::from(round_up)))
            .map(Money)
            .ok_or(MoneyError::InvalidAmount {
                reason: "amount is too large",
            })
    }

    /// Subtract, failing if the result would be negative.
    pub fn checked_sub(self, other: Money) -> Result<Money, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(MoneyError::NegativeAmount)
    }

    /// Subtract, clamping at zero.
    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    /// Multiply by a factor, rounding half-up to whole pence.
    pub fn scale(self, factor: Factor) -> Money {
        let denominator = 10u128.pow(factor.scale);
        let product = u128::from(self.0) * u128::from(factor.mantissa);
        let rounded = product.saturating_add(denominator / 2) / denominator;
        Money(u64::try_from(rounded).unwrap_or(u64::MAX))
    }
}

// Addition saturates rather than wrapping; u64 pence is far beyond any
// realistic till total.
impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        *self = *self + other;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}.{:02}",
            CURRENCY_SYMBOL,
            self.0 / PENCE_PER_POUND,
            self.0 % PENCE_PER_POUND
        )
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl TryFrom<String> for Money {
    type Error = MoneyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Money::parse(&s)
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_string()
    }
}

/// A strictly positive decimal multiplier for prices.
///
/// Held exactly as `mantissa / 10^scale`, so `1.10` is `110 / 10^2` and
/// scaling £46.00 gives exactly £50.60.
#[derive(Debug, Clone, Copy)]
pub struct Factor {
    mantissa: u64,
    scale: u32,
}

impl Factor {
    /// Create a factor of `mantissa / 10^scale`.
    pub fn new(mantissa: u64, scale: u32) -> Result<Self, MoneyError> {
        if scale > MAX_FACTOR_SCALE {
            return Err(MoneyError::InvalidFactor {
                reason: "at most 9 decimal places",
            });
        }
        if mantissa == 0 {
            return Err(MoneyError::InvalidFactor {
                reason: "must be greater than zero",
            });
        }
        Ok(Self { mantissa, scale })
    }

    /// Parse a factor such as `1.15` or `0.9`.
    pub fn parse(s: &str) -> Result<Self, MoneyError> {
        let decimal =
            Decimal::split(s.trim()).map_err(|reason| MoneyError::InvalidFactor { reason })?;

        let scale = u32::try_from(decimal.fraction.len())
            .ok()
            .filter(|&scale| scale <= MAX_FACTOR_SCALE)
            .ok_or(MoneyError::InvalidFactor {
                reason: "at most 9 decimal places",
            })?;

        let digits = format!("{}{}", decimal.whole, decimal.fraction);
        let mantissa = digits_value(&digits).ok_or(MoneyError::InvalidFactor {
            reason: "factor is too large",
        })?;

        Self::new(mantissa, scale)
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let denominator = 10u64.pow(self.scale);
        let whole = self.mantissa / denominator;
        if self.scale == 0 {
            return write!(f, "{whole}");
        }
        let fraction = self.mantissa % denominator;
        write!(f, "{whole}.{fraction:0width$}", width = self.scale as usize)
    }
}

impl FromStr for Factor {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Factor::parse(s)
    }
}

/// The digit runs either side of the decimal point of a non-negative literal.
struct Decimal<'a> {
    whole: &'a str,
    fraction: &'a str,
}

impl<'a> Decimal<'a> {
    fn split(s: &'a str) -> Result<Self, &'static str> {
        if s.is_empty() {
            return Err("empty input");
        }
        if s.starts_with('-') {
            return Err("must not be negative");
        }
        let s = s.strip_prefix('+').unwrap_or(s);

        let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err("no digits");
        }

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err("must be a decimal number");
        }

        Ok(Self { whole, fraction })
    }
}

/// Value of a run of ASCII digits; `None` on overflow.
fn digits_value(digits: &str) -> Option<u64> {
    digits.bytes().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    })
}
