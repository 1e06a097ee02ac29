//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths of the currency unit (i64) so that
//! sums stay exact. Analysis code converts to `f64` only for percentages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Number of minor units in one currency unit
const MINOR_PER_UNIT: i64 = 100;

/// Largest magnitude `parse` accepts, in whole units
///
/// Keeps scaled and summed amounts well inside `i64`.
pub const MAX_PARSE_UNITS: i64 = 1_000_000_000_000_000;

/// Represents a monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units (hundredths)
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use fintrack::models::Money;
    /// let income = Money::from_units(5_000_000);
    /// assert_eq!(income.minor(), 500_000_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units.saturating_mul(MINOR_PER_UNIT))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the amount in currency units as a float
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / MINOR_PER_UNIT as f64
    }

    /// Round to the nearest whole currency unit (half away from zero)
    pub fn rounded_units(&self) -> i64 {
        self.as_f64().round() as i64
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Scale by `numerator / denominator`, truncating toward zero
    ///
    /// Computed in `i128` and saturated to the `i64` range. A zero
    /// denominator yields zero.
    pub const fn scale(&self, numerator: i64, denominator: i64) -> Self {
        if denominator == 0 {
            return Self(0);
        }
        let scaled = self.0 as i128 * numerator as i128 / denominator as i128;
        if scaled > i64::MAX as i128 {
            Self(i64::MAX)
        } else if scaled < i64::MIN as i128 {
            Self(i64::MIN)
        } else {
            Self(scaled as i64)
        }
    }

    /// This amount as a percentage of `whole`
    ///
    /// Returns 0 when `whole` is not positive instead of dividing by zero.
    pub fn percentage_of(&self, whole: Money) -> f64 {
        if !whole.is_positive() {
            return 0.0;
        }
        self.0 as f64 / whole.0 as f64 * 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "1500000", "1,500,000", "1_500_000", "Rp 1500000",
    /// "12500.50" and a leading "-". Magnitudes above [`MAX_PARSE_UNITS`] are
    /// rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, s),
        };

        let s = s
            .strip_prefix("Rp")
            .or_else(|| s.strip_prefix("rp"))
            .unwrap_or(s)
            .trim_start();
        let cleaned: String = s.chars().filter(|c| *c != ',' && *c != '_').collect();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        if cleaned.is_empty() {
            return Err(invalid());
        }

        let minor = match cleaned.split_once('.') {
            Some((units, fraction)) => {
                let units: i64 = if units.is_empty() {
                    0
                } else {
                    units.parse().map_err(|_| invalid())?
                };
                if !fraction.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                let fraction: i64 = match fraction.len() {
                    0 => 0,
                    1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => fraction[..2].parse().map_err(|_| invalid())?,
                };
                units
                    .checked_mul(MINOR_PER_UNIT)
                    .and_then(|m| m.checked_add(fraction))
                    .ok_or_else(invalid)?
            }
            None => {
                let units: i64 = cleaned.parse().map_err(|_| invalid())?;
                units.checked_mul(MINOR_PER_UNIT).ok_or_else(invalid)?
            }
        };

        if minor > MAX_PARSE_UNITS * MINOR_PER_UNIT {
            return Err(MoneyParseError::OutOfRange(s.to_string()));
        }

        Ok(Self(if negative { -minor } else { minor }))
    }

    /// Format with an explicit currency format
    pub fn format_with(&self, format: &CurrencyFormat) -> String {
        format.format(*self)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", CurrencyFormat::default().format(*self))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// How amounts are rendered: integer-rounded, thousands-grouped, labelled
///
/// `Rp 1.500.000` with the default label and separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub label: String,
    pub thousands_separator: char,
}

impl CurrencyFormat {
    pub fn new(label: impl Into<String>, thousands_separator: char) -> Self {
        Self {
            label: label.into(),
            thousands_separator,
        }
    }

    pub fn format(&self, amount: Money) -> String {
        let units = amount.rounded_units();
        let grouped = group_thousands(units.unsigned_abs(), self.thousands_separator);
        let sign = if units < 0 { "-" } else { "" };

        if self.label.is_empty() {
            format!("{}{}", sign, grouped)
        } else {
            format!("{}{} {}", sign, self.label, grouped)
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new("Rp", '.')
    }
}

fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }

    out
}

/// Format an amount with the default `Rp` / `.` currency format
pub fn format_currency(amount: Money) -> String {
    CurrencyFormat::default().format(amount)
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount too large: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
