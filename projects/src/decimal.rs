//! Fixed-point decimal values with two fractional digits.
//!
//! Hours and costs are kept as a whole number of hundredths so that values
//! read back from storage compare exactly with the values written.

use std::fmt;
use std::str::FromStr;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A non-negative decimal number scaled to exactly two fractional digits.
///
/// Parsing rounds half-up on the third fractional digit.
///
/// # Examples
///
/// ```
/// use projects::Decimal;
///
/// let hours: Decimal = "12.5".parse().unwrap();
/// assert_eq!(hours.to_string(), "12.50");
/// assert_eq!(hours.hundredths(), 1250);
///
/// let rounded: Decimal = "0.125".parse().unwrap();
/// assert_eq!(rounded.to_string(), "0.13");
///
/// assert!("ten".parse::<Decimal>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Decimal(i64);

impl Decimal {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Creates a decimal from a count of hundredths.
    #[must_use]
    pub const fn from_hundredths(hundredths: i64) -> Self {
        Self(hundredths)
    }

    /// Returns the value as a count of hundredths.
    #[must_use]
    pub const fn hundredths(self) -> i64 {
        self.0
    }

    fn invalid(input: &str) -> Error {
        Error::Parse {
            input: input.to_string(),
            expected: "decimal number".to_string(),
        }
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let unsigned = input.strip_prefix('+').unwrap_or(input);
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(Self::invalid(input));
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) {
            return Err(Self::invalid(input));
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| Self::invalid(input))?
        };

        let digits = fraction.as_bytes();
        let digit = |i: usize| digits.get(i).map_or(0, |d| i64::from(d - b'0'));

        let mut hundredths = whole_value
            .checked_mul(100)
            .and_then(|v| v.checked_add(digit(0) * 10 + digit(1)))
            .ok_or_else(|| Self::invalid(input))?;
        if digit(2) >= 5 {
            hundredths = hundredths
                .checked_add(1)
                .ok_or_else(|| Self::invalid(input))?;
        }

        Ok(Self(hundredths))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl From<Decimal> for String {
    fn from(value: Decimal) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Decimal {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl ToSql for Decimal {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for Decimal {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Text(bytes) => {
                let text = std::str::from_utf8(bytes).map_err(|e| FromSqlError::Other(Box::new(e)))?;
                text.parse().map_err(|e: Error| FromSqlError::Other(Box::new(e)))
            }
            ValueRef::Integer(whole) => whole
                .checked_mul(100)
                .map(Self)
                .ok_or(FromSqlError::OutOfRange(whole)),
            #[allow(clippy::cast_possible_truncation)]
            ValueRef::Real(real) if real.is_finite() => Ok(Self((real * 100.0).round() as i64)),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}
