//! Cent-precision transaction amounts and the two rounding policies used on output

use std::{fmt, str::FromStr};

use crate::{error::MalformedRecordError, median::Midpoint};

const CENTS_PER_DOLLAR: i64 = 100;

/// A transaction amount, stored as a whole number of cents
///
/// Sums of [`Amount`]s are exact, so a group's total never drifts no matter how many
/// contributions are folded into it.
/// Conversion to whole dollars only happens when a summary is produced,
/// via [`Self::truncated_dollars`] or [`Self::rounded_median`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    /// Zero dollars
    pub const ZERO: Self = Self(0);

    /// Constructs an amount from a number of cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Constructs an amount from a whole number of dollars, saturating at the numeric bounds
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars.saturating_mul(CENTS_PER_DOLLAR))
    }

    /// The amount in cents
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Whole dollars, truncated toward zero
    ///
    /// Fractional cents are dropped, not rounded: `$749.50` becomes `749`, and `-$3.99` becomes `-3`.
    pub const fn truncated_dollars(self) -> i64 {
        self.0 / CENTS_PER_DOLLAR
    }

    /// Whole dollars, rounded half-to-even
    pub fn rounded_dollars(self) -> i64 {
        round_half_even(self.0 as i128, CENTS_PER_DOLLAR as i128)
    }

    /// Collapses a running median's midpoint into whole dollars
    ///
    /// An odd-sized group rounds its middle amount.
    /// An even-sized group takes the exact mean of the two middle amounts, then rounds it.
    /// Both cases round half-to-even, so `291.5` becomes `292` and `52.5` becomes `52`.
    pub fn rounded_median(midpoint: Midpoint<Self>) -> i64 {
        match midpoint {
            Midpoint::Exact(amount) => amount.rounded_dollars(),
            Midpoint::Between(low, high) => round_half_even(
                low.0 as i128 + high.0 as i128,
                2 * CENTS_PER_DOLLAR as i128,
            ),
        }
    }

    /// Adds two amounts, saturating at the numeric bounds instead of overflowing
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Amount {
    type Err = MalformedRecordError;

    /// Parses a plain decimal such as `250`, `-12.5`, or `+125.50`
    ///
    /// At most two fractional digits are accepted, since anything finer can't be held in cents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MalformedRecordError::Amount(s.to_owned());

        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty())
            || fraction.len() > 2
            || !all_digits(whole)
            || !all_digits(fraction)
        {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let magnitude = dollars
            .checked_mul(CENTS_PER_DOLLAR)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -magnitude } else { magnitude }))
    }
}

/// Rounds `numerator / denominator` to the nearest integer, breaking exact ties toward the even neighbour
///
/// The division is done on integers, so there is no floating point error to worry about near the tie.
/// `denominator` must be positive.
pub fn round_half_even(numerator: i128, denominator: i128) -> i64 {
    debug_assert!(denominator > 0);

    let quotient = numerator.div_euclid(denominator);
    let twice_remainder = 2 * numerator.rem_euclid(denominator);

    let rounded = match twice_remainder.cmp(&denominator) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + quotient.rem_euclid(2),
    };

    rounded as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_whole_dollars() {
        assert_eq!("250".parse::<Amount>().unwrap(), Amount::from_dollars(250));
        assert_eq!("0".parse::<Amount>().unwrap(), Amount::ZERO);
        assert_eq!("+7".parse::<Amount>().unwrap(), Amount::from_dollars(7));
    }

    #[test]
    fn parse_fractional() {
        assert_eq!("125.50".parse::<Amount>().unwrap().cents(), 12550);
        assert_eq!("125.5".parse::<Amount>().unwrap().cents(), 12550);
        assert_eq!("65.75".parse::<Amount>().unwrap().cents(), 6575);
        assert_eq!(".5".parse::<Amount>().unwrap().cents(), 50);
        assert_eq!("3.".parse::<Amount>().unwrap().cents(), 300);
        assert_eq!("-3.99".parse::<Amount>().unwrap().cents(), -399);
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "-", ".", "abc", "1.234", "1e3", "12,5", " 12", "1.2.3", "--1"] {
            assert!(
                matches!(bad.parse::<Amount>(), Err(MalformedRecordError::Amount(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!("99999999999999999999".parse::<Amount>().is_err());
    }

    #[test]
    fn half_even_ties() {
        assert_eq!(round_half_even(5, 2), 2);
        assert_eq!(round_half_even(7, 2), 4);
        assert_eq!(round_half_even(-5, 2), -2);
        assert_eq!(round_half_even(-7, 2), -4);
        assert_eq!(round_half_even(1, 2), 0);
    }

    #[test]
    fn half_even_non_ties() {
        assert_eq!(round_half_even(17775, 100), 178);
        assert_eq!(round_half_even(17725, 100), 177);
        assert_eq!(round_half_even(-17775, 100), -178);
        assert_eq!(round_half_even(300, 100), 3);
    }

    #[test]
    fn huge_dollar_amounts_saturate() {
        assert_eq!(Amount::from_dollars(i64::MAX).cents(), i64::MAX);
        assert_eq!(Amount::from_dollars(i64::MIN).cents(), i64::MIN);
        assert_eq!(Amount::from_dollars(-12).cents(), -1200);
    }

    #[test]
    fn truncation_drops_cents() {
        assert_eq!(Amount::from_cents(74950).truncated_dollars(), 749);
        assert_eq!(Amount::from_cents(6575).truncated_dollars(), 65);
        assert_eq!(Amount::from_cents(-399).truncated_dollars(), -3);
    }

    #[test]
    fn median_rounding() {
        let exact = Midpoint::Exact(Amount::from_cents(6575));
        assert_eq!(Amount::rounded_median(exact), 66);

        let tie = Midpoint::Between(Amount::from_dollars(250), Amount::from_dollars(333));
        assert_eq!(Amount::rounded_median(tie), 292);

        let tie = Midpoint::Between(Amount::from_dollars(40), Amount::from_dollars(65));
        assert_eq!(Amount::rounded_median(tie), 52);

        let between = Midpoint::Between(Amount::from_cents(12550), Amount::from_dollars(230));
        assert_eq!(Amount::rounded_median(between), 178);
    }

    #[test]
    fn display() {
        assert_eq!(Amount::from_cents(12550).to_string(), "125.50");
        assert_eq!(Amount::from_cents(-5).to_string(), "-0.05");
    }
}
