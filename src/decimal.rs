use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

/// decimal places kept on every money operation; paise is 2, the extra
/// guard digits keep per-segment interest rounding out of the totals
const MONEY_SCALE: u32 = 6;

/// Money type for rupee amounts with 6 decimal places precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const ONE: Money = Money(Decimal::ONE);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(MONEY_SCALE))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s)?.round_dp(MONEY_SCALE)))
    }

    /// create from a whole rupee amount
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to specified decimal places
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp(dp))
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// format as indian rupees with en-IN digit grouping, e.g. ₹1,23,45,678.90
    pub fn format_inr(&self) -> String {
        let rounded = self.0.round_dp(2);
        let text = rounded.abs().to_string();
        let (whole, frac) = match text.split_once('.') {
            Some((w, f)) => (w.to_string(), format!("{:0<2}", f)),
            None => (text, "00".to_string()),
        };
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!("{}₹{}.{}", sign, group_indian(&whole), frac)
    }
}

// indian grouping: last three digits, then pairs (12345678 -> 1,23,45,678)
fn group_indian(whole: &str) -> String {
    if whole.len() <= 3 {
        return whole.to_string();
    }
    let (head, tail) = whole.split_at(whole.len() - 3);
    let digits: Vec<char> = head.chars().collect();
    let mut pairs: Vec<String> = Vec::new();
    let mut end = digits.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        pairs.push(digits[start..end].iter().collect());
        end = start;
    }
    pairs.reverse();
    format!("{},{}", pairs.join(","), tail)
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money((self.0 + other.0).round_dp(MONEY_SCALE))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = (self.0 + other.0).round_dp(MONEY_SCALE);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money((self.0 - other.0).round_dp(MONEY_SCALE))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 = (self.0 - other.0).round_dp(MONEY_SCALE);
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money((self.0 * other).round_dp(MONEY_SCALE))
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money((self.0 / other).round_dp(MONEY_SCALE))
    }
}

/// rate type for annual interest rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal (e.g., 0.075 for 7.5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 7.5 for 7.5%)
    pub fn from_percent(p: Decimal) -> Self {
        Rate(p / Decimal::from(100))
    }

    /// get as decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::from(100)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // normalize drops the trailing zeros multiplication reintroduces
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}
