use crate::base;

/// Integral representation of monetary quantities up to two decimal places.
///
/// Spending amounts are summed in this representation so that totals are
/// exact regardless of how many line items contribute to them.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
)]
pub struct Cents(pub i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("amount is out of range")]
pub struct OverflowError;

impl Cents {
    /// Saturates at `i64::MAX` cents.
    pub const fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    pub fn checked_abs(self) -> Result<Self, OverflowError> {
        self.0.checked_abs().map(Self).ok_or(OverflowError)
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, OverflowError> {
        self.0.checked_add(rhs.0).map(Self).ok_or(OverflowError)
    }

    /// Price of `quantity` units at `self` per unit.
    pub fn checked_times(self, quantity: u32) -> Result<Self, OverflowError> {
        self.0
            .checked_mul(i64::from(quantity))
            .map(Self)
            .ok_or(OverflowError)
    }

    /// Returns `cents.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        let n = self.0.unsigned_abs().max(100);
        let mut len = base::util::count_digits(n);
        len += (len - 3) / 3; // commas
        len += 1; // decimal point
        if self.0 < 0 {
            len += 2; // parentheses
        }
        len
    }

    /// Returns `cents.charlen()` assuming a non-negative quantity has a
    /// trailing space in its string representation, so that right-aligned
    /// amounts line up on the decimal point regardless of sign.
    pub fn charlen_for_alignment(self) -> usize {
        self.charlen() + (self >= Self(0)) as usize
    }
}

/// Saturates instead of wrapping. Sums that must be exact go through
/// [`Cents::checked_add`].
impl std::ops::Add for Cents {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Cents {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl std::ops::Neg for Cents {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Cents {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(0), |acc, x| acc + x)
    }
}

impl std::fmt::Display for Cents {
    /// Formats with two decimal places and thousands separators. Negative
    /// quantities are wrapped in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cents = self.0.unsigned_abs();
        let mut bytes = Vec::<u8>::new();
        macro_rules! pop_digit {
            () => {
                bytes.push(b'0' + (cents % 10) as u8);
                cents /= 10
            };
        }

        pop_digit!();
        pop_digit!();
        bytes.push(b'.');
        pop_digit!();
        let mut i = 1;
        while cents > 0 {
            if i % 3 == 0 {
                bytes.push(b',');
            }
            i += 1;
            pop_digit!();
        }
        bytes.reverse();
        if self.0 < 0 {
            bytes.insert(0, b'(');
            bytes.push(b')');
        }
        let s = std::str::from_utf8(&bytes).expect("all chars should be ascii");
        f.write_str(s)
    }
}

impl std::str::FromStr for Cents {
    type Err = std::num::ParseIntError;

    /// Parses a cents quantity from a human-readable string, which may contain
    /// comma thousands separators and any number of decimal places. Decimal
    /// places beyond the second are discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut s = s.replace(',', "");
        if !["", "+", "-", ".", "+.", "-."].contains(&s.as_str()) {
            let mut chars = s.chars().collect::<Vec<_>>();
            chars.push('0');
            chars.push('0');
            if let Some(i) = chars.iter().copied().position(|c| c == '.') {
                chars.swap(i, i + 1);
                chars.swap(i + 1, i + 2);
                chars.truncate(i + 2);
            };
            s = chars.into_iter().collect::<String>();
        }
        s.parse::<i64>().map(Self)
    }
}

impl serde::Serialize for Cents {
    /// Writes a number in major units: `5000` cents as `50`, `1250` as `12.5`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if self.0 % 100 == 0 {
            serializer.serialize_i64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.0 as f64 / 100.0)
        }
    }
}

impl<'de> serde::Deserialize<'de> for Cents {
    /// Accepts a number (`12.5`, `50`) or a decimal string (`"12.50"`), both
    /// in major units.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(serde_json::Number),
            Decimal(String),
        }

        let s = match Repr::deserialize(deserializer)? {
            Repr::Number(n) => n.to_string(),
            Repr::Decimal(s) => s,
        };
        s.trim()
            .parse::<Self>()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount '{}'", s)))
    }
}
