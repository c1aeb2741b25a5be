// 实现解析与打印
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use super::BigInt;
use crate::big_num_cache::POW10;
use crate::big_num_constants::*;
use crate::error::{BigIntError, BigIntResult};

impl BigInt {
    /// Parses `'-'? digit+`. Leading zeros are accepted, `"-0"` is zero.
    pub fn parse(literal: &str) -> BigIntResult<BigInt> {
        let (negative, digits) = match literal.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, literal),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BigIntError::InvalidLiteral(literal.to_string()));
        }

        // the leading group takes the digits that do not fill a whole group
        let mut end = match digits.len() % DECIMAL_GROUP_DIGITS {
            0 => DECIMAL_GROUP_DIGITS,
            short => short,
        };
        let mut start = 0;
        let mut value = BigInt::zero();
        while start < digits.len() {
            let group = &digits[start..end];
            let group_val = group
                .bytes()
                .fold(0 as Limb, |acc, b| acc * 10 + (b - b'0') as Limb);
            value.mul_add_short(POW10[group.len()], group_val);
            start = end;
            end += DECIMAL_GROUP_DIGITS;
        }

        if negative {
            value.negate();
        }
        Ok(value)
    }

    // decimal digits of a nonnegative value
    fn magnitude_to_decimal(mut self) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        let mut groups = Vec::new();
        while !self.is_zero() {
            groups.push(self.div_short(DECIMAL_GROUP_RADIX));
        }

        let mut result = String::with_capacity(groups.len() * DECIMAL_GROUP_DIGITS);
        let mut groups = groups.iter().rev();
        if let Some(leading) = groups.next() {
            result.push_str(&leading.to_string());
        }
        for group in groups {
            result.push_str(&format!("{:0width$}", group, width = DECIMAL_GROUP_DIGITS));
        }
        result
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::parse(s)
    }
}

impl TryFrom<&str> for BigInt {
    type Error = BigIntError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        BigInt::parse(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.abs().magnitude_to_decimal();
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}
