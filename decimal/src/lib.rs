#![no_std]

#[cfg(test)]
extern crate std;

use cast::i128;
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::unwrap::UnwrapOptimized;

/// Fixed-point scalar for 18 decimal numbers
pub const SCALAR_18: i128 = 1_000_000_000_000_000_000;

/// One percent expressed with 18 decimals
const PERCENT: i128 = 10_000_000_000_000_000;

/// One basis point expressed with 18 decimals
const BPS: i128 = 100_000_000_000_000;

/// A non-negative fixed-point number with 18 decimal places.
///
/// Multiplication and division truncate toward zero. Overflow, division by zero and
/// subtraction below zero are treated as programming errors and panic.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Decimal(i128);

impl Decimal {
    pub const ZERO: Decimal = Decimal(0);
    pub const ONE: Decimal = Decimal(SCALAR_18);

    /// Create a Decimal from a whole number
    pub fn from_u64(val: u64) -> Decimal {
        Decimal(i128(val) * SCALAR_18)
    }

    /// Create a Decimal from a percentage, where 100 is 1.0
    pub fn from_percent(pct: u32) -> Decimal {
        Decimal(i128(pct) * PERCENT)
    }

    /// Create a Decimal from basis points, where 10_000 is 1.0
    pub fn from_bps(bps: u64) -> Decimal {
        Decimal(i128(bps) * BPS)
    }

    /// Create a Decimal from an integer already scaled to 18 decimals
    ///
    /// ### Panics
    /// If `val` is negative
    pub fn from_scaled_val(val: i128) -> Decimal {
        if val < 0 {
            panic!("negative decimal");
        }
        Decimal(val)
    }

    /// The raw value scaled to 18 decimals
    pub fn to_scaled_val(&self) -> i128 {
        self.0
    }

    pub fn add(self, other: Decimal) -> Decimal {
        Decimal(self.0.checked_add(other.0).unwrap_optimized())
    }

    pub fn sub(self, other: Decimal) -> Decimal {
        Decimal(
            self.0
                .checked_sub(other.0)
                .filter(|val| *val >= 0)
                .unwrap_optimized(),
        )
    }

    /// Multiply two decimals, rounding down.
    ///
    /// Only panics if the product itself does not fit. An intermediate `self * other` that
    /// overflows `i128` is retried on the whole and fractional parts of each operand.
    pub fn mul(self, other: Decimal) -> Decimal {
        match self.0.fixed_mul_floor(other.0, SCALAR_18) {
            Some(val) => Decimal(val),
            None => Decimal(mul_floor_split(self.0, other.0).unwrap_optimized()),
        }
    }

    pub fn div(self, other: Decimal) -> Decimal {
        Decimal(
            self.0
                .fixed_div_floor(other.0, SCALAR_18)
                .unwrap_optimized(),
        )
    }

    /// Multiply by a plain integer, or None if the result does not fit or `factor` is negative
    pub fn checked_mul_int(self, factor: i128) -> Option<Decimal> {
        if factor < 0 {
            return None;
        }
        self.0.checked_mul(factor).map(Decimal)
    }

    /// Divide by a plain integer, or None if `divisor` is not positive
    pub fn checked_div_int(self, divisor: i128) -> Option<Decimal> {
        if divisor <= 0 {
            return None;
        }
        Some(Decimal(self.0 / divisor))
    }
}

/// floor(a * b / SCALAR_18) for non-negative `a` and `b`, computed as
/// `qa*qb*S + qa*rb + ra*qb + floor(ra*rb / S)` where `a = qa*S + ra` and `b = qb*S + rb`
fn mul_floor_split(a: i128, b: i128) -> Option<i128> {
    let (qa, ra) = (a / SCALAR_18, a % SCALAR_18);
    let (qb, rb) = (b / SCALAR_18, b % SCALAR_18);
    qa.checked_mul(qb)?
        .checked_mul(SCALAR_18)?
        .checked_add(qa.checked_mul(rb)?)?
        .checked_add(ra.checked_mul(qb)?)?
        .checked_add(ra * rb / SCALAR_18)
}
