/// The maximum open or close loan-to-value ratio, in percent
pub const MAX_LTV_PCT: u32 = 100;

/// The minimum borrow weight in basis points (1.0)
pub const MIN_BORROW_WEIGHT_BPS: u64 = 10_000;

/// The maximum liquidation bonus in basis points (20%)
pub const MAX_LIQUIDATION_BONUS_BPS: u64 = 2_000;

/// The maximum borrow, spread, or liquidation fee in basis points (100%)
pub const MAX_FEE_BPS: u64 = 10_000;

/// The utilization, in percent, the interest rate curve must start at
pub const CURVE_START_UTIL_PCT: u32 = 0;

/// The utilization, in percent, the interest rate curve must end at
pub const CURVE_END_UTIL_PCT: u32 = 100;

/// The minimum number of knots in an interest rate curve
pub const MIN_CURVE_KNOTS: u32 = 2;
