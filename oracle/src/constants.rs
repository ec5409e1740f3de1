/// The maximum age, in seconds, of a Pyth price before it is considered stale
pub const PYTH_MAX_STALENESS_SECONDS: u64 = 60;

/// The maximum age, in milliseconds, of a Switchboard result before it is considered stale
pub const SWITCHBOARD_MAX_STALENESS_MS: u64 = 60_000;

/// A Pyth price must be at least this many times its confidence interval (conf <= 10% of price)
pub const MIN_CONFIDENCE_RATIO: u64 = 10;

/// A Switchboard value must be at least this many times its range (range <= 10% of value)
pub const MIN_DISPERSION_RATIO: i128 = 10;
