use decimal::Decimal;
use soroban_sdk::{log, BytesN, Env, Symbol};

use crate::{
    constants::{MIN_DISPERSION_RATIO, SWITCHBOARD_MAX_STALENESS_MS},
    price::{Rejection, Spot},
};

/// The latest result of a Switchboard-style aggregator
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AggregatorResult {
    pub value: i128,       // the aggregated value, scaled to 18 decimals
    pub range: i128,       // the spread between the highest and lowest oracle response, scaled to 18 decimals
    pub timestamp_ms: u64, // the unix time in milliseconds the result was updated
}

/// The read-only view of a Switchboard-style aggregator needed to extract a price
pub trait SwitchboardFeed {
    /// The latest aggregated result
    fn latest_result(&self) -> AggregatorResult;

    /// The identifier of the aggregator
    fn aggregator_identifier(&self) -> BytesN<32>;
}

/// The result of reading a Switchboard-style aggregator
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwitchboardQuote {
    pub spot: Spot,             // the spot price, if it can be trusted
    pub identifier: BytesN<32>, // the identifier of the aggregator
}

/// Extract a spot price from a Switchboard-style aggregator.
///
/// The result is rejected if it was updated more than 60 seconds before `now_ms`, or if the
/// range of oracle responses is wider than 10% of the value. The dispersion check runs on the
/// raw scaled integers. An update time ahead of `now_ms` is never stale.
///
/// ### Arguments
/// * `feed` - The aggregator to read
/// * `now_ms` - The current host time in milliseconds
pub fn extract_switchboard_price<F: SwitchboardFeed>(
    e: &Env,
    feed: &F,
    now_ms: u64,
) -> SwitchboardQuote {
    let identifier = feed.aggregator_identifier();
    let spot = Spot::from(require_trusted_result(&feed.latest_result(), now_ms));

    if let Spot::NoQuote(rejection) = spot {
        log!(
            e,
            "switchboard price rejected",
            Symbol::new(e, rejection.name()),
            identifier.clone()
        );
    }
    SwitchboardQuote { spot, identifier }
}

fn require_trusted_result(result: &AggregatorResult, now_ms: u64) -> Result<Decimal, Rejection> {
    if now_ms > result.timestamp_ms && now_ms - result.timestamp_ms > SWITCHBOARD_MAX_STALENESS_MS
    {
        return Err(Rejection::Stale);
    }
    if result.value < 0 {
        return Err(Rejection::NegativePrice);
    }
    if result.range < 0 {
        return Err(Rejection::Unrepresentable);
    }
    let scaled_range = result
        .range
        .checked_mul(MIN_DISPERSION_RATIO)
        .ok_or(Rejection::Unrepresentable)?;
    if scaled_range > result.value {
        return Err(Rejection::WideDispersion);
    }
    Ok(Decimal::from_scaled_val(result.value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCALAR_18: i128 = 1_000_000_000_000_000_000;

    fn result(value: i128, range: i128, timestamp_ms: u64) -> AggregatorResult {
        AggregatorResult {
            value,
            range,
            timestamp_ms,
        }
    }

    #[test]
    fn test_require_trusted_result_dispersion_boundary() {
        let value = 1_000 * SCALAR_18;
        assert_eq!(
            require_trusted_result(&result(value, 100 * SCALAR_18, 0), 0),
            Ok(Decimal::from_u64(1_000))
        );
        assert_eq!(
            require_trusted_result(&result(value, 100 * SCALAR_18 + 1, 0), 0),
            Err(Rejection::WideDispersion)
        );
    }

    #[test]
    fn test_require_trusted_result_rejects_negative() {
        assert_eq!(
            require_trusted_result(&result(-SCALAR_18, 0, 0), 0),
            Err(Rejection::NegativePrice)
        );
        assert_eq!(
            require_trusted_result(&result(SCALAR_18, -1, 0), 0),
            Err(Rejection::Unrepresentable)
        );
    }

    #[test]
    fn test_require_trusted_result_range_overflow() {
        assert_eq!(
            require_trusted_result(&result(i128::MAX, i128::MAX, 0), 0),
            Err(Rejection::Unrepresentable)
        );
    }

    #[test]
    fn test_require_trusted_result_staleness_checked_first() {
        assert_eq!(
            require_trusted_result(&result(-SCALAR_18, 0, 0), 60_001),
            Err(Rejection::Stale)
        );
    }

    #[test]
    fn test_require_trusted_result_zero_value() {
        assert_eq!(
            require_trusted_result(&result(0, 0, 0), 0),
            Ok(Decimal::ZERO)
        );
    }
}
