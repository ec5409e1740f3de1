use cast::{u128, u64};
use decimal::Decimal;
use soroban_sdk::{log, BytesN, Env, Symbol};

use crate::{
    constants::{MIN_CONFIDENCE_RATIO, PYTH_MAX_STALENESS_SECONDS},
    price::{Rejection, Spot},
};

/// A price as published by a Pyth-style attested feed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PythPrice {
    pub price: i64,        // the price, scaled by 10^expo
    pub conf: u64,         // the confidence interval, in the same units as price
    pub expo: i32,         // the power of ten applied to price and conf
    pub publish_time: u64, // the unix time in seconds the price was published
}

/// The read-only view of a Pyth-style price feed needed to extract a price
pub trait PythFeed {
    /// The latest spot price
    fn price(&self) -> PythPrice;

    /// The exponentially-weighted moving average price
    fn ema_price(&self) -> PythPrice;

    /// The identifier of the price feed
    fn price_identifier(&self) -> BytesN<32>;
}

/// The result of reading a Pyth-style feed
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PythQuote {
    pub spot: Spot,             // the spot price, if it can be trusted
    pub ema: Decimal,           // the ema reference price, returned even if the spot is rejected
    pub identifier: BytesN<32>, // the identifier of the feed
}

/// Extract a normalized spot price and ema price from a Pyth-style feed.
///
/// The spot price is rejected if it is negative or unrepresentable, if its confidence
/// interval is wider than 10% of the price, or if it was published more than 60 seconds
/// before `now_ms`. A publish time ahead of `now_ms` is never stale, which tolerates clock
/// skew between the publisher and the host.
///
/// ### Arguments
/// * `feed` - The feed to read
/// * `now_ms` - The current host time in milliseconds
pub fn extract_pyth_price<F: PythFeed>(e: &Env, feed: &F, now_ms: u64) -> PythQuote {
    let identifier = feed.price_identifier();
    let price = feed.price();

    let (ema, ema_rejection) = match parse_price(&feed.ema_price()) {
        Ok(ema) => (ema, None),
        Err(rejection) => (Decimal::ZERO, Some(rejection)),
    };
    let spot = Spot::from(require_trusted_price(&price, ema_rejection, now_ms));

    if let Spot::NoQuote(rejection) = spot {
        log!(
            e,
            "pyth price rejected",
            Symbol::new(e, rejection.name()),
            identifier.clone()
        );
    }
    PythQuote {
        spot,
        ema,
        identifier,
    }
}

fn require_trusted_price(
    price: &PythPrice,
    ema_rejection: Option<Rejection>,
    now_ms: u64,
) -> Result<Decimal, Rejection> {
    let spot = parse_price(price)?;
    if let Some(rejection) = ema_rejection {
        return Err(rejection);
    }

    // parse_price has already rejected negative prices
    let magnitude = u128(price.price.unsigned_abs());
    if u128(price.conf) * u128(MIN_CONFIDENCE_RATIO) > magnitude {
        return Err(Rejection::LowConfidence);
    }

    let now = now_ms / 1000;
    if now > price.publish_time && now - price.publish_time > PYTH_MAX_STALENESS_SECONDS {
        return Err(Rejection::Stale);
    }
    Ok(spot)
}

/// Normalize a price by its exponent: divide when the exponent is negative, multiply otherwise
fn parse_price(price: &PythPrice) -> Result<Decimal, Rejection> {
    let magnitude = u64(price.price).map_err(|_| Rejection::NegativePrice)?;
    let scale = 10i128
        .checked_pow(price.expo.unsigned_abs())
        .ok_or(Rejection::Unrepresentable)?;
    let normalized = if price.expo < 0 {
        Decimal::from_u64(magnitude).checked_div_int(scale)
    } else {
        Decimal::from_u64(magnitude).checked_mul_int(scale)
    };
    normalized.ok_or(Rejection::Unrepresentable)
}
