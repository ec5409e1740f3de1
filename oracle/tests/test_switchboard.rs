mod common;

use common::SCALAR_18;
use decimal::Decimal;
use oracle::{extract_switchboard_price, Rejection, Spot};
use soroban_sdk::{BytesN, Env};

#[test]
fn test_switchboard_dispersion_gate() {
    let e = Env::default();

    let feed = common::create_switchboard_feed(&e, 800_000 * SCALAR_18, 200 * SCALAR_18, 0);
    let quote = extract_switchboard_price(&e, &feed, 0);
    assert_eq!(quote.spot, Spot::Quote(Decimal::from_u64(800_000)));
    assert_eq!(quote.identifier, BytesN::from_array(&e, &[2; 32]));

    let feed = common::create_switchboard_feed(&e, 800_000 * SCALAR_18, 80_001 * SCALAR_18, 0);
    let quote = extract_switchboard_price(&e, &feed, 0);
    assert_eq!(quote.spot, Spot::NoQuote(Rejection::WideDispersion));
    assert_eq!(quote.spot.price(), None);
}

#[test]
fn test_switchboard_dispersion_boundary() {
    let e = Env::default();
    let feed = common::create_switchboard_feed(&e, 800_000 * SCALAR_18, 80_000 * SCALAR_18, 0);

    let quote = extract_switchboard_price(&e, &feed, 0);
    assert!(quote.spot.is_quote());
}

#[test]
fn test_switchboard_staleness_gate() {
    let e = Env::default();
    let feed = common::create_switchboard_feed(&e, 800_000 * SCALAR_18, 200 * SCALAR_18, 0);

    let quote = extract_switchboard_price(&e, &feed, 60_000);
    assert!(quote.spot.is_quote());

    let quote = extract_switchboard_price(&e, &feed, 60_001);
    assert_eq!(quote.spot, Spot::NoQuote(Rejection::Stale));

    let quote = extract_switchboard_price(&e, &feed, 61_000);
    assert_eq!(quote.spot, Spot::NoQuote(Rejection::Stale));
}

#[test]
fn test_switchboard_future_update_is_not_stale() {
    let e = Env::default();
    let feed = common::create_switchboard_feed(&e, SCALAR_18, 0, 500_000);

    let quote = extract_switchboard_price(&e, &feed, 100_000);
    assert_eq!(quote.spot, Spot::Quote(Decimal::ONE));
}

#[test]
fn test_switchboard_keeps_full_precision() {
    let e = Env::default();
    let feed = common::create_switchboard_feed(&e, 1_234_567_890_123_456_789, 0, 1_000);

    let quote = extract_switchboard_price(&e, &feed, 1_000);
    assert_eq!(
        quote.spot.price().unwrap().to_scaled_val(),
        1_234_567_890_123_456_789
    );
}

#[test]
fn test_switchboard_negative_value_rejected() {
    let e = Env::default();
    let feed = common::create_switchboard_feed(&e, -SCALAR_18, 0, 1_000);

    let quote = extract_switchboard_price(&e, &feed, 1_000);
    assert_eq!(quote.spot, Spot::NoQuote(Rejection::NegativePrice));
}
