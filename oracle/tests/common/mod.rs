#![allow(dead_code)]

use oracle::{AggregatorResult, PythFeed, PythPrice, SwitchboardFeed};
use soroban_sdk::{BytesN, Env};

pub const SCALAR_18: i128 = 1_000_000_000_000_000_000;

pub struct MockPythFeed {
    pub price: PythPrice,
    pub ema_price: PythPrice,
    pub identifier: BytesN<32>,
}

impl PythFeed for MockPythFeed {
    fn price(&self) -> PythPrice {
        self.price
    }

    fn ema_price(&self) -> PythPrice {
        self.ema_price
    }

    fn price_identifier(&self) -> BytesN<32> {
        self.identifier.clone()
    }
}

/// Create a feed whose spot and ema readings are identical
pub fn create_pyth_feed(
    e: &Env,
    price: i64,
    conf: u64,
    expo: i32,
    publish_time: u64,
) -> MockPythFeed {
    let reading = PythPrice {
        price,
        conf,
        expo,
        publish_time,
    };
    MockPythFeed {
        price: reading,
        ema_price: reading,
        identifier: BytesN::from_array(e, &[1; 32]),
    }
}

pub struct MockSwitchboardFeed {
    pub result: AggregatorResult,
    pub identifier: BytesN<32>,
}

impl SwitchboardFeed for MockSwitchboardFeed {
    fn latest_result(&self) -> AggregatorResult {
        self.result
    }

    fn aggregator_identifier(&self) -> BytesN<32> {
        self.identifier.clone()
    }
}

pub fn create_switchboard_feed(
    e: &Env,
    value: i128,
    range: i128,
    timestamp_ms: u64,
) -> MockSwitchboardFeed {
    MockSwitchboardFeed {
        result: AggregatorResult {
            value,
            range,
            timestamp_ms,
        },
        identifier: BytesN::from_array(e, &[2; 32]),
    }
}
