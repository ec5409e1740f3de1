#![allow(dead_code)]

use rand::{rngs::StdRng, Rng};
use reserve::{ReserveConfig, ReserveConfigParams};
use soroban_sdk::{vec, Env, Vec};

pub fn create_reserve_params(utils: Vec<u32>, aprs: Vec<u64>) -> ReserveConfigParams {
    ReserveConfigParams {
        open_ltv_pct: 70,
        close_ltv_pct: 75,
        borrow_weight_bps: 15_000,
        deposit_limit: 10_000_000_000,
        borrow_limit: 8_000_000_000,
        deposit_limit_usd: 50_000_000,
        borrow_limit_usd: 40_000_000,
        liquidation_bonus_bps: 500,
        interest_rate_utils: utils,
        interest_rate_aprs: aprs,
        borrow_fee_bps: 5,
        spread_fee_bps: 1_000,
        liquidation_fee_bps: 100,
        isolated: false,
    }
}

pub fn create_reserve_config(e: &Env) -> ReserveConfig {
    let params = create_reserve_params(vec![e, 0, 10, 100], vec![e, 0, 100, 1000]);
    ReserveConfig::new(e, params).unwrap()
}

/// Generate a valid random curve with strictly increasing utilization and apr knots
pub fn random_curve(e: &Env, rng: &mut StdRng) -> (Vec<u32>, Vec<u64>) {
    let mut utils = vec![e, 0u32];
    let mut aprs = vec![e, rng.gen_range(0u64, 1_000)];
    let mut util = 0u32;
    let mut apr = aprs.get_unchecked(0);
    loop {
        util += rng.gen_range(1u32, 40);
        apr += rng.gen_range(1u64, 20_000);
        if util >= 100 {
            utils.push_back(100);
            aprs.push_back(apr);
            break;
        }
        utils.push_back(util);
        aprs.push_back(apr);
    }
    (utils, aprs)
}
