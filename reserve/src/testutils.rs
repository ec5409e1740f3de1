#![cfg(test)]

use soroban_sdk::{vec, Env};

use crate::{ReserveConfig, ReserveConfigParams};

/// A valid parameter set with a two segment curve: 0% -> 0 bps, 10% -> 100 bps, 100% -> 1000 bps
pub(crate) fn default_reserve_params(e: &Env) -> ReserveConfigParams {
    ReserveConfigParams {
        open_ltv_pct: 50,
        close_ltv_pct: 80,
        borrow_weight_bps: 10_000,
        deposit_limit: 1_000_000,
        borrow_limit: 500_000,
        deposit_limit_usd: 2_000_000,
        borrow_limit_usd: 1_000_000,
        liquidation_bonus_bps: 500,
        interest_rate_utils: vec![e, 0, 10, 100],
        interest_rate_aprs: vec![e, 0, 100, 1000],
        borrow_fee_bps: 10,
        spread_fee_bps: 2_000,
        liquidation_fee_bps: 200,
        isolated: false,
    }
}

pub(crate) fn default_reserve_config(e: &Env) -> ReserveConfig {
    ReserveConfig::new(e, default_reserve_params(e)).unwrap()
}
