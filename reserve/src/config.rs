use decimal::Decimal;
use soroban_sdk::{contracttype, log, Env, Vec};

use crate::{
    constants::{
        CURVE_END_UTIL_PCT, CURVE_START_UTIL_PCT, MAX_FEE_BPS, MAX_LIQUIDATION_BONUS_BPS,
        MAX_LTV_PCT, MIN_BORROW_WEIGHT_BPS, MIN_CURVE_KNOTS,
    },
    errors::ReserveError,
};

/// The raw risk and interest parameters for a reserve, as supplied by configuration tooling.
///
/// Nothing here is validated. Use `ReserveConfig::new` or the `ReserveConfigBuilder` to turn a
/// parameter set into a usable configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ReserveConfigParams {
    pub open_ltv_pct: u32,              // the ltv used to open new borrows, in percent
    pub close_ltv_pct: u32,             // the ltv at which a position can be liquidated, in percent
    pub borrow_weight_bps: u64,         // the risk multiplier applied to borrowed value
    pub deposit_limit: u64,             // the deposit cap in underlying tokens
    pub borrow_limit: u64,              // the borrow cap in underlying tokens
    pub deposit_limit_usd: u64,         // the deposit cap in USD
    pub borrow_limit_usd: u64,          // the borrow cap in USD
    pub liquidation_bonus_bps: u64,     // the bonus paid to liquidators
    pub interest_rate_utils: Vec<u32>,  // the utilization of each curve knot, in percent
    pub interest_rate_aprs: Vec<u64>,   // the borrow apr of each curve knot, in basis points
    pub borrow_fee_bps: u64,            // the fee taken on new borrows
    pub spread_fee_bps: u64,            // the protocol's cut of borrow interest
    pub liquidation_fee_bps: u64,       // the protocol's cut of liquidations
    pub isolated: bool,                 // if the asset can only be borrowed in isolation
}

/// A validated, immutable reserve configuration.
///
/// A `ReserveConfig` can only be created through `ReserveConfig::new` or
/// `ReserveConfigBuilder::build`, both of which check every invariant before returning.
/// Updates replace the whole configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReserveConfig {
    params: ReserveConfigParams,
}

impl ReserveConfig {
    /// Validate a parameter set and create a configuration from it
    ///
    /// ### Arguments
    /// * `params` - The raw reserve parameters
    ///
    /// ### Errors
    /// Returns the invalid config error of the first violated invariant. No configuration is
    /// created on failure.
    pub fn new(e: &Env, params: ReserveConfigParams) -> Result<ReserveConfig, ReserveError> {
        if let Err(error) = require_valid_reserve_config(&params) {
            log!(e, "reserve config rejected", error as u32);
            return Err(error);
        }
        Ok(ReserveConfig { params })
    }

    /// The underlying parameters, for persistence
    pub fn params(&self) -> &ReserveConfigParams {
        &self.params
    }

    pub fn open_ltv(&self) -> Decimal {
        Decimal::from_percent(self.params.open_ltv_pct)
    }

    pub fn close_ltv(&self) -> Decimal {
        Decimal::from_percent(self.params.close_ltv_pct)
    }

    /// The borrow weight. Guaranteed to be at least 1.
    pub fn borrow_weight(&self) -> Decimal {
        Decimal::from_bps(self.params.borrow_weight_bps)
    }

    pub fn liquidation_bonus(&self) -> Decimal {
        Decimal::from_bps(self.params.liquidation_bonus_bps)
    }

    pub fn borrow_fee(&self) -> Decimal {
        Decimal::from_bps(self.params.borrow_fee_bps)
    }

    pub fn spread_fee(&self) -> Decimal {
        Decimal::from_bps(self.params.spread_fee_bps)
    }

    pub fn liquidation_fee(&self) -> Decimal {
        Decimal::from_bps(self.params.liquidation_fee_bps)
    }

    pub fn deposit_limit(&self) -> u64 {
        self.params.deposit_limit
    }

    pub fn borrow_limit(&self) -> u64 {
        self.params.borrow_limit
    }

    pub fn deposit_limit_usd(&self) -> u64 {
        self.params.deposit_limit_usd
    }

    pub fn borrow_limit_usd(&self) -> u64 {
        self.params.borrow_limit_usd
    }

    pub fn isolated(&self) -> bool {
        self.params.isolated
    }

    pub fn interest_rate_utils(&self) -> &Vec<u32> {
        &self.params.interest_rate_utils
    }

    pub fn interest_rate_aprs(&self) -> &Vec<u64> {
        &self.params.interest_rate_aprs
    }
}

/// Require that every reserve configuration invariant holds
///
/// Structural checks on the curve run before the numeric bounds.
fn require_valid_reserve_config(params: &ReserveConfigParams) -> Result<(), ReserveError> {
    require_valid_curve_shape(&params.interest_rate_utils, &params.interest_rate_aprs)?;

    if params.open_ltv_pct > MAX_LTV_PCT || params.close_ltv_pct > MAX_LTV_PCT {
        return Err(ReserveError::InvalidLtv);
    }
    if params.open_ltv_pct > params.close_ltv_pct {
        return Err(ReserveError::InvalidLtvOrder);
    }
    if params.isolated && (params.open_ltv_pct != 0 || params.close_ltv_pct != 0) {
        return Err(ReserveError::InvalidIsolation);
    }
    if params.borrow_weight_bps < MIN_BORROW_WEIGHT_BPS {
        return Err(ReserveError::InvalidBorrowWeight);
    }
    if params.liquidation_bonus_bps > MAX_LIQUIDATION_BONUS_BPS {
        return Err(ReserveError::InvalidLiquidationBonus);
    }
    if params.borrow_fee_bps > MAX_FEE_BPS
        || params.spread_fee_bps > MAX_FEE_BPS
        || params.liquidation_fee_bps > MAX_FEE_BPS
    {
        return Err(ReserveError::InvalidFee);
    }

    require_increasing_curve(&params.interest_rate_utils, &params.interest_rate_aprs)
}

fn require_valid_curve_shape(utils: &Vec<u32>, aprs: &Vec<u64>) -> Result<(), ReserveError> {
    if utils.len() < MIN_CURVE_KNOTS || utils.len() != aprs.len() {
        return Err(ReserveError::InvalidCurveLength);
    }
    if utils.first_unchecked() != CURVE_START_UTIL_PCT
        || utils.last_unchecked() != CURVE_END_UTIL_PCT
    {
        return Err(ReserveError::InvalidCurveBounds);
    }
    Ok(())
}

/// Both the utilization and apr of each knot must be strictly greater than the previous knot.
/// The curve evaluator relies on this to never see an empty or reversed segment.
fn require_increasing_curve(utils: &Vec<u32>, aprs: &Vec<u64>) -> Result<(), ReserveError> {
    for i in 1..utils.len() {
        if utils.get_unchecked(i - 1) >= utils.get_unchecked(i)
            || aprs.get_unchecked(i - 1) >= aprs.get_unchecked(i)
        {
            return Err(ReserveError::InvalidCurveOrder);
        }
    }
    Ok(())
}
