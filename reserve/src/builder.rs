use soroban_sdk::{log, Env, Symbol, Vec};

use crate::{
    config::{ReserveConfig, ReserveConfigParams},
    errors::ReserveError,
};

/// A staging area for a new reserve configuration.
///
/// Every field starts absent (or copied from an existing config) and is overwritten one at a
/// time. The draft can not be queried; `build` is the only way out, and it re-runs the full
/// `ReserveConfig` validation.
#[derive(Clone, Debug, Default)]
pub struct ReserveConfigBuilder {
    open_ltv_pct: Option<u32>,
    close_ltv_pct: Option<u32>,
    borrow_weight_bps: Option<u64>,
    deposit_limit: Option<u64>,
    borrow_limit: Option<u64>,
    deposit_limit_usd: Option<u64>,
    borrow_limit_usd: Option<u64>,
    liquidation_bonus_bps: Option<u64>,
    interest_rate_utils: Option<Vec<u32>>,
    interest_rate_aprs: Option<Vec<u64>>,
    borrow_fee_bps: Option<u64>,
    spread_fee_bps: Option<u64>,
    liquidation_fee_bps: Option<u64>,
    isolated: Option<bool>,
}

impl ReserveConfigBuilder {
    /// Create a builder with every field absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with every field copied from an existing config
    pub fn from_config(config: &ReserveConfig) -> Self {
        let params = config.params().clone();
        ReserveConfigBuilder {
            open_ltv_pct: Some(params.open_ltv_pct),
            close_ltv_pct: Some(params.close_ltv_pct),
            borrow_weight_bps: Some(params.borrow_weight_bps),
            deposit_limit: Some(params.deposit_limit),
            borrow_limit: Some(params.borrow_limit),
            deposit_limit_usd: Some(params.deposit_limit_usd),
            borrow_limit_usd: Some(params.borrow_limit_usd),
            liquidation_bonus_bps: Some(params.liquidation_bonus_bps),
            interest_rate_utils: Some(params.interest_rate_utils),
            interest_rate_aprs: Some(params.interest_rate_aprs),
            borrow_fee_bps: Some(params.borrow_fee_bps),
            spread_fee_bps: Some(params.spread_fee_bps),
            liquidation_fee_bps: Some(params.liquidation_fee_bps),
            isolated: Some(params.isolated),
        }
    }

    pub fn set_open_ltv_pct(&mut self, open_ltv_pct: u32) -> &mut Self {
        self.open_ltv_pct = Some(open_ltv_pct);
        self
    }

    pub fn set_close_ltv_pct(&mut self, close_ltv_pct: u32) -> &mut Self {
        self.close_ltv_pct = Some(close_ltv_pct);
        self
    }

    pub fn set_borrow_weight_bps(&mut self, borrow_weight_bps: u64) -> &mut Self {
        self.borrow_weight_bps = Some(borrow_weight_bps);
        self
    }

    pub fn set_deposit_limit(&mut self, deposit_limit: u64) -> &mut Self {
        self.deposit_limit = Some(deposit_limit);
        self
    }

    pub fn set_borrow_limit(&mut self, borrow_limit: u64) -> &mut Self {
        self.borrow_limit = Some(borrow_limit);
        self
    }

    pub fn set_deposit_limit_usd(&mut self, deposit_limit_usd: u64) -> &mut Self {
        self.deposit_limit_usd = Some(deposit_limit_usd);
        self
    }

    pub fn set_borrow_limit_usd(&mut self, borrow_limit_usd: u64) -> &mut Self {
        self.borrow_limit_usd = Some(borrow_limit_usd);
        self
    }

    pub fn set_liquidation_bonus_bps(&mut self, liquidation_bonus_bps: u64) -> &mut Self {
        self.liquidation_bonus_bps = Some(liquidation_bonus_bps);
        self
    }

    /// Set both sides of the interest rate curve. Knot `i` is `(utils[i], aprs[i])`.
    pub fn set_interest_rate_curve(&mut self, utils: Vec<u32>, aprs: Vec<u64>) -> &mut Self {
        self.interest_rate_utils = Some(utils);
        self.interest_rate_aprs = Some(aprs);
        self
    }

    pub fn set_interest_rate_utils(&mut self, utils: Vec<u32>) -> &mut Self {
        self.interest_rate_utils = Some(utils);
        self
    }

    pub fn set_interest_rate_aprs(&mut self, aprs: Vec<u64>) -> &mut Self {
        self.interest_rate_aprs = Some(aprs);
        self
    }

    pub fn set_borrow_fee_bps(&mut self, borrow_fee_bps: u64) -> &mut Self {
        self.borrow_fee_bps = Some(borrow_fee_bps);
        self
    }

    pub fn set_spread_fee_bps(&mut self, spread_fee_bps: u64) -> &mut Self {
        self.spread_fee_bps = Some(spread_fee_bps);
        self
    }

    pub fn set_liquidation_fee_bps(&mut self, liquidation_fee_bps: u64) -> &mut Self {
        self.liquidation_fee_bps = Some(liquidation_fee_bps);
        self
    }

    pub fn set_isolated(&mut self, isolated: bool) -> &mut Self {
        self.isolated = Some(isolated);
        self
    }

    /// The names of every field that has not been set
    pub fn missing_fields(&self, e: &Env) -> Vec<Symbol> {
        let mut missing = Vec::new(e);
        let mut require = |present: bool, name: &str| {
            if !present {
                missing.push_back(Symbol::new(e, name));
            }
        };
        require(self.open_ltv_pct.is_some(), "open_ltv_pct");
        require(self.close_ltv_pct.is_some(), "close_ltv_pct");
        require(self.borrow_weight_bps.is_some(), "borrow_weight_bps");
        require(self.deposit_limit.is_some(), "deposit_limit");
        require(self.borrow_limit.is_some(), "borrow_limit");
        require(self.deposit_limit_usd.is_some(), "deposit_limit_usd");
        require(self.borrow_limit_usd.is_some(), "borrow_limit_usd");
        require(self.liquidation_bonus_bps.is_some(), "liquidation_bonus_bps");
        require(self.interest_rate_utils.is_some(), "interest_rate_utils");
        require(self.interest_rate_aprs.is_some(), "interest_rate_aprs");
        require(self.borrow_fee_bps.is_some(), "borrow_fee_bps");
        require(self.spread_fee_bps.is_some(), "spread_fee_bps");
        require(self.liquidation_fee_bps.is_some(), "liquidation_fee_bps");
        require(self.isolated.is_some(), "isolated");
        missing
    }

    /// Consume the builder and create a validated configuration
    ///
    /// ### Errors
    /// * `IncompleteBuilder` - If any field was never set
    /// * Any invalid config error from `ReserveConfig::new`, unchanged
    pub fn build(self, e: &Env) -> Result<ReserveConfig, ReserveError> {
        let missing = self.missing_fields(e);
        if !missing.is_empty() {
            for field in missing.iter() {
                log!(e, "reserve config builder missing field", field);
            }
            return Err(ReserveError::IncompleteBuilder);
        }
        let params = self.into_params().ok_or(ReserveError::IncompleteBuilder)?;
        ReserveConfig::new(e, params)
    }

    fn into_params(self) -> Option<ReserveConfigParams> {
        Some(ReserveConfigParams {
            open_ltv_pct: self.open_ltv_pct?,
            close_ltv_pct: self.close_ltv_pct?,
            borrow_weight_bps: self.borrow_weight_bps?,
            deposit_limit: self.deposit_limit?,
            borrow_limit: self.borrow_limit?,
            deposit_limit_usd: self.deposit_limit_usd?,
            borrow_limit_usd: self.borrow_limit_usd?,
            liquidation_bonus_bps: self.liquidation_bonus_bps?,
            interest_rate_utils: self.interest_rate_utils?,
            interest_rate_aprs: self.interest_rate_aprs?,
            borrow_fee_bps: self.borrow_fee_bps?,
            spread_fee_bps: self.spread_fee_bps?,
            liquidation_fee_bps: self.liquidation_fee_bps?,
            isolated: self.isolated?,
        })
    }
}

impl From<&ReserveConfig> for ReserveConfigBuilder {
    fn from(config: &ReserveConfig) -> Self {
        ReserveConfigBuilder::from_config(config)
    }
}
