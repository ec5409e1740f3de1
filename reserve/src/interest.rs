use decimal::Decimal;
use soroban_sdk::{log, Env};

use crate::{config::ReserveConfig, errors::ReserveError};

impl ReserveConfig {
    /// Calculate the borrow APR of the reserve at the given utilization by interpolating
    /// linearly between the knots of the interest rate curve.
    ///
    /// Segments are scanned in ascending order and the first segment containing `utilization`
    /// (inclusive on both ends) is used, so an interior knot resolves to the lower segment.
    ///
    /// ### Arguments
    /// * `utilization` - The current utilization of the reserve, between 0 and 1
    ///
    /// ### Returns
    /// * Decimal - The borrow APR, where 1 is 100%
    ///
    /// ### Errors
    /// * `UtilizationOutOfRange` - If `utilization` is greater than 1
    /// * `CurveMatchExhausted` - If no segment contains `utilization`. Unreachable for a
    ///   validated config.
    pub fn calculate_apr(&self, e: &Env, utilization: Decimal) -> Result<Decimal, ReserveError> {
        if utilization > Decimal::ONE {
            return Err(ReserveError::UtilizationOutOfRange);
        }

        let utils = self.interest_rate_utils();
        let aprs = self.interest_rate_aprs();
        for i in 1..utils.len() {
            let left_util = Decimal::from_percent(utils.get_unchecked(i - 1));
            let right_util = Decimal::from_percent(utils.get_unchecked(i));
            if utilization >= left_util && utilization <= right_util {
                let left_apr = Decimal::from_bps(aprs.get_unchecked(i - 1));
                let right_apr = Decimal::from_bps(aprs.get_unchecked(i));

                let weight = utilization
                    .sub(left_util)
                    .div(right_util.sub(left_util));
                let apr_diff = right_apr.sub(left_apr);
                return Ok(left_apr.add(weight.mul(apr_diff)));
            }
        }

        log!(
            e,
            "interest rate curve exhausted",
            utilization.to_scaled_val()
        );
        Err(ReserveError::CurveMatchExhausted)
    }

    /// Calculate the APR earned by suppliers at the given utilization
    ///
    /// `supply_apr = borrow_apr * utilization * (1 - spread_fee)`
    ///
    /// ### Errors
    /// Same as `calculate_apr`
    pub fn calculate_supply_apr(
        &self,
        e: &Env,
        utilization: Decimal,
    ) -> Result<Decimal, ReserveError> {
        let borrow_apr = self.calculate_apr(e, utilization)?;
        Ok(borrow_apr
            .mul(utilization)
            .mul(Decimal::ONE.sub(self.spread_fee())))
    }
}
