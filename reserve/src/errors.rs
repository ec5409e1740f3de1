use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
/// Error codes for reserve configuration. Invalid configuration errors occupy 1300-1319 so
/// callers can treat the whole group as one kind through `is_invalid_config`.
pub enum ReserveError {
    // Invalid Config Errors (start at 1300)
    InvalidLtv = 1300,
    InvalidLtvOrder = 1301,
    InvalidBorrowWeight = 1302,
    InvalidLiquidationBonus = 1303,
    InvalidFee = 1304,
    InvalidCurveLength = 1305,
    InvalidCurveBounds = 1306,
    InvalidCurveOrder = 1307,
    InvalidIsolation = 1308,

    // Builder Errors
    IncompleteBuilder = 1320,

    // Interest Rate Curve Errors
    UtilizationOutOfRange = 1330,
    CurveMatchExhausted = 1331,
}

impl ReserveError {
    /// Returns true if the error reports a violated configuration invariant
    pub fn is_invalid_config(&self) -> bool {
        (*self as u32) < ReserveError::IncompleteBuilder as u32
    }
}
