use decimal::Decimal;

/// The reason a price reading was not trusted
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rejection {
    /// The feed reported a negative price
    NegativePrice,
    /// The price, its exponent, or its spread does not fit the fixed-point range
    Unrepresentable,
    /// The confidence interval is wider than 10% of the price
    LowConfidence,
    /// The reading is older than the staleness window
    Stale,
    /// The aggregator's range is wider than 10% of the value
    WideDispersion,
}

impl Rejection {
    pub fn name(&self) -> &'static str {
        match self {
            Rejection::NegativePrice => "negative_price",
            Rejection::Unrepresentable => "unrepresentable",
            Rejection::LowConfidence => "low_confidence",
            Rejection::Stale => "stale",
            Rejection::WideDispersion => "wide_dispersion",
        }
    }
}

/// A spot price that is either trusted or explicitly absent.
///
/// Extraction never fails; an untrusted reading is a `NoQuote` and it is up to the caller to
/// fall back to another source or refuse the action.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Spot {
    Quote(Decimal),
    NoQuote(Rejection),
}

impl Spot {
    /// The trusted price, if any
    pub fn price(&self) -> Option<Decimal> {
        match self {
            Spot::Quote(price) => Some(*price),
            Spot::NoQuote(_) => None,
        }
    }

    pub fn is_quote(&self) -> bool {
        matches!(self, Spot::Quote(_))
    }

    /// The reason the price was rejected, if it was
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Spot::Quote(_) => None,
            Spot::NoQuote(rejection) => Some(*rejection),
        }
    }
}

impl From<Result<Decimal, Rejection>> for Spot {
    fn from(result: Result<Decimal, Rejection>) -> Self {
        match result {
            Ok(price) => Spot::Quote(price),
            Err(rejection) => Spot::NoQuote(rejection),
        }
    }
}
