use serde::Serialize;

/// The field groups and symbol of one quoteSummary request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRequest {
    /// Ticker symbol, passed through untouched.
    pub symbol: String,
    /// quoteSummary module names (e.g. `summaryDetail`).
    pub modules: Vec<String>,
}

impl SummaryRequest {
    /// Builds a request for `symbol` with the given field groups.
    pub fn new<I, S>(symbol: impl Into<String>, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbol: symbol.into(),
            modules: modules.into_iter().map(Into::into).collect(),
        }
    }

    /// Comma-joined module list as the API expects it.
    pub fn modules_param(&self) -> String {
        self.modules.join(",")
    }
}

/// Typed result of a quoteSummary call.
///
/// Only field groups this crate models are kept; others are dropped on decode.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct QuoteSummary {
    /// The `summaryDetail` field group, if it was requested and returned.
    pub summary_detail: Option<SummaryDetail>,
}

/// Valuation, dividend and trading-range figures from the `summaryDetail` group.
///
/// Every field is optional; funds and recently listed symbols routinely omit some.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SummaryDetail {
    /// Price divided by trailing twelve-month EPS.
    pub trailing_pe: Option<f64>,
    /// Price divided by forward EPS estimate.
    pub forward_pe: Option<f64>,
    /// Annual dividend per share.
    pub dividend_rate: Option<f64>,
    /// Dividend yield as a fraction (0.0127 is 1.27%).
    pub dividend_yield: Option<f64>,
    pub trailing_annual_dividend_rate: Option<f64>,
    pub trailing_annual_dividend_yield: Option<f64>,
    /// Ex-dividend date, unix seconds.
    pub ex_dividend_date: Option<i64>,
    pub payout_ratio: Option<f64>,
    pub previous_close: Option<f64>,
    pub open: Option<f64>,
    pub day_low: Option<f64>,
    pub day_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub market_cap: Option<u64>,
    pub volume: Option<u64>,
    pub average_volume: Option<u64>,
    pub beta: Option<f64>,
    pub price_to_sales_trailing_12_months: Option<f64>,
    /// ISO currency code of the price fields.
    pub currency: Option<String>,
}
