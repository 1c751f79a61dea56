use crate::core::wire::{RawDate, RawNum};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct V10Result {
    pub(crate) summary_detail: Option<SummaryDetailNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryDetailNode {
    #[serde(rename = "trailingPE")]
    pub(crate) trailing_pe: Option<RawNum>,
    #[serde(rename = "forwardPE")]
    pub(crate) forward_pe: Option<RawNum>,

    pub(crate) dividend_rate: Option<RawNum>,
    pub(crate) dividend_yield: Option<RawNum>,
    pub(crate) trailing_annual_dividend_rate: Option<RawNum>,
    pub(crate) trailing_annual_dividend_yield: Option<RawNum>,
    pub(crate) ex_dividend_date: Option<RawDate>,
    pub(crate) payout_ratio: Option<RawNum>,

    pub(crate) previous_close: Option<RawNum>,
    pub(crate) open: Option<RawNum>,
    pub(crate) day_low: Option<RawNum>,
    pub(crate) day_high: Option<RawNum>,
    pub(crate) fifty_two_week_low: Option<RawNum>,
    pub(crate) fifty_two_week_high: Option<RawNum>,

    pub(crate) market_cap: Option<RawNum>,
    pub(crate) volume: Option<RawNum>,
    pub(crate) average_volume: Option<RawNum>,
    pub(crate) beta: Option<RawNum>,
    pub(crate) price_to_sales_trailing12_months: Option<RawNum>,

    // Plain string, not a raw wrapper
    pub(crate) currency: Option<String>,
}
