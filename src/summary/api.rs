use crate::{
    core::{
        PeClient, PeError,
        client::{CacheMode, RetryConfig},
        quotesummary,
        wire::{from_raw, from_raw_date, from_raw_u64},
    },
    summary::{
        model::{QuoteSummary, SummaryDetail, SummaryRequest},
        wire::{SummaryDetailNode, V10Result},
    },
};

pub(super) async fn fetch_summary(
    client: &PeClient,
    req: &SummaryRequest,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<QuoteSummary, PeError> {
    if req.modules.is_empty() {
        return Err(PeError::Data("no quoteSummary modules requested".into()));
    }

    let root: V10Result = quotesummary::fetch_module_result(
        client,
        &req.symbol,
        &req.modules_param(),
        cache_mode,
        retry_override,
    )
    .await?;

    Ok(QuoteSummary {
        summary_detail: root.summary_detail.map(map_summary_detail),
    })
}

fn map_summary_detail(n: SummaryDetailNode) -> SummaryDetail {
    SummaryDetail {
        trailing_pe: from_raw(n.trailing_pe),
        forward_pe: from_raw(n.forward_pe),
        dividend_rate: from_raw(n.dividend_rate),
        dividend_yield: from_raw(n.dividend_yield),
        trailing_annual_dividend_rate: from_raw(n.trailing_annual_dividend_rate),
        trailing_annual_dividend_yield: from_raw(n.trailing_annual_dividend_yield),
        ex_dividend_date: from_raw_date(n.ex_dividend_date),
        payout_ratio: from_raw(n.payout_ratio),
        previous_close: from_raw(n.previous_close),
        open: from_raw(n.open),
        day_low: from_raw(n.day_low),
        day_high: from_raw(n.day_high),
        fifty_two_week_low: from_raw(n.fifty_two_week_low),
        fifty_two_week_high: from_raw(n.fifty_two_week_high),
        market_cap: from_raw_u64(n.market_cap),
        volume: from_raw_u64(n.volume),
        average_volume: from_raw_u64(n.average_volume),
        beta: from_raw(n.beta),
        price_to_sales_trailing_12_months: from_raw(n.price_to_sales_trailing12_months),
        currency: n.currency,
    }
}
