//! Per-ticker JSON reports built from `summaryDetail`.

use crate::core::PeError;
use crate::source::QuoteSummarySource;
use crate::summary::{SUMMARY_DETAIL, SummaryDetail, SummaryRequest};
use serde::Serialize;

const PE_UNAVAILABLE: &str = "P/E ratio not available";
const DIVIDEND_UNAVAILABLE: &str = "Dividend not available";

/// Trailing P/E for one ticker, or a note that the provider has none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PeReport {
    Ok { ticker: String, pe_ratio: f64 },
    Unavailable { ticker: String, error: String },
}

/// Dividend rate and yield for one ticker, or a note that it pays none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DividendReport {
    Ok {
        ticker: String,
        dividend: f64,
        /// Yield as a percentage string with two decimals, e.g. `"1.27%"`.
        dividend_yield: Option<String>,
    },
    Unavailable { ticker: String, error: String },
}

async fn fetch_detail(
    source: &dyn QuoteSummarySource,
    ticker: &str,
) -> Result<SummaryDetail, PeError> {
    let req = SummaryRequest::new(ticker, [SUMMARY_DETAIL]);
    source
        .quote_summary(&req)
        .await?
        .summary_detail
        .ok_or_else(|| PeError::MissingData(format!("{SUMMARY_DETAIL} missing for {ticker}")))
}

/// Builds the P/E report for `ticker`.
///
/// # Errors
///
/// Upstream failures from `source` are returned unchanged.
pub async fn pe_report(source: &dyn QuoteSummarySource, ticker: &str) -> Result<PeReport, PeError> {
    let detail = fetch_detail(source, ticker).await?;
    Ok(match detail.trailing_pe {
        Some(pe_ratio) => PeReport::Ok {
            ticker: ticker.to_string(),
            pe_ratio,
        },
        None => PeReport::Unavailable {
            ticker: ticker.to_string(),
            error: PE_UNAVAILABLE.to_string(),
        },
    })
}

/// Builds the dividend report for `ticker`.
///
/// # Errors
///
/// Upstream failures from `source` are returned unchanged.
pub async fn dividend_report(
    source: &dyn QuoteSummarySource,
    ticker: &str,
) -> Result<DividendReport, PeError> {
    let detail = fetch_detail(source, ticker).await?;
    Ok(match detail.dividend_rate {
        Some(dividend) => DividendReport::Ok {
            ticker: ticker.to_string(),
            dividend,
            dividend_yield: format_yield(detail.dividend_yield),
        },
        None => DividendReport::Unavailable {
            ticker: ticker.to_string(),
            error: DIVIDEND_UNAVAILABLE.to_string(),
        },
    })
}

/// A zero or absent yield is reported as `None`.
fn format_yield(y: Option<f64>) -> Option<String> {
    y.filter(|v| *v != 0.0).map(|v| format!("{:.2}%", v * 100.0))
}
