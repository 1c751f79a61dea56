//! Fetch-and-print of VOO's trailing P/E ratio.

use crate::core::PeError;
use crate::source::QuoteSummarySource;
use crate::summary::{SUMMARY_DETAIL, SummaryRequest};
use std::io::Write;

/// The one ticker this program reports on.
pub const TICKER: &str = "VOO";

/// The field group holding `trailingPE`.
pub const FIELD_GROUP: &str = SUMMARY_DETAIL;

/// Printed when the provider returns no trailing P/E.
pub const MISSING_MARKER: &str = "undefined";

/// The request `run` sends: `VOO` with only `summaryDetail`.
pub fn request() -> SummaryRequest {
    SummaryRequest::new(TICKER, [FIELD_GROUP])
}

/// Natural textual form of the ratio, or [`MISSING_MARKER`].
///
/// Non-finite values print as `Infinity`, `-Infinity` and `NaN`.
pub fn render_trailing_pe(value: Option<f64>) -> String {
    match value {
        None => MISSING_MARKER.to_string(),
        Some(v) if v.is_nan() => "NaN".to_string(),
        Some(v) if v.is_infinite() && v > 0.0 => "Infinity".to_string(),
        Some(v) if v.is_infinite() => "-Infinity".to_string(),
        Some(v) => v.to_string(),
    }
}

/// Makes exactly one call to `source` and writes the trailing P/E line to `out`.
///
/// Nothing is written if the call fails.
///
/// # Errors
///
/// Any failure from `source` is returned unchanged. A response without the
/// `summaryDetail` group is [`PeError::MissingData`]. Write failures are
/// [`PeError::Io`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, err))]
pub async fn run<W: Write>(source: &dyn QuoteSummarySource, out: &mut W) -> Result<(), PeError> {
    let req = request();
    let summary = source.quote_summary(&req).await?;

    let detail = summary.summary_detail.as_ref().ok_or_else(|| {
        PeError::MissingData(format!("{FIELD_GROUP} missing from {TICKER} response"))
    })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(trailing_pe = ?detail.trailing_pe, "quote summary received");

    writeln!(out, "{}", render_trailing_pe(detail.trailing_pe))?;
    Ok(())
}
