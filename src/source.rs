//! The seam between callers and whatever produces quote summaries.

use crate::core::{PeClient, PeError};
use crate::summary::{QuoteSummary, SummaryBuilder, SummaryRequest};
use std::future::Future;
use std::pin::Pin;

/// Boxed future returned by [`QuoteSummarySource::quote_summary`].
pub type SummaryFuture<'a> = Pin<Box<dyn Future<Output = Result<QuoteSummary, PeError>> + Send + 'a>>;

/// Something that can answer a quoteSummary request.
///
/// Implemented by [`PeClient`]; tests substitute their own implementation.
pub trait QuoteSummarySource: Send + Sync {
    /// Asynchronously fetches the field groups named in `req` for `req.symbol`.
    fn quote_summary<'a>(&'a self, req: &'a SummaryRequest) -> SummaryFuture<'a>;
}

impl QuoteSummarySource for PeClient {
    fn quote_summary<'a>(&'a self, req: &'a SummaryRequest) -> SummaryFuture<'a> {
        Box::pin(SummaryBuilder::from_request(self, req.clone()).fetch())
    }
}
