mod api;
mod model;
mod wire;

pub use model::{QuoteSummary, SummaryDetail, SummaryRequest};

use crate::core::{
    PeClient, PeError,
    client::{CacheMode, RetryConfig},
};

/// Module name of the valuation/dividend field group.
pub const SUMMARY_DETAIL: &str = "summaryDetail";

/// A builder for one quoteSummary request against a [`PeClient`].
///
/// Requests only `summaryDetail` unless other modules are set.
pub struct SummaryBuilder<'a> {
    client: &'a PeClient,
    request: SummaryRequest,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl<'a> SummaryBuilder<'a> {
    /// Creates a new `SummaryBuilder` for a given symbol.
    pub fn new(client: &'a PeClient, symbol: impl Into<String>) -> Self {
        Self::from_request(client, SummaryRequest::new(symbol, [SUMMARY_DETAIL]))
    }

    /// Creates a builder from an already assembled request.
    pub const fn from_request(client: &'a PeClient, request: SummaryRequest) -> Self {
        Self {
            client,
            request,
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Replaces the requested field groups.
    #[must_use]
    pub fn modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.modules = modules.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches the quote summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, Yahoo reports an error, or the
    /// response cannot be decoded.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(symbol = %self.request.symbol))
    )]
    pub async fn fetch(self) -> Result<QuoteSummary, PeError> {
        api::fetch_summary(
            self.client,
            &self.request,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }

    /// Fetches only the `summaryDetail` group.
    ///
    /// # Errors
    ///
    /// Same as [`fetch`](Self::fetch), plus [`PeError::MissingData`] when the
    /// group is absent from the response.
    pub async fn summary_detail(self) -> Result<SummaryDetail, PeError> {
        self.modules([SUMMARY_DETAIL])
            .fetch()
            .await?
            .summary_detail
            .ok_or_else(|| PeError::MissingData("summaryDetail module missing from response".into()))
    }
}
