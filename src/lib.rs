//! trailing-pe: fetch a Yahoo Finance quote summary and read its trailing P/E.
//!
//! The [`PeClient`] speaks the cookie/crumb-authenticated `quoteSummary`
//! endpoint. [`app::run`] is the fetch-and-print flow behind the binary; it
//! only sees a [`QuoteSummarySource`], so any source can stand in for Yahoo.

pub mod app;
pub mod core;
pub mod report;
pub mod source;
pub mod summary;

pub use crate::core::{Backoff, CacheMode, PeClient, PeClientBuilder, PeError, RetryConfig};
pub use report::{DividendReport, PeReport, dividend_report, pe_report};
pub use source::{QuoteSummarySource, SummaryFuture};
pub use summary::{QuoteSummary, SummaryBuilder, SummaryDetail, SummaryRequest};
