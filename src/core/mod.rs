//! Core components: the [`PeClient`] and its builder, the [`PeError`] type,
//! and the shared quoteSummary transport.

/// The HTTP client (`PeClient`), builder, retry and cache configuration.
pub mod client;
/// The error type (`PeError`) for the crate.
pub mod error;
pub(crate) mod net;
pub(crate) mod quotesummary;
pub(crate) mod wire;

pub use client::{Backoff, CacheMode, PeClient, PeClientBuilder, RetryConfig};
pub use error::PeError;
