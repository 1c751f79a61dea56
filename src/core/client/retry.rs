use crate::core::PeError;
use rand::Rng;
use std::time::Duration;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
        /// Whether to apply random jitter (+/- 50%) to the delay.
        jitter: bool,
    },
}

impl Backoff {
    /// Delay to wait before retry number `attempt` (zero-based).
    pub(crate) fn delay(&self, attempt: u32) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let exp = i32::try_from(attempt).unwrap_or(i32::MAX);
                let cap = max.as_secs_f64();
                let mut secs = (base.as_secs_f64() * factor.powi(exp)).min(cap);
                if *jitter {
                    secs *= rand::rng().random_range(0.5..=1.5);
                }
                if !secs.is_finite() {
                    return *max;
                }
                Duration::from_secs_f64(secs.clamp(0.0, cap))
            }
        }
    }
}

/// Configuration for the automatic retry mechanism.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries. The total number of attempts is `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// HTTP status codes that trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 4,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(200),
                factor: 2.0,
                max: Duration::from_secs(3),
                jitter: true,
            },
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

/// Defines the behavior of the in-memory cache for an API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Read from the cache if a non-expired entry is present; otherwise fetch
    /// from the network and write the response to the cache. (Default)
    #[default]
    Use,
    /// Always fetch from the network and overwrite the cached entry.
    Refresh,
    /// Always fetch from the network; never read or write the cache.
    Bypass,
}

impl super::PeClient {
    /// Sends `req`, retrying according to `retry_override` or the client's policy.
    ///
    /// A response with a non-retryable (or exhausted) status is returned as-is;
    /// callers decide how to map it.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, PeError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        let mut attempt: u32 = 0;

        loop {
            let this_try = req
                .try_clone()
                .ok_or_else(|| PeError::Data("request cannot be cloned for retry".into()))?;
            let can_retry = cfg.enabled && attempt < cfg.max_retries;

            match this_try.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if !(can_retry && cfg.retry_on_status.contains(&status)) {
                        return Ok(resp);
                    }
                    #[cfg(feature = "tracing")]
                    tracing::warn!(status, attempt, url = %resp.url(), "retrying on status");
                }
                Err(e) => {
                    let retryable = (cfg.retry_on_timeout && e.is_timeout())
                        || (cfg.retry_on_connect && e.is_connect());
                    if !(can_retry && retryable) {
                        return Err(e.into());
                    }
                    #[cfg(feature = "tracing")]
                    tracing::warn!(error = %e, attempt, "retrying on transport error");
                }
            }

            tokio::time::sleep(cfg.backoff.delay(attempt)).await;
            attempt += 1;
        }
    }
}
