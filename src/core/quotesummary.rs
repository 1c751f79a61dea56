use crate::core::{
    PeClient, PeError,
    client::{CacheMode, RetryConfig},
    net,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct V10Envelope {
    #[serde(rename = "quoteSummary")]
    pub(crate) quote_summary: Option<V10QuoteSummary>,
}

#[derive(Deserialize)]
pub struct V10QuoteSummary {
    pub(crate) result: Option<Vec<serde_json::Value>>,
    pub(crate) error: Option<V10Error>,
}

#[derive(Deserialize)]
pub struct V10Error {
    pub(crate) description: String,
}

/// Result of one authenticated attempt.
enum Attempt {
    Fresh(V10Envelope),
    /// Yahoo rejected the crumb; carries the error to surface if a refresh does not help.
    CrumbRejected(PeError),
}

fn is_invalid_crumb(description: &str) -> bool {
    description.to_ascii_lowercase().contains("invalid crumb")
}

/// Fetches the raw quoteSummary envelope for `symbol`.
///
/// `modules` is the comma-joined list of field groups. A rejected crumb
/// (HTTP 401 or an `Invalid Crumb` envelope error) clears the stored crumb
/// and triggers one credential refresh and a second attempt.
pub async fn fetch(
    client: &PeClient,
    symbol: &str,
    modules: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<V10Envelope, PeError> {
    async fn attempt_fetch(
        client: &PeClient,
        symbol: &str,
        modules: &str,
        cache_mode: CacheMode,
        retry_override: Option<&RetryConfig>,
    ) -> Result<Attempt, PeError> {
        client.ensure_credentials().await?;

        let crumb = client
            .crumb()
            .await
            .ok_or_else(|| PeError::Auth("Crumb is not set".into()))?;

        let mut url = client.base_quote_api().join(symbol)?;
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("modules", modules);
            qp.append_pair("crumb", &crumb);
        }

        if cache_mode == CacheMode::Use
            && let Some(text) = client.cache_get(&url).await
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(symbol, modules, "quoteSummary served from cache");
            return serde_json::from_str(&text)
                .map(Attempt::Fresh)
                .map_err(|e| PeError::Data(format!("quoteSummary json parse (cache): {e}")));
        }

        let req = client.http().get(url.clone());
        let resp = client.send_with_retry(req, retry_override).await?;
        let status = resp.status();
        let text = net::get_text(resp, "quoteSummary").await?;

        // Error bodies are usually still envelopes; keep the parse result for later.
        let parsed = serde_json::from_str::<V10Envelope>(&text);
        let envelope_error = parsed
            .as_ref()
            .ok()
            .and_then(|env| env.quote_summary.as_ref())
            .and_then(|qs| qs.error.as_ref())
            .map(|e| e.description.clone());

        if status.as_u16() == 401 || envelope_error.as_deref().is_some_and(is_invalid_crumb) {
            let err = match (status.is_success(), envelope_error) {
                (true, Some(desc)) => PeError::Api(desc),
                _ => PeError::from_status(status.as_u16(), &url),
            };
            return Ok(Attempt::CrumbRejected(err));
        }
        if !status.is_success() {
            return Err(PeError::from_status(status.as_u16(), &url));
        }

        let env = parsed.map_err(|e| PeError::Data(format!("quoteSummary json parse: {e}")))?;
        if let Some(desc) = envelope_error {
            return Err(PeError::Api(desc));
        }

        if cache_mode != CacheMode::Bypass {
            client.cache_put(&url, &text, None).await;
        }

        Ok(Attempt::Fresh(env))
    }

    for attempt in 0..=1 {
        match attempt_fetch(client, symbol, modules, cache_mode, retry_override).await? {
            Attempt::Fresh(env) => return Ok(env),
            Attempt::CrumbRejected(err) => {
                // Cleared even on the last attempt so later calls re-authenticate.
                client.clear_crumb().await;
                if attempt == 1 {
                    return Err(err);
                }
                #[cfg(feature = "tracing")]
                tracing::debug!(symbol, "crumb rejected; refreshing and retrying");
            }
        }
    }

    Err(PeError::Auth("quoteSummary call failed after crumb refresh".into()))
}

/// Fetches and decodes the first `result` entry of a quoteSummary call.
pub async fn fetch_module_result<T>(
    client: &PeClient,
    symbol: &str,
    modules: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<T, PeError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let env = fetch(client, symbol, modules, cache_mode, retry_override).await?;

    let result_val = env
        .quote_summary
        .and_then(|qs| qs.result)
        .and_then(|v| v.into_iter().next())
        .ok_or_else(|| PeError::MissingData("empty quoteSummary result".into()))?;

    serde_json::from_value(result_val)
        .map_err(|e| PeError::Data(format!("quoteSummary result parse: {e}")))
}
