//! Cookie & crumb acquisition for Yahoo endpoints.

use crate::core::PeError;
use reqwest::header::SET_COOKIE;

impl super::PeClient {
    pub(crate) async fn ensure_credentials(&self) -> Result<(), PeError> {
        if self.state.read().await.crumb.is_some() {
            return Ok(());
        }

        // Only one task fetches; the rest wait here and re-check.
        let _guard = self.credential_fetch_lock.lock().await;

        if self.state.read().await.crumb.is_some() {
            return Ok(());
        }

        self.get_cookie().await?;
        self.get_crumb_internal().await?;

        Ok(())
    }

    pub(crate) async fn clear_crumb(&self) {
        self.state.write().await.crumb = None;
    }

    pub(crate) async fn crumb(&self) -> Option<String> {
        self.state.read().await.crumb.clone()
    }

    async fn get_cookie(&self) -> Result<(), PeError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(url = %self.cookie_url, "fetching cookie");

        let req = self.http.get(self.cookie_url.clone());
        let resp = self.send_with_retry(req, None).await?;

        // fc.yahoo.com answers 404 but still sets the cookie, so the status is ignored.
        let cookie = resp
            .headers()
            .get(SET_COOKIE)
            .ok_or_else(|| PeError::Auth("No cookie received from cookie endpoint".into()))?
            .to_str()
            .map_err(|_| PeError::Auth("Invalid cookie header format".into()))?
            .to_string();

        self.state.write().await.cookie = Some(cookie);
        Ok(())
    }

    async fn get_crumb_internal(&self) -> Result<(), PeError> {
        if self.state.read().await.cookie.is_none() {
            return Err(PeError::Auth("Cookie is missing, cannot get crumb".into()));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(url = %self.crumb_url, "fetching crumb");

        let req = self.http.get(self.crumb_url.clone());
        let resp = self.send_with_retry(req, None).await?;
        if !resp.status().is_success() {
            return Err(PeError::Auth(format!(
                "crumb endpoint returned status {}",
                resp.status().as_u16()
            )));
        }
        let crumb = resp.text().await?;

        if crumb.is_empty() || crumb.contains('{') || crumb.contains('<') {
            return Err(PeError::Auth(format!("Received invalid crumb: {crumb}")));
        }

        self.state.write().await.crumb = Some(crumb);
        Ok(())
    }
}
