use std::time::Duration;

use reqwest::{
    Response,
    Url,
    header::{HeaderMap, HeaderName, HeaderValue},
};

use crate::prelude::*;

/// Client for the telemetry feed: a plain-text endpoint serving one
/// `<time>,<energy>,<cost>` line.
pub struct Client {
    inner: reqwest::Client,
    url: Url,
}

impl Client {
    pub fn new(url: Url) -> Result<Self> {
        // The feed is typically served through an ngrok tunnel, which
        // otherwise answers with an interstitial page instead of the body.
        let headers = HeaderMap::from_iter([(
            HeaderName::from_static("ngrok-skip-browser-warning"),
            HeaderValue::from_static("true"),
        )]);
        let inner = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { inner, url })
    }

    /// Fetch the current feed line.
    #[instrument(skip_all, fields(url = %self.url))]
    pub async fn fetch_line(&self) -> Result<String> {
        let body = self
            .inner
            .get(self.url.clone())
            .send()
            .await
            .and_then(Response::error_for_status)
            .with_context(|| format!("failed to request the feed from `{}`", self.url))?
            .text()
            .await
            .with_context(|| format!("failed to decode the response from `{}`", self.url))?;
        debug!(n_bytes = body.len(), "fetched");
        Ok(body)
    }
}
