use std::time::Duration;

use reqwest::Url;

use crate::prelude::*;

/// Dead man's switch notifier. Does nothing when no URL is configured, and
/// never fails the caller.
pub struct Client(Option<Url>);

impl Client {
    pub const fn new(url: Option<Url>) -> Self {
        Self(url)
    }

    pub async fn send(&self) {
        if let Some(url) = &self.0
            && let Err(error) = Self::send_to(url.clone()).await
        {
            warn!("failed to send the heartbeat: {error:#}");
        }
    }

    #[instrument(skip_all)]
    async fn send_to(url: Url) -> Result {
        debug!("sending a heartbeat…");
        reqwest::Client::builder()
            .timeout(Duration::from_secs(3))
            .build()?
            .post(url)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
