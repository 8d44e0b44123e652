use clap::Parser;
use reqwest::Url;

use crate::{api::feed, core::sample::Sample, prelude::*, quantity::energy::KilowattHours};

#[derive(Parser)]
pub struct ProbeArgs {
    /// Telemetry feed URL returning one `<time>,<energy>,<cost>` line.
    #[clap(long = "feed-url", env = "FEED_URL")]
    feed_url: Url,

    /// Threshold to check the reading against.
    #[clap(long = "energy-threshold-kwh", env = "ENERGY_THRESHOLD_KWH", default_value = "50000")]
    energy_threshold: KilowattHours,
}

impl ProbeArgs {
    /// Unlike the watch loop, the probe treats an unparsable line as an
    /// error: it is an inspection tool, and silence would hide the problem.
    pub async fn run(self) -> Result {
        let line = feed::Client::new(self.feed_url)?.fetch_line().await?;
        let sample: Sample =
            line.parse().with_context(|| format!("failed to parse the feed line `{line}`"))?;
        if sample.exceeds(self.energy_threshold) {
            info!(threshold = %self.energy_threshold, "the reading clears the threshold");
        } else {
            warn!(threshold = %self.energy_threshold, "the watch loop would drop this reading");
        }
        println!("{}", serde_json::to_string_pretty(&sample)?);
        Ok(())
    }
}
