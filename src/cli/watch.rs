use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use bon::Builder;
use clap::Parser;
use reqwest::Url;
use tokio::{
    sync::mpsc::{self, Sender},
    time::{MissedTickBehavior, interval},
};

use crate::{
    api::{feed, heartbeat},
    core::{axis::EnergyAxis, overlay::Overlay, sample::Sample},
    prelude::*,
    quantity::energy::KilowattHours,
    tables::build_overlay_table,
};

#[derive(Parser)]
pub struct WatchArgs {
    /// Telemetry feed URL returning one `<time>,<energy>,<cost>` line.
    #[clap(long = "feed-url", env = "FEED_URL")]
    feed_url: Url,

    #[clap(long, env = "POLLING_INTERVAL", default_value = "2s")]
    polling_interval: humantime::Duration,

    /// Minimal energy output for a reading to be accepted.
    #[clap(long = "energy-threshold-kwh", env = "ENERGY_THRESHOLD_KWH", default_value = "50000")]
    energy_threshold: KilowattHours,

    /// Number of recent readings kept for the chart.
    #[clap(long, env = "HISTORY_LEN", default_value = "5")]
    history_len: usize,

    #[clap(long = "heartbeat-url", env = "HEARTBEAT_URL")]
    heartbeat_url: Option<Url>,
}

impl WatchArgs {
    pub async fn run(self) -> Result {
        ensure!(self.history_len != 0, "the history must keep at least one reading");

        let should_terminate = Arc::new(AtomicBool::new(false));
        signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&should_terminate))?;
        signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&should_terminate))?;

        // The poller is the producer, and this task is the single consumer
        // and the only writer of the display state.
        let (sender, mut receiver) = mpsc::channel(1);
        let poller = Poller::builder()
            .client(feed::Client::new(self.feed_url)?)
            .threshold(self.energy_threshold)
            .interval(self.polling_interval)
            .sender(sender)
            .should_terminate(Arc::clone(&should_terminate))
            .build();
        let poller = tokio::spawn(poller.run());

        let heartbeat = heartbeat::Client::new(self.heartbeat_url);
        let mut overlay = Overlay::with_history_len(self.history_len);
        while let Some(sample) = receiver.recv().await {
            info!(
                time_label = sample.time_label.as_str(),
                energy_output = %sample.energy_output,
                cost_savings = %sample.cost_savings,
                "accepted",
            );
            overlay.apply(sample);
            let axis = EnergyAxis::fit(self.energy_threshold, overlay.history());
            println!("{}", build_overlay_table(&overlay, axis));
            heartbeat.send().await;
        }

        poller.await?;
        Ok(())
    }
}

/// Polling half of the watch loop: fetches, parses and filters the feed, and
/// hands accepted samples over the channel.
#[derive(Builder)]
struct Poller {
    client: feed::Client,
    threshold: KilowattHours,
    sender: Sender<Sample>,
    should_terminate: Arc<AtomicBool>,

    #[builder(into)]
    interval: Duration,
}

impl Poller {
    /// At most one fetch is ever outstanding: each fetch is awaited to
    /// completion, and ticks that fall due meanwhile are skipped.
    ///
    /// Fetch and decode failures are logged and leave the overlay untouched;
    /// unparsable and below-threshold lines are dropped with a debug trace.
    ///
    /// TODO: cancel the pending tick on SIGTERM instead of waiting it out.
    async fn run(self) {
        let mut interval = interval(self.interval);
        interval.reset_after(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while !self.should_terminate.load(Ordering::Relaxed) {
            interval.tick().await;
            let line = match self.client.fetch_line().await {
                Ok(line) => line,
                Err(error) => {
                    warn!("failed to fetch the feed: {error:#}");
                    continue;
                }
            };
            let sample = match line.parse::<Sample>() {
                Ok(sample) => sample,
                Err(rejection) => {
                    debug!(line = line.as_str(), %rejection, "dropped the line");
                    continue;
                }
            };
            if !sample.exceeds(self.threshold) {
                debug!(
                    energy_output = %sample.energy_output,
                    threshold = %self.threshold,
                    "dropped a below-threshold reading",
                );
                continue;
            }
            if self.sender.send(sample).await.is_err() {
                // The overlay side is gone.
                break;
            }
        }
    }
}
