mod estimate;
mod probe;
mod watch;

use clap::{Parser, Subcommand};

pub use self::{estimate::EstimateArgs, probe::ProbeArgs, watch::WatchArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: poll the telemetry feed and keep the overlay up to date.
    #[clap(name = "watch")]
    Watch(Box<WatchArgs>),

    /// Fetch and parse the feed once, and print the sample as JSON.
    #[clap(name = "probe")]
    Probe(Box<ProbeArgs>),

    /// Estimate energy output and cost savings from an irradiance reading.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),
}
