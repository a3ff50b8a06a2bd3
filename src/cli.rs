mod history;
mod log;
mod profile;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use self::{history::HistoryArgs, log::LogArgs, profile::ProfileArgs};
use crate::{prelude::*, quantity::rate::KilowattHourRate};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Session file with the saved profile and the consumption log.
    #[clap(long, env = "SESSION_FILE", default_value = "session.toml", global = true)]
    pub session_file: PathBuf,

    /// Energy price used for the monthly cost projection.
    #[clap(long = "rate-per-kwh", env = "RATE_PER_KWH", default_value = "5", global = true)]
    rate: KilowattHourRate,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Validated energy price.
    pub fn rate(&self) -> Result<KilowattHourRate> {
        ensure!(self.rate.0.is_finite(), "the rate must be a number, got {}", self.rate);
        ensure!(self.rate >= KilowattHourRate::ZERO, "the rate cannot be negative");
        Ok(self.rate)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Save the housing profile and show the resulting estimate.
    #[clap(name = "profile")]
    Profile(Box<ProfileArgs>),

    /// Show the estimate, the advice, and the appliance breakdown for the saved profile.
    #[clap(name = "estimate")]
    Estimate,

    /// Log the actual consumption of a day.
    #[clap(name = "log")]
    Log(LogArgs),

    /// Show the recent entries, the statistics, and the trend.
    #[clap(name = "history")]
    History(HistoryArgs),
}
