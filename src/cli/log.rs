use chrono::{Local, NaiveDate};
use clap::Parser;

use crate::{prelude::*, quantity::energy::KilowattHours};

#[derive(Parser)]
pub struct LogArgs {
    /// Day of the consumption, defaults to today.
    #[clap(long)]
    pub date: Option<NaiveDate>,

    /// Actual consumption in kilowatt-hours, defaults to the current estimate.
    #[clap(long = "actual-kwh", alias = "actual")]
    pub actual: Option<KilowattHours>,
}

impl LogArgs {
    pub fn date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Validated actual consumption.
    pub fn actual(&self) -> Result<Option<KilowattHours>> {
        if let Some(actual) = self.actual {
            ensure!(actual.0.is_finite(), "actual consumption must be a number, got {actual}");
            ensure!(actual >= KilowattHours::ZERO, "actual consumption cannot be negative");
        }
        Ok(self.actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Args, Command};

    fn parse(args: &[&str]) -> LogArgs {
        let args = Args::try_parse_from([&["wattlog", "log"][..], args].concat()).unwrap();
        let Command::Log(args) = args.command else { panic!("expected the log command") };
        args
    }

    #[test]
    fn test_explicit_values() {
        let args = parse(&["--date", "2025-02-14", "--actual-kwh", "7.5"]);
        assert_eq!(args.date(), NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
        assert_eq!(args.actual().unwrap(), Some(KilowattHours(7.5)));
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.date(), Local::now().date_naive());
        assert_eq!(args.actual().unwrap(), None);
    }

    #[test]
    fn test_zero_is_accepted() {
        assert_eq!(parse(&["--actual-kwh", "0"]).actual().unwrap(), Some(KilowattHours::ZERO));
    }

    #[test]
    fn test_negative_is_rejected() {
        assert!(parse(&["--actual-kwh=-1"]).actual().is_err());
    }
}
