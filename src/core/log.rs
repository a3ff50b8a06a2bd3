use average::Mean;
use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::quantity::energy::KilowattHours;

/// Daily record of estimated versus measured consumption.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: NaiveDate,
    pub estimated: KilowattHours,
    pub actual: KilowattHours,

    /// Actual minus estimated, positive when the household used more than expected.
    pub difference: KilowattHours,
}

impl LogEntry {
    pub fn new(date: NaiveDate, estimated: KilowattHours, actual: KilowattHours) -> Self {
        Self { date, estimated, actual, difference: actual - estimated }
    }
}

/// Summary over the actual consumption of the logged days.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Statistics {
    pub mean: KilowattHours,
    pub max: KilowattHours,
    pub min: KilowattHours,
}

/// Point of the estimated-versus-actual trend.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub estimated: KilowattHours,
    pub actual: KilowattHours,
}

/// Append-only consumption log, in insertion order.
///
/// Entries for the same date are allowed and kept separately.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsumptionLog(Vec<LogEntry>);

impl ConsumptionLog {
    /// Statistics need at least this many entries.
    pub const MIN_STATISTICS_ENTRIES: usize = 2;

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn add_entry(
        &mut self,
        date: NaiveDate,
        estimated: KilowattHours,
        actual: KilowattHours,
    ) -> LogEntry {
        let entry = LogEntry::new(date, estimated, actual);
        self.0.push(entry);
        entry
    }

    /// The last `n` entries by insertion, latest date first.
    ///
    /// Entries with the same date stay in the insertion order.
    pub fn recent_entries(&self, n: usize) -> Vec<LogEntry> {
        let start = self.0.len().saturating_sub(n);
        self.0[start..].iter().copied().sorted_by(|lhs, rhs| rhs.date.cmp(&lhs.date)).collect()
    }

    /// Mean, maximum and minimum of the actual consumption.
    ///
    /// Returns [`None`] until the log has [`Self::MIN_STATISTICS_ENTRIES`] entries.
    pub fn statistics(&self) -> Option<Statistics> {
        if self.0.len() < Self::MIN_STATISTICS_ENTRIES {
            return None;
        }
        let mean: Mean = self.0.iter().map(|entry| entry.actual.0).collect();
        Some(Statistics {
            mean: KilowattHours(mean.mean()),
            max: self.0.iter().map(|entry| entry.actual).max()?,
            min: self.0.iter().map(|entry| entry.actual).min()?,
        })
    }

    /// Estimated and actual consumption in the chronological order.
    pub fn trend(&self) -> Vec<TrendPoint> {
        self.0
            .iter()
            .map(|entry| TrendPoint {
                date: entry.date,
                estimated: entry.estimated,
                actual: entry.actual,
            })
            .sorted_by_key(|point| point.date)
            .collect()
    }
}
