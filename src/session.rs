use std::{fs, io::ErrorKind, path::Path};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    core::{ConsumptionLog, Estimate, LogEntry, Profile},
    prelude::*,
    quantity::energy::KilowattHours,
};

/// State of one user: the saved profile and the consumption log.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile: Option<Profile>,

    #[serde(default)]
    log: ConsumptionLog,
}

impl Session {
    pub const fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub const fn log(&self) -> &ConsumptionLog {
        &self.log
    }

    /// Replace the profile as a whole.
    pub fn save_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    pub fn estimate(&self) -> Option<Estimate> {
        self.profile.as_ref().map(Profile::estimate)
    }

    /// Log the actual consumption against the current estimate.
    ///
    /// Without `actual`, the estimated total is logged as the actual value.
    /// Returns [`None`] when no profile has been saved yet.
    pub fn log_actual(
        &mut self,
        date: NaiveDate,
        actual: Option<KilowattHours>,
    ) -> Option<LogEntry> {
        let estimated = self.estimate()?.total;
        Some(self.log.add_entry(date, estimated, actual.unwrap_or(estimated)))
    }

    /// Load the session, a missing file means a fresh session.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let session: Self = toml::from_str(&contents)
                    .with_context(|| format!("failed to parse `{}`", path.display()))?;
                debug!(
                    has_profile = session.profile.is_some(),
                    n_entries = session.log.len(),
                    "loaded",
                );
                Ok(session)
            }
            Err(error) if error.kind() == ErrorKind::NotFound => {
                info!("no session file yet, starting afresh");
                Ok(Self::default())
            }
            Err(error) => {
                Err(error).with_context(|| format!("failed to read `{}`", path.display()))
            }
        }
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn save(&self, path: &Path) -> Result {
        let contents = toml::to_string_pretty(self).context("failed to serialize the session")?;
        fs::write(path, contents).with_context(|| format!("failed to write `{}`", path.display()))?;
        debug!(n_entries = self.log.len(), "saved");
        Ok(())
    }
}
