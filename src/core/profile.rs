use std::fmt::{Display, Formatter};

use bon::Builder;
use clap::ValueEnum;
use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::{
    core::{ApplianceKind, Estimate, HousingSize},
    quantity::energy::KilowattHours,
};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    #[default]
    Flat,

    IndependentHouse,

    Tenement,
}

impl Display for PropertyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flat => write!(f, "Flat"),
            Self::IndependentHouse => write!(f, "Independent House"),
            Self::Tenement => write!(f, "Tenement"),
        }
    }
}

/// User profile saved once per session.
///
/// Only the housing size and the appliances affect the estimate,
/// the rest is informational.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct Profile {
    #[builder(default)]
    #[serde(default)]
    pub name: String,

    #[builder(default = 25)]
    #[serde(default = "default_age")]
    pub age: u8,

    #[builder(default)]
    #[serde(default)]
    pub city: String,

    #[builder(default)]
    #[serde(default)]
    pub area: String,

    #[builder(default)]
    #[serde(default)]
    pub property_type: PropertyType,

    pub size: HousingSize,

    #[builder(default)]
    #[serde(default)]
    pub appliances: EnumSet<ApplianceKind>,
}

const fn default_age() -> u8 {
    25
}

impl Profile {
    pub fn estimate(&self) -> Estimate {
        Estimate::new(self.size, self.appliances)
    }

    /// Consumption of each selected appliance, in the declaration order.
    pub fn appliance_breakdown(&self) -> Vec<(ApplianceKind, KilowattHours)> {
        self.appliances.iter().map(|kind| (kind, kind.daily_energy())).collect()
    }
}
