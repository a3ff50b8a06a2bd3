use std::fmt::{Display, Formatter};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::quantity::energy::KilowattHours;

/// Lighting load per room, kWh per day.
const LIGHTING_PER_ROOM: f64 = 0.4;

/// Fans and small fixtures per room, kWh per day.
const FIXTURES_PER_ROOM: f64 = 0.8;

/// Housing size in the «bedroom-hall-kitchen» notation.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum HousingSize {
    #[value(name = "1bhk")]
    #[serde(rename = "1bhk")]
    OneBhk,

    #[value(name = "2bhk")]
    #[serde(rename = "2bhk")]
    TwoBhk,

    #[value(name = "3bhk")]
    #[serde(rename = "3bhk")]
    ThreeBhk,

    #[value(name = "4bhk")]
    #[serde(rename = "4bhk")]
    FourBhk,

    /// Anything outside the known sizes, contributes no base load.
    #[value(skip)]
    #[serde(rename = "unknown")]
    Unknown,
}

impl HousingSize {
    /// Parse a label case-insensitively, falling back to [`HousingSize::Unknown`].
    pub fn from_label(label: &str) -> Self {
        <Self as ValueEnum>::from_str(label.trim(), true).unwrap_or(Self::Unknown)
    }

    /// Number of rooms the base load is derived from.
    pub const fn n_rooms(self) -> Option<u8> {
        match self {
            Self::OneBhk => Some(2),
            Self::TwoBhk => Some(3),
            Self::ThreeBhk => Some(4),
            Self::FourBhk => Some(5),
            Self::Unknown => None,
        }
    }

    /// Daily base consumption of the housing itself, without appliances.
    pub fn base_energy(self) -> KilowattHours {
        self.n_rooms().map_or(KilowattHours::ZERO, |n_rooms| {
            let n_rooms = f64::from(n_rooms);
            KilowattHours(n_rooms * LIGHTING_PER_ROOM + n_rooms * FIXTURES_PER_ROOM)
        })
    }
}

impl From<String> for HousingSize {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl Display for HousingSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OneBhk => write!(f, "1BHK"),
            Self::TwoBhk => write!(f, "2BHK"),
            Self::ThreeBhk => write!(f, "3BHK"),
            Self::FourBhk => write!(f, "4BHK"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
