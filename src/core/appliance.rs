use std::fmt::{Display, Formatter};

use clap::ValueEnum;
use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

use crate::quantity::energy::KilowattHours;

/// Household appliance with a fixed typical daily consumption.
#[derive(Debug, ValueEnum, EnumSetType, Serialize, Deserialize)]
#[enumset(serialize_repr = "list")]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum ApplianceKind {
    #[value(name = "ac")]
    #[serde(rename = "ac")]
    AirConditioner,

    Refrigerator,

    WashingMachine,

    Dishwasher,

    WaterHeater,

    Microwave,

    Tv,

    Laptop,

    /// Unrecognized appliance, does not contribute to the estimate.
    #[value(skip)]
    Unknown,
}

impl ApplianceKind {
    /// Parse a label case-insensitively, falling back to [`ApplianceKind::Unknown`].
    pub fn from_label(label: &str) -> Self {
        <Self as ValueEnum>::from_str(label.trim(), true).unwrap_or(Self::Unknown)
    }

    /// Typical daily consumption of the appliance.
    pub const fn daily_energy(self) -> KilowattHours {
        match self {
            Self::AirConditioner => KilowattHours(3.0),
            Self::Refrigerator => KilowattHours(1.5),
            Self::WashingMachine => KilowattHours(2.0),
            Self::Dishwasher => KilowattHours(1.8),
            Self::WaterHeater => KilowattHours(2.5),
            Self::Microwave => KilowattHours(1.2),
            Self::Tv => KilowattHours(0.5),
            Self::Laptop => KilowattHours(0.3),
            Self::Unknown => KilowattHours::ZERO,
        }
    }
}

impl From<String> for ApplianceKind {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl Display for ApplianceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AirConditioner => write!(f, "AC"),
            Self::Refrigerator => write!(f, "Refrigerator"),
            Self::WashingMachine => write!(f, "Washing Machine"),
            Self::Dishwasher => write!(f, "Dishwasher"),
            Self::WaterHeater => write!(f, "Water Heater"),
            Self::Microwave => write!(f, "Microwave"),
            Self::Tv => write!(f, "TV"),
            Self::Laptop => write!(f, "Laptop"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use enumset::EnumSet;

    use super::*;

    #[test]
    fn test_daily_energy() {
        let expected = [
            (ApplianceKind::AirConditioner, 3.0),
            (ApplianceKind::Refrigerator, 1.5),
            (ApplianceKind::WashingMachine, 2.0),
            (ApplianceKind::Dishwasher, 1.8),
            (ApplianceKind::WaterHeater, 2.5),
            (ApplianceKind::Microwave, 1.2),
            (ApplianceKind::Tv, 0.5),
            (ApplianceKind::Laptop, 0.3),
        ];
        for (kind, kilowatt_hours) in expected {
            assert_abs_diff_eq!(kind.daily_energy().0, kilowatt_hours);
        }
        assert_eq!(ApplianceKind::Unknown.daily_energy(), KilowattHours::ZERO);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(ApplianceKind::from_label("AC"), ApplianceKind::AirConditioner);
        assert_eq!(ApplianceKind::from_label("washing-machine"), ApplianceKind::WashingMachine);
        assert_eq!(ApplianceKind::from_label("toaster"), ApplianceKind::Unknown);
    }

    #[test]
    fn test_set_deserializes_from_labels() {
        #[derive(Deserialize)]
        struct Holder {
            appliances: EnumSet<ApplianceKind>,
        }

        let holder: Holder =
            toml::from_str(r#"appliances = ["ac", "tv", "toaster", "ac"]"#).unwrap();
        assert_eq!(
            holder.appliances,
            ApplianceKind::AirConditioner | ApplianceKind::Tv | ApplianceKind::Unknown,
        );
    }
}
