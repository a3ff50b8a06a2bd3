use enumset::EnumSet;

use crate::{
    core::{ApplianceKind, HousingSize},
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
};

/// Billing period used for the monthly cost projection.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Estimated daily consumption of a household.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Estimate {
    /// Base load of the housing: lighting and fixtures.
    pub base: KilowattHours,

    /// Sum over the selected appliances, each counted once.
    pub appliances: KilowattHours,

    pub total: KilowattHours,
}

impl Estimate {
    pub fn new(size: HousingSize, appliances: impl IntoIterator<Item = ApplianceKind>) -> Self {
        let base = size.base_energy();
        let appliances: KilowattHours = appliances
            .into_iter()
            .collect::<EnumSet<_>>()
            .iter()
            .map(ApplianceKind::daily_energy)
            .sum();
        Self { base, appliances, total: base + appliances }
    }

    /// Project the daily total onto a month at the given rate.
    pub fn monthly_cost(self, rate: KilowattHourRate) -> Cost {
        self.total * rate * DAYS_PER_MONTH
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_empty_appliances() {
        let estimate = Estimate::new(HousingSize::FourBhk, EnumSet::empty());
        assert_eq!(estimate.appliances, KilowattHours::ZERO);
        assert_abs_diff_eq!(estimate.total.0, 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_additive() {
        let estimate = Estimate::new(
            HousingSize::ThreeBhk,
            [ApplianceKind::Dishwasher, ApplianceKind::WaterHeater],
        );
        let expected = HousingSize::ThreeBhk.base_energy().0
            + ApplianceKind::Dishwasher.daily_energy().0
            + ApplianceKind::WaterHeater.daily_energy().0;
        assert_abs_diff_eq!(estimate.total.0, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_order_independent() {
        let forward =
            Estimate::new(HousingSize::OneBhk, [ApplianceKind::Tv, ApplianceKind::Laptop]);
        let backward =
            Estimate::new(HousingSize::OneBhk, [ApplianceKind::Laptop, ApplianceKind::Tv]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_duplicates_counted_once() {
        let estimate = Estimate::new(
            HousingSize::OneBhk,
            [ApplianceKind::AirConditioner, ApplianceKind::AirConditioner, ApplianceKind::Tv],
        );
        assert_abs_diff_eq!(estimate.appliances.0, 3.5, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_inputs_degrade_to_zero() {
        let estimate = Estimate::new(HousingSize::Unknown, [ApplianceKind::Unknown]);
        assert_eq!(estimate.total, KilowattHours::ZERO);

        let estimate = Estimate::new(
            HousingSize::from_label("studio"),
            [ApplianceKind::from_label("toaster"), ApplianceKind::Refrigerator],
        );
        assert_abs_diff_eq!(estimate.total.0, 1.5);
    }

    #[test]
    fn test_monthly_cost() {
        let estimate = Estimate::new(HousingSize::TwoBhk, [ApplianceKind::Refrigerator]);
        assert_abs_diff_eq!(
            estimate.monthly_cost(KilowattHourRate(5.0)).0,
            5.1 * 30.0 * 5.0,
            epsilon = 1e-9,
        );
        assert_eq!(estimate.monthly_cost(KilowattHourRate::ZERO), Cost::ZERO);
    }
}
