mod appliance;
mod estimate;
mod housing;
mod log;
mod profile;
mod tip;

pub use self::{
    appliance::ApplianceKind,
    estimate::{DAYS_PER_MONTH, Estimate},
    housing::HousingSize,
    log::{ConsumptionLog, LogEntry, Statistics, TrendPoint},
    profile::{Profile, PropertyType},
    tip::Tip,
};

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::rate::KilowattHourRate;

    #[test]
    fn test_two_bhk_with_ac_and_refrigerator() {
        let profile = Profile::builder()
            .size(HousingSize::TwoBhk)
            .appliances(ApplianceKind::AirConditioner | ApplianceKind::Refrigerator)
            .build();
        let estimate = profile.estimate();
        assert_abs_diff_eq!(estimate.base.0, 3.6, epsilon = 1e-9);
        assert_abs_diff_eq!(estimate.appliances.0, 4.5, epsilon = 1e-9);
        assert_abs_diff_eq!(estimate.total.0, 8.1, epsilon = 1e-9);
        assert_eq!(Tip::advise(estimate.total), Tip::Moderate);
        assert_abs_diff_eq!(estimate.monthly_cost(KilowattHourRate(5.0)).0, 1215.0, epsilon = 1e-6);
    }
}
