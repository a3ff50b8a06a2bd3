use std::ops::Mul;

use crate::quantity::{cost::Cost, rate::KilowattHourRate};

quantity!(
    /// Energy in kilowatt-hours.
    KilowattHours, suffix: "kWh"
);

impl Mul<KilowattHourRate> for KilowattHours {
    type Output = Cost;

    fn mul(self, rhs: KilowattHourRate) -> Self::Output {
        Cost(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_display_respects_precision() {
        assert_eq!(format!("{:.1}", KilowattHours(8.1)), "8.1 kWh");
        assert_eq!(format!("{:.1}", KilowattHours(2.4)), "2.4 kWh");
    }

    #[test]
    fn test_parse() {
        assert_abs_diff_eq!("7.5".parse::<KilowattHours>().unwrap().0, 7.5);
        assert!("seven".parse::<KilowattHours>().is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(KilowattHours(6.0) > KilowattHours(4.0));
        assert_eq!(KilowattHours(4.0).max(KilowattHours(6.0)), KilowattHours(6.0));
    }

    #[test]
    fn test_mul_rate() {
        assert_abs_diff_eq!((KilowattHours(2.0) * KilowattHourRate(5.0)).0, 10.0);
    }
}
