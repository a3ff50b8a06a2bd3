use std::fmt::{Debug, Display, Formatter};

quantity!(
    /// Amount of money in the currency of the configured [rate][1].
    ///
    /// [1]: crate::quantity::rate::KilowattHourRate
    Cost
);

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
