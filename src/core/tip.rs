use std::fmt::{Display, Formatter};

use comfy_table::Color;

use crate::quantity::energy::KilowattHours;

/// Above this daily total the consumption is considered high.
const HIGH_THRESHOLD: KilowattHours = KilowattHours(10.0);

/// Above this daily total the consumption is considered moderate.
const MODERATE_THRESHOLD: KilowattHours = KilowattHours(6.0);

/// Energy-saving advice for an estimated daily total.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Tip {
    High,
    Moderate,
    Good,
}

impl Tip {
    pub fn advise(total: KilowattHours) -> Self {
        if total > HIGH_THRESHOLD {
            Self::High
        } else if total > MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Good
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::High => {
                "High consumption! Consider using AC efficiently, LED bulbs, and unplugging unused devices."
            }
            Self::Moderate => {
                "Moderate consumption. Try using natural light during day and optimize appliance usage."
            }
            Self::Good => "Great! You're using energy efficiently. Keep up the good work!",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::High => Color::Red,
            Self::Moderate => Color::DarkYellow,
            Self::Good => Color::Green,
        }
    }
}

impl Display for Tip {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
