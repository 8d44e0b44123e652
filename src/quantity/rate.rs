use std::fmt::{Display, Formatter};

use crate::quantity::Quantity;

pub type KilowattHourRate = Quantity<f64, -1, 0, -1, 1>;

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}/kWh", self.0)
    }
}
