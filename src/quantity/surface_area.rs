use std::fmt::{Display, Formatter};

use crate::quantity::Quantity;

pub type SurfaceArea = Quantity<f64, 0, 1, 0, 0>;

impl Display for SurfaceArea {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} m²", self.0)
    }
}
