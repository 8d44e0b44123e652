use std::{
    fmt::{Display, Formatter},
    ops::Mul,
};

use crate::quantity::{Quantity, power::Kilowatts, surface_area::SurfaceArea};

/// [Surface power density][1] measured in **kilowatts per square meter**.
///
/// [1]: https://en.wikipedia.org/wiki/Surface_power_density
pub type PowerDensity = Quantity<f64, 1, -2, 0, 0>;

impl PowerDensity {
    /// Sensors report irradiance in watts per square meter.
    pub const fn from_watts_per_square_meter(watts: f64) -> Self {
        Self(watts * 0.001)
    }
}

impl Display for PowerDensity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0} W/m²", self.0 * 1000.0)
    }
}

impl Mul<SurfaceArea> for PowerDensity {
    type Output = Kilowatts;

    fn mul(self, rhs: SurfaceArea) -> Self::Output {
        Quantity(self.0 * rhs.0)
    }
}
