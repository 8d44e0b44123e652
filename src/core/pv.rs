//! PV yield estimation for a building footprint.

use chrono::TimeDelta;

use crate::quantity::{
    cost::Cost,
    energy::KilowattHours,
    power_density::PowerDensity,
    rate::KilowattHourRate,
    surface_area::SurfaceArea,
};

pub const MODULE_EFFICIENCY: f64 = 0.18;
pub const INVERTER_EFFICIENCY: f64 = 0.95;

/// Project an irradiance reading onto a module surface tilted from horizontal.
#[must_use]
pub fn tilt_adjusted(irradiance: PowerDensity, tilt_degrees: f64) -> PowerDensity {
    irradiance * tilt_degrees.to_radians().cos()
}

/// Blend the live tilt-adjusted reading with the reference global horizontal
/// irradiance from the weather data.
#[must_use]
pub fn effective_irradiance(
    tilt_adjusted: PowerDensity,
    reference_ghi: PowerDensity,
) -> PowerDensity {
    (tilt_adjusted + reference_ghi) * 0.5
}

/// Energy produced by the covered footprint over the exposure time.
#[must_use]
pub fn energy_output(
    footprint: SurfaceArea,
    irradiance: PowerDensity,
    exposure: TimeDelta,
) -> KilowattHours {
    irradiance * footprint * MODULE_EFFICIENCY * INVERTER_EFFICIENCY * exposure
}

#[must_use]
pub fn cost_savings(energy: KilowattHours, rate: KilowattHourRate) -> Cost {
    energy * rate
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::quantity::Quantity;

    #[test]
    fn tilt_reduces_irradiance() {
        let flat = PowerDensity::from_watts_per_square_meter(800.0);
        assert_abs_diff_eq!(tilt_adjusted(flat, 0.0).0, 0.8);
        assert_abs_diff_eq!(tilt_adjusted(flat, 60.0).0, 0.4, epsilon = 1e-12);
    }

    #[test]
    fn one_hour_yield() {
        let energy = energy_output(
            Quantity(100.0),
            PowerDensity::from_watts_per_square_meter(800.0),
            TimeDelta::hours(1),
        );
        // 100 m² × 0.8 kW/m² × 0.18 × 0.95.
        assert_abs_diff_eq!(energy.0, 13.68, epsilon = 1e-12);
    }

    #[test]
    fn savings_at_the_rate() {
        assert_abs_diff_eq!(cost_savings(Quantity(13.68), Quantity(0.13)).0, 1.7784, epsilon = 1e-12);
    }
}
