use chrono::TimeDelta;
use clap::Parser;

use crate::{
    core::pv,
    prelude::*,
    quantity::{
        power_density::PowerDensity,
        rate::KilowattHourRate,
        surface_area::SurfaceArea,
    },
};

#[derive(Parser)]
pub struct EstimateArgs {
    /// Live irradiance reading in watts per square meter.
    #[clap(long = "irradiance-w-m2", env = "IRRADIANCE_W_M2")]
    irradiance_watts: f64,

    /// Reference global horizontal irradiance in watts per square meter.
    #[clap(long = "reference-ghi-w-m2", env = "REFERENCE_GHI_W_M2")]
    reference_ghi_watts: f64,

    /// Building footprint available for PV modules, in square meters.
    #[clap(long = "footprint-m2", env = "FOOTPRINT_M2")]
    footprint: SurfaceArea,

    /// Module tilt in degrees from horizontal.
    #[clap(long, env = "TILT_DEGREES", default_value = "0")]
    tilt_degrees: f64,

    /// Electricity rate per kilowatt-hour.
    #[clap(long, env = "ELECTRICITY_RATE", default_value = "0.13")]
    electricity_rate: KilowattHourRate,

    /// Exposure time in hours.
    #[clap(long, default_value = "1")]
    exposure_hours: i64,
}

impl EstimateArgs {
    pub fn run(self) -> Result {
        let live = PowerDensity::from_watts_per_square_meter(self.irradiance_watts);
        let reference = PowerDensity::from_watts_per_square_meter(self.reference_ghi_watts);
        let effective =
            pv::effective_irradiance(pv::tilt_adjusted(live, self.tilt_degrees), reference);
        let energy_output =
            pv::energy_output(self.footprint, effective, TimeDelta::hours(self.exposure_hours));
        let cost_savings = pv::cost_savings(energy_output, self.electricity_rate);
        info!(%effective, "effective irradiance");
        info!(%energy_output, %cost_savings, "estimated");
        Ok(())
    }
}
