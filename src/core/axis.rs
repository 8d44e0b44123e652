use crate::{
    core::history::History,
    quantity::{Quantity, energy::KilowattHours},
};

/// Energy axis of the recent-readings chart: starts at the acceptance
/// threshold and ends at the highest reading in the window plus a fixed
/// headroom margin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyAxis {
    pub start: KilowattHours,
    pub end: KilowattHours,
}

impl EnergyAxis {
    pub const MARGIN: KilowattHours = Quantity(10_000.0);

    #[must_use]
    pub fn fit(threshold: KilowattHours, history: &History) -> Self {
        let peak = history.max_energy().unwrap_or(threshold).max(threshold);
        Self { start: threshold, end: peak + Self::MARGIN }
    }

    /// Relative position of a reading on the axis, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn position(&self, energy: KilowattHours) -> f64 {
        ((energy - self.start).0 / (self.end - self.start).0).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample::Sample;

    const THRESHOLD: KilowattHours = Quantity(50_000.0);

    #[test]
    fn empty_history_spans_just_the_margin() {
        let axis = EnergyAxis::fit(THRESHOLD, &History::with_capacity(5));
        assert_eq!(axis.start, Quantity(50_000.0));
        assert_eq!(axis.end, Quantity(60_000.0));
    }

    #[test]
    fn end_tracks_the_peak_reading() {
        let mut history = History::with_capacity(5);
        history.push(Sample {
            time_label: "14:32:10".to_string(),
            energy_output: Quantity(52_000.5),
            cost_savings: Quantity(18.75),
        });
        history.push(Sample {
            time_label: "14:32:12".to_string(),
            energy_output: Quantity(57_500.0),
            cost_savings: Quantity(20.0),
        });
        let axis = EnergyAxis::fit(THRESHOLD, &history);
        assert_eq!(axis.start, Quantity(50_000.0));
        assert_eq!(axis.end, Quantity(67_500.0));
    }

    #[test]
    fn position_is_clamped() {
        let axis = EnergyAxis { start: Quantity(50_000.0), end: Quantity(60_000.0) };
        assert!((axis.position(Quantity(55_000.0)) - 0.5).abs() < f64::EPSILON);
        assert!((axis.position(Quantity(45_000.0)) - 0.0).abs() < f64::EPSILON);
        assert!((axis.position(Quantity(65_000.0)) - 1.0).abs() < f64::EPSILON);
    }
}
