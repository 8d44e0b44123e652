use std::str::FromStr;

use serde::Serialize;

use crate::quantity::{Quantity, cost::Cost, energy::KilowattHours};

/// One accepted feed reading. Immutable once parsed; re-delivering the same
/// line yields an equal but separate sample (the window does not deduplicate).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sample {
    pub time_label: String,
    pub energy_output: KilowattHours,
    pub cost_savings: Cost,
}

impl Sample {
    #[must_use]
    pub fn exceeds(&self, threshold: KilowattHours) -> bool {
        self.energy_output > threshold
    }
}

impl FromStr for Sample {
    type Err = Rejection;

    /// Parse a `<time>,<energy>,<cost>` feed line.
    ///
    /// Each field is trimmed first: the feed is known to pad fields with
    /// spaces, and the body usually ends with a newline.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(',').collect();
        let &[time_label, energy_output, cost_savings] = fields.as_slice() else {
            return Err(Rejection::FieldCount(fields.len()));
        };
        let energy_output = energy_output.trim();
        let energy_output = energy_output
            .parse()
            .map_err(|_| Rejection::EnergyNotNumeric(energy_output.to_owned()))?;
        let cost_savings = cost_savings.trim();
        let cost_savings = cost_savings
            .parse()
            .map_err(|_| Rejection::CostNotNumeric(cost_savings.to_owned()))?;
        Ok(Self {
            time_label: time_label.trim().to_owned(),
            energy_output: Quantity(energy_output),
            cost_savings: Quantity(cost_savings),
        })
    }
}

/// Why a feed line was not turned into a [`Sample`].
#[derive(Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Rejection {
    #[display("expected 3 comma-separated fields, got {_0}")]
    FieldCount(usize),

    #[display("energy output is not numeric: `{_0}`")]
    EnergyNotNumeric(String),

    #[display("cost savings is not numeric: `{_0}`")]
    CostNotNumeric(String),
}

impl std::error::Error for Rejection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_line_ok() -> Result<(), Rejection> {
        let sample: Sample = "14:32:10, 52000.5, 18.75".parse()?;
        assert_eq!(sample.time_label, "14:32:10");
        assert_eq!(sample.energy_output, Quantity(52000.5));
        assert_eq!(sample.cost_savings, Quantity(18.75));
        Ok(())
    }

    #[test]
    fn trailing_newline_ok() -> Result<(), Rejection> {
        let sample: Sample = "14:32:10,52000.5,18.75\n".parse()?;
        assert_eq!(sample.cost_savings, Quantity(18.75));
        Ok(())
    }

    #[test]
    fn too_few_fields_rejected() {
        assert_eq!("bad,line".parse::<Sample>(), Err(Rejection::FieldCount(2)));
    }

    #[test]
    fn too_many_fields_rejected() {
        assert_eq!(
            "14:32:10,52000.5,18.75,extra".parse::<Sample>(),
            Err(Rejection::FieldCount(4)),
        );
    }

    #[test]
    fn non_numeric_energy_rejected() {
        assert_eq!(
            "14:32:10,lots,18.75".parse::<Sample>(),
            Err(Rejection::EnergyNotNumeric("lots".to_string())),
        );
    }

    #[test]
    fn non_numeric_cost_rejected() {
        assert_eq!(
            "14:32:10,52000.5,$18.75".parse::<Sample>(),
            Err(Rejection::CostNotNumeric("$18.75".to_string())),
        );
    }

    #[test]
    fn threshold_is_strict() -> Result<(), Rejection> {
        let threshold = Quantity(50000.0);
        assert!(!"14:33:00,49999,10.0".parse::<Sample>()?.exceeds(threshold));
        assert!(!"14:33:00,50000,10.0".parse::<Sample>()?.exceeds(threshold));
        assert!("14:33:02,50000.1,10.0".parse::<Sample>()?.exceeds(threshold));
        Ok(())
    }
}
