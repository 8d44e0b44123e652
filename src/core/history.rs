use std::collections::VecDeque;

use crate::{core::sample::Sample, quantity::energy::KilowattHours};

/// Bounded insertion-ordered window of the most recently accepted samples,
/// oldest evicted first.
pub struct History {
    samples: VecDeque<Sample>,
    capacity: usize,
}

impl History {
    /// # Panics
    ///
    /// Panics on zero capacity: an empty window cannot hold a current reading.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity != 0, "the history must hold at least one sample");
        Self { samples: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, sample: Sample) {
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Highest energy output in the window, if any.
    pub fn max_energy(&self) -> Option<KilowattHours> {
        self.samples.iter().map(|sample| sample.energy_output).reduce(KilowattHours::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantity::Quantity;

    fn sample(time_label: &str, energy_output: f64) -> Sample {
        Sample {
            time_label: time_label.to_string(),
            energy_output: Quantity(energy_output),
            cost_savings: Quantity(10.0),
        }
    }

    #[test]
    fn evicts_oldest_first() {
        let mut history = History::with_capacity(5);
        for index in 0..6_u32 {
            history.push(sample(&format!("14:32:{index:02}"), 51_000.0 + f64::from(index)));
        }
        assert_eq!(history.len(), 5);
        let time_labels: Vec<&str> =
            history.iter().map(|sample| sample.time_label.as_str()).collect();
        assert_eq!(time_labels, ["14:32:01", "14:32:02", "14:32:03", "14:32:04", "14:32:05"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut history = History::with_capacity(5);
        history.push(sample("14:32:10", 52_000.5));
        history.push(sample("14:32:10", 52_000.5));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn max_energy_over_window() {
        let mut history = History::with_capacity(5);
        assert_eq!(history.max_energy(), None);
        history.push(sample("14:32:10", 52_000.5));
        history.push(sample("14:32:12", 57_500.0));
        history.push(sample("14:32:14", 53_000.0));
        assert_eq!(history.max_energy(), Some(Quantity(57_500.0)));
    }

    #[test]
    #[should_panic(expected = "at least one sample")]
    fn zero_capacity_panics() {
        let _ = History::with_capacity(0);
    }
}
