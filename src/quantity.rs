pub mod cost;
pub mod energy;
pub mod power;
pub mod power_density;
pub mod rate;
pub mod surface_area;

use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// A dimensioned scalar: the const parameters carry the exponents of power,
/// area, time and cost.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct Quantity<T, const POWER: isize, const AREA: isize, const TIME: isize, const COST: isize>(
    pub T,
);

impl<T, const POWER: isize, const AREA: isize, const TIME: isize, const COST: isize>
    Quantity<T, POWER, AREA, TIME, COST>
where
    Self: PartialOrd,
{
    pub fn min(mut self, rhs: Self) -> Self {
        if rhs < self {
            self = rhs;
        }
        self
    }

    pub fn max(mut self, rhs: Self) -> Self {
        if rhs > self {
            self = rhs;
        }
        self
    }
}

impl<const POWER: isize, const AREA: isize, const TIME: isize, const COST: isize>
    Quantity<f64, POWER, AREA, TIME, COST>
{
    pub const ZERO: Self = Self(0.0);
}

impl<T, const POWER: isize, const AREA: isize, const TIME: isize, const COST: isize> Mul<T>
    for Quantity<T, POWER, AREA, TIME, COST>
where
    T: Mul<T>,
{
    type Output = Quantity<T::Output, POWER, AREA, TIME, COST>;

    fn mul(self, rhs: T) -> Self::Output {
        Quantity(self.0 * rhs)
    }
}

impl<T, const POWER: isize, const AREA: isize, const TIME: isize, const COST: isize> Div<T>
    for Quantity<T, POWER, AREA, TIME, COST>
where
    T: Div<T>,
{
    type Output = Quantity<T::Output, POWER, AREA, TIME, COST>;

    fn div(self, rhs: T) -> Self::Output {
        Quantity(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Bare = Quantity<f64, 0, 0, 0, 0>;

    #[test]
    fn test_min() {
        assert_eq!(Bare::from(1.0).min(Bare::from(2.0)), Bare::from(1.0));
        assert_eq!(Bare::from(2.0).min(Bare::from(1.0)), Bare::from(1.0));
    }

    #[test]
    fn test_max() {
        assert_eq!(Bare::from(1.0).max(Bare::from(2.0)), Bare::from(2.0));
        assert_eq!(Bare::from(2.0).max(Bare::from(1.0)), Bare::from(2.0));
    }
}
