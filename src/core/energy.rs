use std::ops::Mul;

use derive_more::Add;
use serde::Serialize;

use crate::quantity::energy::KilowattHours;

/// Energy broken down into the day and night segments.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Add, Serialize)]
pub struct EnergySplit {
    pub total: KilowattHours,
    pub day: KilowattHours,
    pub night: KilowattHours,
}

impl EnergySplit {
    pub const ZERO: Self =
        Self { total: KilowattHours::ZERO, day: KilowattHours::ZERO, night: KilowattHours::ZERO };
}

impl Mul<f64> for EnergySplit {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self { total: self.total * rhs, day: self.day * rhs, night: self.night * rhs }
    }
}

/// Daily energy projected over a number of days of the reference month.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PeriodEnergy {
    pub n_days: u16,
    pub energy: EnergySplit,
}

impl PeriodEnergy {
    pub fn new(daily: EnergySplit, n_days: u16) -> Self {
        Self { n_days, energy: daily * f64::from(n_days) }
    }
}
