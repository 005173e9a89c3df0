use std::{cmp::Reverse, ops::Index};

use serde::Serialize;

use crate::{
    core::hour::{Hour, HourSet},
    quantity::{energy::KilowattHours, power::Watts, time::Hours},
};

/// Power for each of the 24 hours of a day.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HourlySeries([Watts; Hour::N_HOURS]);

impl HourlySeries {
    pub const ZERO: Self = Self([Watts::ZERO; Hour::N_HOURS]);

    pub fn from_fn(mut f: impl FnMut(Hour) -> Watts) -> Self {
        let mut values = [Watts::ZERO; Hour::N_HOURS];
        for hour in Hour::iter() {
            values[hour.index()] = f(hour);
        }
        Self(values)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Hour, Watts)> + '_ {
        Hour::iter().map(|hour| (hour, self[hour]))
    }

    pub fn within(&self, hours: HourSet) -> impl Iterator<Item = (Hour, Watts)> + '_ {
        hours.iter().map(|hour| (hour, self[hour]))
    }

    pub fn scale(&self, multiplier: f64) -> Self {
        Self(self.0.map(|power| power * multiplier))
    }

    /// Total of the hourly values.
    pub fn total(&self) -> Watts {
        self.0.iter().copied().sum()
    }

    /// Daily energy: each value is held for one hour.
    pub fn energy(&self) -> KilowattHours {
        self.total() * Hours::ONE
    }

    pub fn energy_within(&self, hours: HourSet) -> KilowattHours {
        self.within(hours).map(|(_, power)| power).sum::<Watts>() * Hours::ONE
    }

    /// Highest value within the hours, the earliest hour wins a tie.
    #[must_use]
    pub fn peak_within(&self, hours: HourSet) -> Option<(Hour, Watts)> {
        // `min_by_key` returns the first of the equal elements, unlike `max_by_key`:
        self.within(hours).min_by_key(|(_, power)| Reverse(*power))
    }

    /// Lowest value within the hours, the earliest hour wins a tie.
    #[must_use]
    pub fn trough_within(&self, hours: HourSet) -> Option<(Hour, Watts)> {
        self.within(hours).min_by_key(|(_, power)| *power)
    }
}

impl Index<Hour> for HourlySeries {
    type Output = Watts;

    fn index(&self, hour: Hour) -> &Self::Output {
        &self.0[hour.index()]
    }
}
