use std::cmp::Reverse;

use itertools::Itertools;
use serde::Serialize;

use crate::{
    core::{hour::Hour, series::HourlySeries},
    quantity::power::Watts,
};

/// Point of a load duration curve: the power is met or exceeded for at least `duration_hours`.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LdcPoint {
    pub duration_hours: u8,
    pub power: Watts,

    /// Hour of the day the value originates from.
    pub hour: Hour,
}

/// Sort the hourly values in descending order, equal values keep the hour order.
pub fn build_ldc(series: &HourlySeries) -> Vec<LdcPoint> {
    series
        .iter()
        .sorted_by_key(|(_, power)| Reverse(*power))
        .zip(1..)
        .map(|((hour, power), duration_hours)| LdcPoint { duration_hours, power, hour })
        .collect()
}
