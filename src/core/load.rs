use serde::Serialize;

use crate::{
    core::hour::{Hour, HourSet},
    quantity::power::Watts,
};

/// Validated electrical load.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Load {
    pub name: String,
    pub rated_power: Watts,

    /// Hours when the load is on.
    pub activity: HourSet,
}

impl Load {
    pub fn power_at(&self, hour: Hour) -> Watts {
        if self.activity.contains(hour) { self.rated_power } else { Watts::ZERO }
    }
}
