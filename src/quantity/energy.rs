use std::ops::Div;

use crate::quantity::{power::Watts, time::Hours};

quantity!(KilowattHours, suffix: "kWh", precision: 2);

impl Div<Hours> for KilowattHours {
    type Output = Watts;

    fn div(self, hours: Hours) -> Self::Output {
        Watts(self.0 * 1000.0 / hours.0)
    }
}
