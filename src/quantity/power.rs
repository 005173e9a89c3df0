use std::ops::Mul;

use crate::quantity::{energy::KilowattHours, time::Hours};

quantity!(Watts, suffix: "W", precision: 0);

impl Mul<Hours> for Watts {
    type Output = KilowattHours;

    fn mul(self, hours: Hours) -> Self::Output {
        KilowattHours(self.0 * hours.0 / 1000.0)
    }
}
