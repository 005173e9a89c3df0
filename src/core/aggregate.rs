use crate::{
    core::{load::Load, series::HourlySeries},
    quantity::power::Watts,
};

/// Sum up the rated power of the loads which are on at each hour.
pub fn aggregate_hourly(loads: &[Load]) -> HourlySeries {
    HourlySeries::from_fn(|hour| loads.iter().map(|load| load.power_at(hour)).sum::<Watts>())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::hour::{Hour, HourSet};

    fn load(name: &str, rated_power: f64, hours: &[u8]) -> Load {
        Load {
            name: name.to_string(),
            rated_power: Watts(rated_power),
            activity: hours.iter().map(|hour| Hour::try_from(*hour).unwrap()).collect(),
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(aggregate_hourly(&[]), HourlySeries::ZERO);
    }

    #[test]
    fn test_single_load() {
        let series = aggregate_hourly(&[load("Pump", 100.0, &[0, 1, 2])]);
        for (hour, power) in series.iter() {
            let expected = if hour.index() <= 2 { 100.0 } else { 0.0 };
            assert_abs_diff_eq!(power.0, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_overlapping_loads() {
        let loads = [load("Fridge", 150.0, &[0, 12]), load("Lights", 60.5, &[12, 23])];
        let series = aggregate_hourly(&loads);
        let at = |hour: u8| series[Hour::try_from(hour).unwrap()].0;
        assert_abs_diff_eq!(at(0), 150.0, epsilon = 1e-9);
        assert_abs_diff_eq!(at(12), 210.5, epsilon = 1e-9);
        assert_abs_diff_eq!(at(23), 60.5, epsilon = 1e-9);
        assert_abs_diff_eq!(series.total().0, 150.0 * 2.0 + 60.5 * 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_always_on() {
        let always_on = Load {
            name: "Router".to_string(),
            rated_power: Watts(10.0),
            activity: HourSet::ALL,
        };
        assert_abs_diff_eq!(aggregate_hourly(&[always_on]).energy().0, 0.24, epsilon = 1e-9);
    }
}
