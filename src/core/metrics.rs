use serde::Serialize;

use crate::{
    core::{
        energy::EnergySplit,
        hour::{Hour, HourSet},
        segment::{Segment, Segments},
        series::HourlySeries,
    },
    quantity::{power::Watts, ratios::Percentage, time::Hours},
};

/// Metrics of a single day/night segment.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct SegmentMetrics {
    pub n_hours: usize,
    pub peak_power: Watts,

    /// Hour of the peak, `None` for an empty segment.
    pub peak_hour: Option<Hour>,

    pub mean_power: Watts,
    pub load_factor: Percentage,
}

impl SegmentMetrics {
    fn new(series: &HourlySeries, hours: HourSet) -> Self {
        let (peak_hour, peak_power) = series
            .peak_within(hours)
            .map_or((None, Watts::ZERO), |(hour, power)| (Some(hour), power));
        let mean_power = if hours.is_empty() {
            Watts::ZERO
        } else {
            series.energy_within(hours) / Hours::from(hours.len())
        };
        Self {
            n_hours: hours.len(),
            peak_power,
            peak_hour,
            mean_power,
            load_factor: Percentage::load_factor(mean_power, peak_power),
        }
    }
}

/// Everything derived from an hourly power series and the day/night partition.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub peak_power: Watts,
    pub peak_hour: Hour,
    pub min_power: Watts,
    pub min_hour: Hour,
    pub mean_power: Watts,
    pub load_factor: Percentage,
    pub daily_energy: EnergySplit,
    pub day: SegmentMetrics,
    pub night: SegmentMetrics,
}

impl DerivedMetrics {
    pub fn new(series: &HourlySeries, segments: &Segments) -> Self {
        let daily_energy = EnergySplit {
            total: series.energy(),
            day: series.energy_within(segments.day),
            night: series.energy_within(segments.night),
        };
        let (peak_hour, peak_power) =
            series.peak_within(HourSet::ALL).unwrap_or((Hour::MIDNIGHT, Watts::ZERO));
        let (min_hour, min_power) =
            series.trough_within(HourSet::ALL).unwrap_or((Hour::MIDNIGHT, Watts::ZERO));
        let mean_power = daily_energy.total / Hours::from(Hour::N_HOURS);
        Self {
            peak_power,
            peak_hour,
            min_power,
            min_hour,
            mean_power,
            load_factor: Percentage::load_factor(mean_power, peak_power),
            daily_energy,
            day: SegmentMetrics::new(series, segments.hours(Segment::Day)),
            night: SegmentMetrics::new(series, segments.hours(Segment::Night)),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn hour(index: u8) -> Hour {
        Hour::try_from(index).unwrap()
    }

    /// 1 kW from 08:00 till 12:00, 200 W at 20:00, nothing otherwise.
    fn series() -> HourlySeries {
        HourlySeries::from_fn(|hour| match hour.index() {
            8..12 => Watts(1000.0),
            20 => Watts(200.0),
            _ => Watts::ZERO,
        })
    }

    #[test]
    fn test_overall() {
        let metrics = DerivedMetrics::new(&series(), &Segments::resolve(hour(6), hour(18)));
        assert_eq!(metrics.peak_hour, hour(8));
        assert_abs_diff_eq!(metrics.peak_power.0, 1000.0, epsilon = 1e-9);
        assert_eq!(metrics.min_hour, hour(0));
        assert_abs_diff_eq!(metrics.min_power.0, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(metrics.daily_energy.total.0, 4.2, epsilon = 1e-9);
        assert_abs_diff_eq!(metrics.mean_power.0, 4200.0 / 24.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            metrics.load_factor.0,
            4200.0 / 24.0 / 1000.0 * 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_segments() {
        let metrics = DerivedMetrics::new(&series(), &Segments::resolve(hour(6), hour(18)));

        assert_abs_diff_eq!(metrics.daily_energy.day.0, 4.0, epsilon = 1e-9);
        assert_eq!(metrics.day.n_hours, 12);
        assert_eq!(metrics.day.peak_hour, Some(hour(8)));
        assert_abs_diff_eq!(metrics.day.mean_power.0, 4000.0 / 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            metrics.day.load_factor.0,
            4000.0 / 12.0 / 1000.0 * 100.0,
            epsilon = 1e-9
        );

        assert_abs_diff_eq!(metrics.daily_energy.night.0, 0.2, epsilon = 1e-9);
        assert_eq!(metrics.night.peak_hour, Some(hour(20)));
        assert_abs_diff_eq!(metrics.night.peak_power.0, 200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(metrics.night.mean_power.0, 200.0 / 12.0, epsilon = 1e-9);

        // Each segment is compared against its own peak:
        assert_abs_diff_eq!(metrics.night.load_factor.0, 100.0 / 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_night() {
        let metrics = DerivedMetrics::new(&series(), &Segments::resolve(hour(5), hour(5)));
        assert_eq!(metrics.night.n_hours, 0);
        assert_eq!(metrics.night.peak_hour, None);
        assert_eq!(metrics.night.peak_power, Watts::ZERO);
        assert_eq!(metrics.night.mean_power, Watts::ZERO);
        assert_eq!(metrics.night.load_factor, Percentage::ZERO);
        assert_eq!(metrics.daily_energy.night, crate::quantity::energy::KilowattHours::ZERO);
        assert_eq!(metrics.day.n_hours, 24);
    }

    #[test]
    fn test_zero_series() {
        let segments = Segments::resolve(hour(6), hour(18));
        let metrics = DerivedMetrics::new(&HourlySeries::ZERO, &segments);
        assert_eq!(metrics.load_factor, Percentage::ZERO);
        assert_eq!(metrics.day.load_factor, Percentage::ZERO);
        assert_eq!(metrics.night.load_factor, Percentage::ZERO);
        assert_eq!(metrics.peak_hour, hour(0));
        assert_eq!(metrics.day.peak_hour, Some(hour(6)));
        assert_eq!(metrics.night.peak_hour, Some(hour(0)));
    }

    #[test]
    fn test_wrapped_segment_tie_takes_earliest_hour() {
        let series = HourlySeries::from_fn(|hour| match hour.index() {
            0 | 22 => Watts(500.0),
            _ => Watts(100.0),
        });
        let metrics = DerivedMetrics::new(&series, &Segments::resolve(hour(22), hour(6)));
        assert_eq!(metrics.day.peak_hour, Some(hour(0)));
        assert_eq!(metrics.peak_hour, hour(0));
    }
}
