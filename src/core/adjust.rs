use serde::Serialize;

use crate::core::{metrics::DerivedMetrics, segment::Segments, series::HourlySeries};

/// Hourly profile scaled by a seasonal multiplier, along with its metrics.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Adjusted {
    pub multiplier: f64,
    pub series: HourlySeries,
    pub metrics: DerivedMetrics,
}

pub fn adjust(base: &HourlySeries, segments: &Segments, multiplier: f64) -> Adjusted {
    let series = base.scale(multiplier);
    Adjusted { multiplier, series, metrics: DerivedMetrics::new(&series, segments) }
}
