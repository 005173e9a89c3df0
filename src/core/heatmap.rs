use serde::Serialize;

use crate::{
    core::{calendar::Month, load::Load, multipliers::Multipliers, series::HourlySeries},
    quantity::power::Watts,
};

/// Power of each individual load by hour.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LoadHeatmap {
    pub rows: Vec<LoadHeatmapRow>,
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoadHeatmapRow {
    pub name: String,
    pub series: HourlySeries,
}

impl LoadHeatmap {
    pub fn from_loads(loads: &[Load]) -> Self {
        let rows = loads
            .iter()
            .map(|load| LoadHeatmapRow {
                name: load.name.clone(),
                series: HourlySeries::from_fn(|hour| load.power_at(hour)),
            })
            .collect();
        Self { rows }
    }

    pub fn max_power(&self) -> Watts {
        self.rows
            .iter()
            .flat_map(|row| row.series.iter())
            .map(|(_, power)| power)
            .max()
            .unwrap_or_default()
    }
}

/// Base hourly profile scaled by each month's multiplier.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MonthlyHeatmap {
    pub rows: Vec<MonthlyHeatmapRow>,
}

#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct MonthlyHeatmapRow {
    pub month: Month,
    pub series: HourlySeries,
}

impl MonthlyHeatmap {
    pub fn project(base: &HourlySeries, multipliers: &Multipliers) -> Self {
        let rows = multipliers
            .iter()
            .map(|(month, multiplier)| MonthlyHeatmapRow { month, series: base.scale(multiplier) })
            .collect();
        Self { rows }
    }

    pub fn max_power(&self) -> Watts {
        self.rows
            .iter()
            .flat_map(|row| row.series.iter())
            .map(|(_, power)| power)
            .max()
            .unwrap_or_default()
    }
}
