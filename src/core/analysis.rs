use bon::Builder;
use serde::Serialize;

use crate::{
    core::{
        adjust::{Adjusted, adjust},
        aggregate::aggregate_hourly,
        annual::AnnualProjection,
        calendar::Month,
        energy::PeriodEnergy,
        heatmap::{LoadHeatmap, MonthlyHeatmap},
        hour::Hour,
        ldc::{LdcPoint, build_ldc},
        load::Load,
        multipliers::Multipliers,
        segment::Segments,
    },
    prelude::*,
};

/// Analysis parameters, owned by the caller and passed in full on every run.
#[must_use]
#[derive(Builder, Clone, Debug, PartialEq)]
pub struct AnalysisConfig {
    #[builder(default = Hour::DEFAULT_DAY_START)]
    pub day_start: Hour,

    #[builder(default = Hour::DEFAULT_DAY_END)]
    pub day_end: Hour,

    #[builder(default = Month::January)]
    pub reference_month: Month,

    /// Number of days of the reference month to project the energy over,
    /// the whole month by default.
    pub days_to_consider: Option<u16>,

    #[builder(default)]
    pub multipliers: Multipliers,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AnalysisConfig {
    pub fn try_days_to_consider(&self) -> Result<u16> {
        let n_days = self.reference_month.n_days();
        let days_to_consider = self.days_to_consider.unwrap_or(n_days);
        ensure!(
            (1..=n_days).contains(&days_to_consider),
            "days to consider must be within 1..={n_days} for {}, got {days_to_consider}",
            self.reference_month,
        );
        Ok(days_to_consider)
    }

    #[must_use]
    pub const fn reference_multiplier(&self) -> f64 {
        self.multipliers.get(self.reference_month)
    }
}

/// Everything derived from a load table.
#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct Report {
    pub n_loads: usize,
    pub reference_month: Month,
    pub multipliers: Multipliers,
    pub segments: Segments,

    /// Unadjusted profile and metrics.
    pub base: Adjusted,

    /// Profile and metrics under the reference month's multiplier.
    pub adjusted: Adjusted,

    pub period: PeriodEnergy,
    pub annual: AnnualProjection,

    /// Load duration curve of the adjusted profile.
    pub ldc: Vec<LdcPoint>,

    pub load_heatmap: LoadHeatmap,
    pub monthly_heatmap: MonthlyHeatmap,
}

/// Run the whole pipeline from scratch.
#[instrument(skip_all, fields(n_loads = loads.len(), month = %config.reference_month))]
pub fn try_analyze(loads: &[Load], config: &AnalysisConfig) -> Result<Report> {
    let days_to_consider = config.try_days_to_consider()?;

    let base_series = aggregate_hourly(loads);
    let segments = Segments::resolve(config.day_start, config.day_end);
    debug!(day = ?segments.day, night = ?segments.night, "resolved segments");

    let base = adjust(&base_series, &segments, Multipliers::NEUTRAL);
    let adjusted = adjust(&base_series, &segments, config.reference_multiplier());
    info!(
        peak = ?adjusted.metrics.peak_power,
        peak_hour = ?adjusted.metrics.peak_hour,
        daily_energy = ?adjusted.metrics.daily_energy.total,
        multiplier = adjusted.multiplier,
        "adjusted",
    );

    let annual = AnnualProjection::project(base.metrics.daily_energy, &config.multipliers);
    info!(annual_energy = ?annual.total.total, "projected");

    Ok(Report {
        n_loads: loads.len(),
        reference_month: config.reference_month,
        multipliers: config.multipliers,
        segments,
        period: PeriodEnergy::new(adjusted.metrics.daily_energy, days_to_consider),
        annual,
        ldc: build_ldc(&adjusted.series),
        load_heatmap: LoadHeatmap::from_loads(loads),
        monthly_heatmap: MonthlyHeatmap::project(&base_series, &config.multipliers),
        base,
        adjusted,
    })
}
