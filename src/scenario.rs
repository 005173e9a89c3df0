use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;

use crate::{
    core::{
        analysis::AnalysisConfig,
        calendar::Month,
        hour::Hour,
        multipliers::{AdjustmentMode, Multipliers},
    },
    prelude::*,
    table::{LoadTable, RawLoad, duplicate_names},
};

/// Scenario file: analysis settings and the load table.
#[must_use]
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scenario {
    pub segmentation: Segmentation,
    pub period: Period,
    pub adjustment: Adjustment,
    pub loads: Vec<RawLoad>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Segmentation {
    pub day_start: Hour,
    pub day_end: Hour,
}

impl Default for Segmentation {
    fn default() -> Self {
        Self { day_start: Hour::DEFAULT_DAY_START, day_end: Hour::DEFAULT_DAY_END }
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Period {
    pub reference_month: Month,

    /// Defaults to the whole reference month.
    pub days: Option<u16>,
}

impl Default for Period {
    fn default() -> Self {
        Self { reference_month: Month::January, days: None }
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Adjustment {
    pub mode: AdjustmentMode,

    /// Multiplier for every month in the general mode.
    pub general: f64,

    /// Multipliers for the monthly mode, omitted months stay neutral.
    pub monthly: BTreeMap<Month, f64>,
}

impl Default for Adjustment {
    fn default() -> Self {
        Self {
            mode: AdjustmentMode::default(),
            general: Multipliers::NEUTRAL,
            monthly: BTreeMap::new(),
        }
    }
}

impl Adjustment {
    pub fn try_multipliers(&self) -> Result<Multipliers> {
        match self.mode {
            AdjustmentMode::General => Multipliers::try_uniform(self.general),
            AdjustmentMode::Monthly => Multipliers::try_monthly(
                self.monthly.iter().map(|(month, multiplier)| (*month, *multiplier)),
            ),
        }
    }
}

impl Scenario {
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("failed to parse `{}`", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn try_config(&self) -> Result<AnalysisConfig> {
        Ok(AnalysisConfig::builder()
            .day_start(self.segmentation.day_start)
            .day_end(self.segmentation.day_end)
            .reference_month(self.period.reference_month)
            .maybe_days_to_consider(self.period.days)
            .multipliers(self.adjustment.try_multipliers()?)
            .build())
    }
}

/// Move the loads into the table, a later row wins on a duplicate name.
pub fn merge_loads(table: &mut LoadTable, source: &Path, loads: Vec<RawLoad>) {
    for name in duplicate_names(&loads) {
        warn!(source = %source.display(), name, "duplicate load name, the last row is kept");
    }
    debug!(source = %source.display(), n_loads = loads.len(), "merging");
    table.merge(loads);
}

/// Read the files and merge their loads into the table in order.
#[instrument(skip_all, fields(n_files = paths.len()))]
pub fn merge_files<P: AsRef<Path>>(mut table: LoadTable, paths: &[P]) -> Result<LoadTable> {
    for path in paths {
        let path = path.as_ref();
        merge_loads(&mut table, path, Scenario::from_path(path)?.loads);
    }
    info!(n_loads = table.len(), "merged the load tables");
    Ok(table)
}
