mod analyze;
mod export;
mod validate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use self::{
    analyze::{AnalyzeArgs, analyze},
    export::{ExportArgs, export},
    validate::{ValidateArgs, validate},
};
use crate::{
    core::{
        analysis::AnalysisConfig,
        calendar::Month,
        hour::Hour,
        load::Load,
        multipliers::Multipliers,
    },
    prelude::*,
    scenario::{Scenario, merge_files, merge_loads},
    table::LoadTable,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: analyze the load table and print the results.
    #[clap(name = "analyze")]
    Analyze(Box<AnalyzeArgs>),

    /// Merge and validate the load tables without analyzing them.
    #[clap(name = "validate")]
    Validate(ValidateArgs),

    /// Export the full report as JSON.
    #[clap(name = "export")]
    Export(Box<ExportArgs>),
}

#[derive(Parser)]
pub struct ScenarioArgs {
    /// Scenario file with the settings and the load table.
    #[clap(value_name = "SCENARIO", env = "LOADCURVE_SCENARIO")]
    pub path: PathBuf,

    /// Additional load tables to merge into the scenario, later ones win on the duplicate names.
    #[clap(long = "merge", value_name = "FILE")]
    pub merge: Vec<PathBuf>,

    #[clap(flatten)]
    pub overrides: OverrideArgs,
}

impl ScenarioArgs {
    /// Read the scenario, merge the load tables and validate them.
    pub fn try_load(&self) -> Result<(Vec<Load>, AnalysisConfig)> {
        let scenario = Scenario::from_path(&self.path)?;
        let config = self.overrides.try_apply(scenario.try_config()?)?;
        let mut table = LoadTable::default();
        merge_loads(&mut table, &self.path, scenario.loads);
        let loads = try_validate(&merge_files(table, &self.merge)?)?;
        Ok((loads, config))
    }
}

/// Command-line overrides of the scenario settings.
#[derive(Parser)]
pub struct OverrideArgs {
    /// First hour of the day segment.
    #[clap(long, env = "LOADCURVE_DAY_START")]
    pub day_start: Option<Hour>,

    /// First hour of the night segment.
    #[clap(long, env = "LOADCURVE_DAY_END")]
    pub day_end: Option<Hour>,

    /// Reference month for the adjusted profile.
    #[clap(long = "month", env = "LOADCURVE_MONTH")]
    pub reference_month: Option<Month>,

    /// Number of days of the reference month to consider.
    #[clap(long, env = "LOADCURVE_DAYS")]
    pub days: Option<u16>,

    /// Apply the same multiplier to every month, replacing the scenario's adjustment.
    #[clap(long, env = "LOADCURVE_GENERAL_MULTIPLIER")]
    pub general_multiplier: Option<f64>,
}

impl OverrideArgs {
    pub fn try_apply(&self, mut config: AnalysisConfig) -> Result<AnalysisConfig> {
        if let Some(day_start) = self.day_start {
            config.day_start = day_start;
        }
        if let Some(day_end) = self.day_end {
            config.day_end = day_end;
        }
        if let Some(reference_month) = self.reference_month {
            config.reference_month = reference_month;
        }
        if let Some(days) = self.days {
            config.days_to_consider = Some(days);
        }
        if let Some(multiplier) = self.general_multiplier {
            config.multipliers = Multipliers::try_uniform(multiplier)?;
        }
        Ok(config)
    }
}

/// Validate the table and log every issue found.
fn try_validate(table: &LoadTable) -> Result<Vec<Load>> {
    match table.try_validate() {
        Ok(loads) => Ok(loads),
        Err(issues) => {
            for issue in &issues {
                error!(%issue, "invalid load table");
            }
            bail!("the load table has {} issue(s)", issues.len());
        }
    }
}
