use clap::Parser;

use crate::{
    cli::ScenarioArgs,
    core::analysis::try_analyze,
    prelude::*,
    tables::{
        build_energy_table,
        build_hourly_table,
        build_ldc_table,
        build_load_heatmap_table,
        build_metrics_table,
        build_monthly_heatmap_table,
        build_monthly_table,
    },
};

#[derive(Parser)]
pub struct AnalyzeArgs {
    #[clap(flatten)]
    pub scenario: ScenarioArgs,

    /// Also print the per-load and the monthly heatmaps.
    #[clap(long, env = "LOADCURVE_HEATMAPS")]
    pub heatmaps: bool,
}

#[instrument(skip_all)]
pub fn analyze(args: &AnalyzeArgs) -> Result {
    let (loads, config) = args.scenario.try_load()?;
    let report = try_analyze(&loads, &config)?;

    println!("{}", build_hourly_table(&report));
    println!("{}", build_metrics_table(&report));
    println!("{}", build_energy_table(&report));
    println!("{}", build_ldc_table(&report.ldc));
    println!("{}", build_monthly_table(&report));
    if args.heatmaps {
        println!("{}", build_load_heatmap_table(&report.load_heatmap));
        println!(
            "{}",
            build_monthly_heatmap_table(&report.monthly_heatmap, report.reference_month)
        );
    }

    Ok(())
}
