use std::{fs, path::PathBuf};

use clap::Parser;

use crate::{cli::ScenarioArgs, core::analysis::try_analyze, prelude::*};

#[derive(Parser)]
pub struct ExportArgs {
    #[clap(flatten)]
    pub scenario: ScenarioArgs,

    /// Write the report to the file instead of the standard output.
    #[clap(long, short, value_name = "FILE", env = "LOADCURVE_OUTPUT")]
    pub output: Option<PathBuf>,
}

#[instrument(skip_all)]
pub fn export(args: &ExportArgs) -> Result {
    let (loads, config) = args.scenario.try_load()?;
    let report = try_analyze(&loads, &config)?;
    let json = serde_json::to_string_pretty(&report)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("failed to write `{}`", path.display()))?;
            info!(path = %path.display(), "exported");
        }
        None => println!("{json}"),
    }

    Ok(())
}
