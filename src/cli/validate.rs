use std::path::PathBuf;

use clap::Parser;

use crate::{
    cli::try_validate,
    prelude::*,
    scenario::merge_files,
    table::LoadTable,
    tables::build_loads_table,
};

#[derive(Parser)]
pub struct ValidateArgs {
    /// Scenario or load table files, merged in order.
    #[clap(value_name = "FILE", required = true)]
    pub paths: Vec<PathBuf>,
}

#[instrument(skip_all)]
pub fn validate(args: &ValidateArgs) -> Result {
    let loads = try_validate(&merge_files(LoadTable::default(), &args.paths)?)?;
    info!(n_loads = loads.len(), "the load table is valid");
    println!("{}", build_loads_table(&loads));
    Ok(())
}
