#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod core;
mod prelude;
mod quantity;
mod scenario;
mod table;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, analyze, export, validate},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Analyze(args) => analyze(&args)?,
        Command::Validate(args) => validate(&args)?,
        Command::Export(args) => export(&args)?,
    }

    info!("done!");
    Ok(())
}
