mod cli;
mod display;
mod error;
mod models;
mod telemetry;

use clap::Parser;
use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    cli::run(cli);
}
