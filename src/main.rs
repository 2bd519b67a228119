mod cli;
mod error;
mod hypothesis;
mod joint;
mod model;
mod output;
mod posterior;
mod probs;
mod reader;

use crate::error::Result;
use clap::Parser;
use miette::IntoDiagnostic;

/// Compute posterior gene and trait probabilities for every person in a pedigree.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Pedigree CSV file with columns name, mother, father, trait.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    data: String,

    /// Also write the posteriors to this file.
    #[arg(short, long)]
    output: Option<String>,

    /// Write the output file as JSON instead of CSV.
    #[arg(long, requires = "output")]
    json: bool,

    /// Number of worker threads for hypothesis enumeration.
    #[arg(short, long)]
    threads: Option<usize>,
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    cli::run(&args)
}

fn main() -> miette::Result<()> {
    try_main().into_diagnostic()
}
