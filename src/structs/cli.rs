use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "compliance-reporter")]
#[clap(about = "Per-application compliance reporting over security findings", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
