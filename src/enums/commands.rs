use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a compliance report from a search response file
    Report {
        #[clap(short, long)]
        input: PathBuf,
        #[clap(short, long)]
        output: PathBuf,
        #[clap(long)]
        email_template: Option<PathBuf>,
        #[clap(long)]
        email_output: Option<PathBuf>,
        #[clap(long)]
        start_date: Option<String>,
        #[clap(long)]
        end_date: Option<String>,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Merge every shard report in a directory into the combined report
    Combine {
        /// Defaults to `output.output_dir` from the config
        output_dir: Option<PathBuf>,
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Write a sample configuration file
    Init,
    /// Check the configuration file
    Validate {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
}
