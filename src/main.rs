use std::process::ExitCode;
use clap::Parser;
use env_logger::Env;
use compliance_reporter::structs::cli::Cli;
use compliance_reporter::workers::command_runner::CommandRunner;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new();

    // Errors are already reported by the runner.
    match runner.run_command(cli.command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) | Err(_) => ExitCode::FAILURE,
    }
}
