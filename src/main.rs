use std::process::ExitCode;

use clap::Parser;

use tabular_report::cli::Cli;
use tabular_report::dispatch::run_and_render;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let result = cli.into_config().and_then(|config| run_and_render(&config));
    match result {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
