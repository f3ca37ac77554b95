// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, build the config and reporter,
//   then hand the command to `cli::run`.
// - Argument errors (including unknown commands) exit with code 1 after
//   printing help; every other path exits 0 unless storage I/O fails.

use clap::{CommandFactory, Parser};
use filebox_cli::cli::{self, Cli};
use filebox_cli::config::AppConfig;
use filebox_cli::report::Reporter;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Developer diagnostics only; user-facing output goes through Reporter.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let parsed = match Cli::try_parse() {
        Ok(parsed) => parsed,
        Err(e) => {
            use clap::error::ErrorKind;
            let _ = e.print();
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                return ExitCode::SUCCESS;
            }
            println!();
            let _ = Cli::command().print_help();
            return ExitCode::from(1);
        }
    };

    let config = AppConfig::default();
    log::debug!("using config {:?}", config);
    let mut reporter = Reporter::standard(config.log_file.as_deref());

    match cli::run(parsed.command, &config, &mut reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            reporter.error(format!("{:#}", e));
            ExitCode::from(1)
        }
    }
}
