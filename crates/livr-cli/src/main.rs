//! `livr-num`: validate values with numeric LIVR rules.

use std::io::{self, IsTerminal};

use clap::Parser;
use livr_cli::cli::{Cli, Command};
use livr_cli::commands::{EXIT_ERROR, EXIT_OK, check_exit_code, run_check, run_rules};
use livr_cli::logging::init_logging;
use livr_cli::report::{CheckReport, print_report};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = cli.log_config(io::stderr().is_terminal());
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_ERROR);
    }
    let exit_code = match &cli.command {
        Command::Check(args) => {
            let result = run_check(args, io::stdin().lock());
            match &result {
                Ok(report) => {
                    if let Err(error) = emit_report(report, args.json) {
                        eprintln!("error: {error}");
                        std::process::exit(EXIT_ERROR);
                    }
                }
                Err(error) => eprintln!("error: {error:#}"),
            }
            check_exit_code(&result)
        }
        Command::Rules => match run_rules() {
            Ok(()) => EXIT_OK,
            Err(error) => {
                eprintln!("error: {error:#}");
                EXIT_ERROR
            }
        },
    };
    std::process::exit(exit_code);
}

fn emit_report(report: &CheckReport, json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print_report(report);
    }
    Ok(())
}
