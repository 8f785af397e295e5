mod cli;
mod config;
mod constants;
mod error;
mod output;
mod utils;
mod vision;

use crate::cli::{Cli, Commands};
use crate::config::{load_dotenv, log_dotenv_outcome, Settings};
use crate::constants::API_KEY_ENV;
use crate::output::print_outcome;
use crate::utils::{analyze_until_cancelled, build_client};
use clap::Parser;
use std::{env, process::ExitCode};

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv_outcome = load_dotenv();
    env_logger::init();
    log_dotenv_outcome(&dotenv_outcome);

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Analyze(args) => {
            let settings = Settings::with_timeout_secs(args.timeout);
            match build_client(&settings) {
                Ok(client) => {
                    analyze_until_cancelled(
                        &client,
                        &settings,
                        &args,
                        env::var(API_KEY_ENV).ok(),
                        tokio::signal::ctrl_c(),
                    )
                    .await
                }
                Err(e) => Err(e),
            }
        }
    };

    print_outcome(&outcome);
    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(e.exit_code()),
    }
}
