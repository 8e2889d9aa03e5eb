// src/main.rs
use clap::Parser;
use env_logger::Env;
use log::debug;
use std::process::ExitCode;

use wct::WordCountError;
use wct::cli::{self, Args};

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(kind) = err
                .chain()
                .find_map(|cause| cause.downcast_ref::<WordCountError>())
            {
                debug!("{} error", kind.category());
            }
            for cause in err.chain() {
                debug!("caused by: {cause}");
            }
            println!("Error: {}", cli::user_message(&err));
            ExitCode::FAILURE
        }
    }
}
