//! callout CLI entry point.

use std::{process::ExitCode, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};
use miette::GraphicalReportHandler;

use callout::CalloutError;
use callout_cli::{Args, error_adapter::to_reportables};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match callout_cli::run(&args) {
        Ok(()) => {
            info!("Diagrams written");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

/// Install env_logger, filtered by `--log-level` unless `RUST_LOG` says
/// otherwise for a module.
fn init_logger(level: &str) {
    let filter = LevelFilter::from_str(level).ok();

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter.unwrap_or(LevelFilter::Warn))
        .init();

    match filter {
        Some(filter) => info!(log_level:? = filter; "Starting callout"),
        None => warn!(requested = level; "Unknown log level, falling back to warn"),
    }
}

/// Log every diagnostic carried by `err` as a miette graphical report.
fn report(err: &CalloutError) {
    let handler = GraphicalReportHandler::new();

    for reportable in to_reportables(err) {
        let mut rendered = String::new();
        match handler.render_report(&mut rendered, &reportable) {
            Ok(()) => error!("{rendered}"),
            Err(_) => error!("{reportable}"),
        }
    }
}
