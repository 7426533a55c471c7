//! CLI logic for the callout diagram tool.
//!
//! Reads explanation files (or standard input), reports parser warnings,
//! and writes the rendered diagrams to a file or standard output.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Read, Write},
};

use log::{info, warn};

use callout::{CalloutError, Explainer};

use error_adapter::warning_reportables;

/// Run the callout CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CalloutError` for:
/// - File I/O errors, including input that is not UTF-8
/// - Configuration loading errors
/// - Malformed glyphs
/// - Parse errors in strict mode
pub fn run(args: &Args) -> Result<(), CalloutError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    config::apply_overrides(&mut app_config, args)?;
    let explainer = Explainer::new(app_config)?;

    let source = read_input(args)?;
    let document = explainer.parse(&source)?;
    report_warnings(document.diagnostics(), &source);

    let output = explainer.render_document(&document);
    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            info!(output_file = path.display().to_string(); "Diagrams written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Concatenate the inputs, each followed by a blank line so blocks of
/// consecutive files never merge.
fn read_input(args: &Args) -> Result<String, CalloutError> {
    if args.inputs.is_empty() {
        info!("Reading explanations from standard input");
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    let mut source = String::new();
    for path in &args.inputs {
        info!(input_path = path.display().to_string(); "Reading explanations");
        source.push_str(&fs::read_to_string(path)?);
        source.push_str("\n\n");
    }
    Ok(source)
}

fn report_warnings(diagnostics: &[callout::Diagnostic], source: &str) {
    if diagnostics.is_empty() || !log::log_enabled!(log::Level::Warn) {
        return;
    }

    let reporter = miette::GraphicalReportHandler::new();
    for reportable in warning_reportables(diagnostics, source) {
        let mut writer = String::new();
        match reporter.render_report(&mut writer, &reportable) {
            Ok(()) => warn!("{writer}"),
            Err(_) => warn!("{reportable}"),
        }
    }
}
