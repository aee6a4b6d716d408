//! PDF Sweep - command-line interface
//!
//! Walks a directory, deletes PDFs that fail to parse or have no pages, and
//! reports file names containing uppercase letters.

use clap::{Arg, ArgAction, ArgMatches, Command};
use pdfsweep::config::{DEFAULT_EXTENSION, DEFAULT_ROOT};
use pdfsweep::utils::init_logging;
use pdfsweep::{LogLevel, Pipeline, StatusWriter, SweepConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let matches = build_cli().get_matches();

    let level = log_level(&matches);
    if let Err(e) = init_logging(level) {
        eprintln!("{}", e);
        process::exit(1);
    }

    let config = sweep_config(&matches);
    info!(
        "Sweeping {} for '{}' files",
        config.root.display(),
        config.extension
    );

    let pipeline = Pipeline::new(config);
    let mut status = StatusWriter::stdout();
    match pipeline.run(&mut status) {
        Ok(outcomes) => info!("Processed {} file(s)", outcomes.len()),
        Err(e) => {
            error!("Sweep aborted: {}", e);
            process::exit(1);
        }
    }
}

fn build_cli() -> Command {
    Command::new("pdfsweep")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Delete PDFs that fail to open and flag file names with uppercase letters")
        .long_about(
            "Recursively scans a directory for files with the given suffix, deletes every \
             file that does not parse as a PDF or has no pages, and reports file names \
             containing uppercase letters. Deletion is immediate and cannot be undone.",
        )
        .arg(
            Arg::new("root")
                .short('r')
                .long("root")
                .value_name("DIR")
                .default_value(DEFAULT_ROOT)
                .help("Directory to scan recursively"),
        )
        .arg(
            Arg::new("extension")
                .short('e')
                .long("extension")
                .value_name("SUFFIX")
                .default_value(DEFAULT_EXTENSION)
                .help("Case-sensitive file name suffix to match"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .value_name("LEVEL")
                .value_parser(LogLevel::VARIANTS)
                .default_value("warn")
                .help("Set diagnostic log verbosity"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose")
                .help("Only log errors"),
        )
}

fn log_level(matches: &ArgMatches) -> LogLevel {
    if matches.get_flag("quiet") {
        return LogLevel::Error;
    }
    matches
        .get_one::<String>("verbose")
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

fn sweep_config(matches: &ArgMatches) -> SweepConfig {
    let mut config = SweepConfig::default();
    if let Some(root) = matches.get_one::<String>("root") {
        config.root = root.into();
    }
    if let Some(extension) = matches.get_one::<String>("extension") {
        config.extension = extension.clone();
    }
    config
}
