use anyhow::Result;
use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::path::PathBuf;

use button_markers::SUCCESS_MESSAGE;
use remove_buttons::config::{AppConfig, TARGET_FILE_ENV};
use remove_buttons::remove_buttons;

#[derive(Parser, Debug)]
#[command(
    name = "remove_buttons",
    version,
    about = "Removes the Quote Settings and Email Settings buttons from QuoteManagement.tsx"
)]
struct Cli {
    /// File to rewrite in place (defaults to src/components/QuoteManagement.tsx)
    file: Option<PathBuf>,

    /// Fail instead of warning when no button or marker line is found
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_sources(
        cli.file,
        env::var(TARGET_FILE_ENV).ok(),
        cli.strict,
        cli.verbose,
    );
    init_logging(config.verbose);
    log::debug!("{:?}", config);

    let report = remove_buttons(&config.target_file, config.strict)?;
    log::info!(
        "Removed {} quote settings block(s), {} email settings block(s), {} marker line(s) from {} (changed: {})",
        report.quote_blocks,
        report.email_blocks,
        report.lines_dropped,
        config.target_file.display(),
        report.changed
    );

    println!("{}", SUCCESS_MESSAGE);
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(err) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Never) {
        eprintln!("Failed to initialise logger: {}", err);
    }
}
