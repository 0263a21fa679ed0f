//! optimize-images - command-line entry point
//!
//! Resolves the command line into a validated configuration and hands it to
//! the image-processing pipeline. Guided exits (missing path, out-of-range
//! values, bad colors, version and format listings) end with status 0.

use optimize_images::{
    cli::Cli,
    config::{ConfigResolver, EnvManager, RuntimeSettings},
    error::{AppError, Result},
    log_debug,
    logging::Logger,
    pipeline::{ImagePipeline, SummaryPipeline},
    BUILD_TIME, GIT_COMMIT, PKG_NAME, VERSION,
};
use std::io::{self, Write};
use std::process;

fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(99);
    }));

    let cli = Cli::parse_normalized();

    // Settings problems fall back to the defaults and never stop the run
    let (settings, settings_error) = match EnvManager::runtime_settings() {
        Ok(settings) => (settings, None),
        Err(e) => (RuntimeSettings::default(), Some(e)),
    };
    if !settings.enable_color {
        colored::control::set_override(false);
    }

    let mut logger = Logger::with_settings(PKG_NAME, &settings);
    logger.add_context_field("version", VERSION);
    if let Some(e) = settings_error {
        logger
            .warn(&format!("Ignoring runtime settings: {}", e))
            .error_info(&e)
            .log();
    }
    log_debug!(
        logger,
        "{} v{} (commit {}, built {})",
        PKG_NAME,
        VERSION,
        GIT_COMMIT.unwrap_or("unknown"),
        BUILD_TIME
    );

    if let Err(e) = run_application(&cli, &logger) {
        logger.debug("Exiting").error_info(&e).log();
        report(&e, &settings);
        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: &Cli, logger: &Logger) -> Result<()> {
    let resolver = ConfigResolver::with_defaults()?.with_logger(logger.named("resolver"));
    let config = resolver.resolve(&cli.to_raw_arguments())?;

    let mut pipeline = SummaryPipeline::stdout();
    pipeline.run(&config)?;

    Ok(())
}

/// Print a termination to the right stream
fn report(error: &AppError, settings: &RuntimeSettings) {
    match error {
        AppError::Informational(message) => print!("\n{}\n\n", message),
        e if e.is_guidance() => eprint!("\n{}\n\n", e.format_for_console(settings.enable_color)),
        e => eprintln!("Error: {}", e.format_for_console(settings.enable_color)),
    }
    let _ = io::stdout().flush();
}
