//! Printable QR-code labels for LED controllers.
//!
//! Each label encodes the control web app's URL with the device id (plus an
//! optional synthetic MAC or auto-connect flag). Labels can be tiled into a
//! batch sheet for printing.

pub mod cli;
pub mod config;
pub mod preflight;
pub mod services;
pub mod summary;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::GeneratorConfig;
use config::defaults::SHEET_MARGIN;
use services::font::FontResolver;
use services::renderer::generate_labels;
use services::sheet::{SheetOptions, compose_sheet};

/// Install the fmt subscriber on stderr; `RUST_LOG` overrides the `info` default.
///
/// Stdout carries only the banner and run summary.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load `.env` from the working directory, if present.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::info!("Loaded .env from: {}", path.display()),
        Err(_) => tracing::debug!("No .env file found, using system environment variables"),
    }
}

/// Run the generator for parsed CLI flags.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = GeneratorConfig::from_cli(cli).context("invalid configuration")?;
    preflight::check(&config.output_dir).context("startup check failed")?;

    print!("{}", summary::banner(&config));

    if config.sheet_only {
        let options = SheetOptions {
            cols: config.cols,
            margin: SHEET_MARGIN,
            cell: None,
        };
        let sheet = compose_sheet(&config.output_dir, &options)
            .context("failed to compose batch sheet")?;
        print!("{}", summary::summary(&config, None, None, sheet.as_ref()));
        return Ok(());
    }

    let resolved = FontResolver::new(config.font_path.clone()).resolve();
    let report = generate_labels(&config, &resolved.font).context("failed to generate labels")?;

    let sheet = if config.batch {
        let options = SheetOptions {
            cols: config.cols,
            margin: SHEET_MARGIN,
            cell: Some(report.layout.size()),
        };
        compose_sheet(&report.output_dir, &options).context("failed to compose batch sheet")?
    } else {
        None
    };

    print!(
        "{}",
        summary::summary(&config, Some(&report), Some(&resolved.source), sheet.as_ref())
    );
    Ok(())
}
