mod config;
mod convert;
mod errors;
mod layout;
mod models;
mod render;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Cli, Config};
use crate::models::Profile;

fn main() -> Result<()> {
    // Resolve configuration first (CLI arguments + environment).
    let config = Config::from_cli(Cli::parse())?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting vitae v{}", env!("CARGO_PKG_VERSION"));

    let profile = Profile::load(&config.profile_path)?;
    info!(
        sections = profile.data.len(),
        bio_rows = profile.bio_data.len(),
        "Profile loaded from {}",
        config.profile_path.display()
    );

    let page = layout::default_page_config(config.font);
    let document = render::build_document(&profile, &page, &config.icons_dir);
    render::save_document(document, &config.output_path)?;
    info!("Resume saved to {}", config.output_path.display());

    if config.convert_pdf {
        let pdf_path = convert::docx_to_pdf(&config.output_path, &config.soffice_bin)?;
        info!("PDF saved to {}", pdf_path.display());
    }

    Ok(())
}
