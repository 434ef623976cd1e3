use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::layout::FontFamily;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "vitae",
    version,
    about = "Renders a JSON resume profile into a two-column word-processing document"
)]
pub struct Cli {
    /// Path to the input profile JSON file.
    #[arg(short, long, default_value = "profile.json")]
    pub profile: PathBuf,

    /// Path of the generated document.
    #[arg(short, long, default_value = "resume.docx")]
    pub output: PathBuf,

    /// Directory holding `<key>.png` icons for bio rows.
    #[arg(long, default_value = "icons")]
    pub icons_dir: PathBuf,

    /// Document font family.
    #[arg(long, value_enum, default_value_t = FontFamily::Calibri)]
    pub font: FontFamily,

    /// Also convert the saved document to PDF via LibreOffice.
    #[arg(long)]
    pub pdf: bool,

    /// Converter binary (overrides the SOFFICE_PATH environment variable).
    #[arg(long)]
    pub soffice: Option<String>,
}

/// Resolved application configuration (CLI arguments + environment).
#[derive(Debug, Clone)]
pub struct Config {
    pub profile_path: PathBuf,
    pub output_path: PathBuf,
    pub icons_dir: PathBuf,
    pub font: FontFamily,
    pub convert_pdf: bool,
    pub soffice_bin: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let soffice_bin = cli
            .soffice
            .or_else(|| std::env::var("SOFFICE_PATH").ok())
            .unwrap_or_else(|| "soffice".to_string());

        Ok(Config {
            profile_path: cli.profile,
            output_path: cli.output,
            icons_dir: cli.icons_dir,
            font: cli.font,
            convert_pdf: cli.pdf,
            soffice_bin,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
