//! Folio - a static site generator for a localized portfolio and blog.

mod cli;
mod config;
mod contact;
mod content;
mod core;
mod embed;
mod generator;
mod i18n;
mod logger;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site, init::InitMode};
use config::SiteConfig;
use render::Site;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name } => {
            let mode = if name.is_some() {
                InitMode::NewDir
            } else {
                InitMode::CurrentDir
            };
            cli::init::new_site(&config, mode)
        }
        Commands::Build { .. } => build_site(config, false).map(|_| ()),
        Commands::Serve { .. } => cli::serve::serve_site(config),
        Commands::Query { args } => cli::query::run_query(args, &Site::load(config)?),
    }
}
