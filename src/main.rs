//! cv-sitemap - sitemap.xml generator for cv.vnerd.nl.
//!
//! Publishes the hand-picked HTML pages plus every PDF under `resrc/`
//! (outside excluded folders) as a sorted sitemaps.org document.

mod asset;
mod cli;
mod config;
mod core;
mod generator;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::SitemapConfig;
use generator::build_sitemap;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);
    logger::set_stderr(cli.stdout);

    let config = SitemapConfig::load(&cli)?;
    debug!("config"; "root {}", config.root.display());

    build_sitemap(&config)?;
    Ok(())
}
