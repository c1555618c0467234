//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up brres CLI defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `organize` - Optional default for category folders
/// * `output` - Optional default output directory
/// * `show` - If true, show current configuration
pub fn handle(organize: Option<bool>, output: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if organize.is_none() && output.is_none() {
        show_usage();
        return Ok(());
    }

    if let Some(organize) = organize {
        config.organize = Some(organize);
        println!("Organize by category: {}", organize);
    }
    if let Some(dir) = output {
        println!("Default output directory: {}", dir.display());
        config.output_dir = Some(dir);
    }

    config.save()?;
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    match config.organize {
        Some(organize) => println!("Organize by category: {}", organize),
        None => println!("Organize by category: not set (default: false)"),
    }

    match &config.output_dir {
        Some(dir) => println!("Default output directory: {}", dir.display()),
        None => println!("Default output directory: not set (default: <input>_extracted)"),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: brres configure [--organize <true|false>] [--output DIR]");
    println!("       brres configure --show");
}
