//! Config command implementation.
//!
//! Prints the effective configuration as TOML, or writes it to a file so it
//! can be edited and picked up by later runs.

use std::io::Write;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{CliError, Result};

/// Arguments for the config command.
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Write the configuration here instead of printing it.
    pub output: Option<PathBuf>,
    /// Overwrite an existing output file.
    pub force: bool,
}

/// Runs the config command.
pub fn run_config(args: ConfigArgs, config: &Config, out: &mut dyn Write) -> Result<bool> {
    match args.output {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(CliError::Validation(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            config.save_to_path(&path)?;
            tracing::info!(path = %path.display(), "wrote configuration");
        }
        None => write!(out, "{}", config.to_toml()?)?,
    }
    Ok(true)
}
