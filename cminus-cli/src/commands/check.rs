//! Check command implementation.
//!
//! Lexes each file and reports the first lexical error, if any, as
//! `path:line:column: message`. Clean files are listed with their token
//! count unless `--quiet` is given.

use std::io::Write;
use std::path::PathBuf;

use crate::commands::common::{error_messages, scan, SourceFile};
use crate::error::{CliError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check.
    pub files: Vec<PathBuf>,
    /// Only print failures.
    pub quiet: bool,
}

/// Runs the check command.
///
/// Returns `Ok(false)` when any file contained a lexical error. A file that
/// cannot be read aborts the whole run.
pub fn run_check(args: CheckArgs, out: &mut dyn Write) -> Result<bool> {
    if args.files.is_empty() {
        return Err(CliError::Validation(error_messages::NO_INPUT_FILES.to_string()));
    }

    let mut failures = 0;
    for path in &args.files {
        let source = SourceFile::read(path)?;
        failures += usize::from(!check_source(&source, args.quiet, out)?);
    }

    tracing::info!(files = args.files.len(), failures, "check finished");
    Ok(failures == 0)
}

/// Checks one source, returning whether it lexed cleanly.
pub fn check_source(source: &SourceFile, quiet: bool, out: &mut dyn Write) -> Result<bool> {
    let scan = scan(&source.text);
    match scan.error {
        Some(error) => {
            writeln!(out, "{}", source.located(error))?;
            Ok(false)
        }
        None => {
            if !quiet {
                writeln!(out, "{}: ok ({} tokens)", source.name, scan.token_count())?;
            }
            Ok(true)
        }
    }
}
