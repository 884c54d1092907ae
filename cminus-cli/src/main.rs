//! cminus CLI - token dumps and lexical checks for C- sources.
//!
//! This is the main entry point for the cminus CLI application.
//! It uses clap for argument parsing and dispatches to the command
//! handlers in [`commands`].
//!
//! Exit status is 0 on success, 1 when any input had a lexical error, and
//! 2 when the command itself failed (unreadable file, bad configuration).

mod commands;
mod config;
mod error;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{
    run_check, run_config, run_demo, run_lex, CheckArgs, ConfigArgs, LexArgs, LexOptions,
};
use config::Config;
use error::{CliError, Result};

/// cminus - lexical analysis for the C- teaching language
///
/// Dumps the tokens of C- sources, checks files for lexical errors, and
/// runs a built-in sample program.
#[derive(Parser, Debug)]
#[command(name = "cminus")]
#[command(author = "C- Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analysis for the C- teaching language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "CMINUS_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CMINUS_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "CMINUS_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the cminus CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of C- sources
    ///
    /// Reads standard input when no file is given. Listing stops at the
    /// first lexical error, which is reported on stderr.
    Lex(LexCommand),

    /// Report the first lexical error in each file
    Check(CheckCommand),

    /// Lex the built-in sample program
    Demo(DemoCommand),

    /// Print or write the effective configuration
    Config(ConfigCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source files (default: standard input)
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print each source above its tokens
    #[arg(long)]
    show_source: bool,

    /// Omit the final EOF token
    #[arg(long)]
    no_eof: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Only print files with errors
    #[arg(short, long)]
    quiet: bool,
}

/// Arguments for the demo subcommand.
#[derive(Parser, Debug)]
struct DemoCommand {
    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Omit the final EOF token
    #[arg(long)]
    no_eof: bool,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long)]
    force: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

/// Parses arguments, loads configuration, and runs the selected command.
///
/// Configuration is loaded before logging starts so that its `verbose` key
/// can raise the log level.
fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("could not load configuration")?;
    let verbose = cli.verbose || config.verbose;
    init_logging(verbose, cli.no_color)?;
    tracing::debug!(?config, "effective configuration");

    let clean = execute_command(cli.command, &config)?;
    Ok(clean)
}

/// Initialize the logging system.
///
/// Logs go to stderr so that token output on stdout stays machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command, writing its report to stdout.
fn execute_command(command: Commands, config: &Config) -> Result<bool> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let clean = match command {
        Commands::Lex(args) => {
            let options =
                LexOptions::resolve(&config.lex, args.format, args.no_eof, args.show_source);
            run_lex(
                LexArgs {
                    files: args.files,
                    options,
                },
                &mut out,
            )?
        }
        Commands::Check(args) => run_check(
            CheckArgs {
                files: args.files,
                quiet: args.quiet,
            },
            &mut out,
        )?,
        Commands::Demo(args) => {
            let options = LexOptions::resolve(&config.lex, args.format, args.no_eof, false);
            run_demo(options, &mut out)?
        }
        Commands::Config(args) => run_config(
            ConfigArgs {
                output: args.output,
                force: args.force,
            },
            config,
            &mut out,
        )?,
    };

    out.flush()?;
    Ok(clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lex_stdin() {
        let cli = Cli::parse_from(["cminus", "lex"]);
        if let Commands::Lex(args) = cli.command {
            assert!(args.files.is_empty());
            assert_eq!(args.format, None);
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_with_files_and_format() {
        let cli = Cli::parse_from(["cminus", "lex", "a.cm", "b.cm", "--format", "json"]);
        if let Commands::Lex(args) = cli.command {
            assert_eq!(args.files, [PathBuf::from("a.cm"), PathBuf::from("b.cm")]);
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_flags() {
        let cli = Cli::parse_from(["cminus", "lex", "--show-source", "--no-eof", "-f", "plain"]);
        if let Commands::Lex(args) = cli.command {
            assert!(args.show_source);
            assert!(args.no_eof);
            assert_eq!(args.format, Some(OutputFormat::Plain));
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["cminus", "lex", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["cminus", "check", "-q", "x.cm"]);
        if let Commands::Check(args) = cli.command {
            assert!(args.quiet);
            assert_eq!(args.files, [PathBuf::from("x.cm")]);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_check_requires_files() {
        assert!(Cli::try_parse_from(["cminus", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_demo() {
        let cli = Cli::parse_from(["cminus", "demo", "--no-eof"]);
        if let Commands::Demo(args) = cli.command {
            assert!(args.no_eof);
        } else {
            panic!("Expected Demo command");
        }
    }

    #[test]
    fn test_cli_parse_config_output() {
        let cli = Cli::parse_from(["cminus", "config", "--output", "/tmp/cminus.toml", "--force"]);
        if let Commands::Config(args) = cli.command {
            assert_eq!(args.output, Some(PathBuf::from("/tmp/cminus.toml")));
            assert!(args.force);
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "cminus",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/cminus.toml",
            "demo",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/cminus.toml")));
    }

    #[test]
    fn test_cli_global_flag_after_subcommand() {
        let cli = Cli::parse_from(["cminus", "demo", "-v"]);
        assert!(cli.verbose);
    }
}
