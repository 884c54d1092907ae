//! Lex command implementation.
//!
//! Dumps the token stream of each input in one of the [`OutputFormat`]s.
//! A lexical error ends the listing for that input (the `ERROR` row is the
//! last one printed) and is reported on stderr with its location.

use std::io::Write;
use std::path::PathBuf;

use cminus_lex::Token;
use serde::Serialize;

use crate::commands::common::{line_col, read_sources, scan, OutputFormat, Scan, SourceFile};
use crate::config::LexConfig;
use crate::error::Result;

/// Width of the kind column in table output.
const KIND_WIDTH: usize = 25;

/// Rendering options shared by `lex` and `demo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexOptions {
    /// Output format.
    pub format: OutputFormat,
    /// List the terminal EOF token.
    pub show_eof: bool,
    /// Print the source text before its tokens.
    pub show_source: bool,
}

impl LexOptions {
    /// Merges command-line flags over the configured defaults.
    ///
    /// Flags can only switch behavior on relative to the config: `--no-eof`
    /// hides EOF and `--show-source` shows the source.
    pub fn resolve(
        config: &LexConfig,
        format: Option<OutputFormat>,
        no_eof: bool,
        show_source: bool,
    ) -> Self {
        Self {
            format: format.unwrap_or(config.format),
            show_eof: config.show_eof && !no_eof,
            show_source: config.show_source || show_source,
        }
    }
}

impl Default for LexOptions {
    fn default() -> Self {
        Self::resolve(&LexConfig::default(), None, false, false)
    }
}

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// Input files; standard input when empty.
    pub files: Vec<PathBuf>,
    /// Rendering options.
    pub options: LexOptions,
}

/// Runs the lex command, writing listings to `out`.
///
/// Returns `Ok(false)` when any input contained a lexical error.
pub fn run_lex(args: LexArgs, out: &mut dyn Write) -> Result<bool> {
    let sources = read_sources(&args.files)?;
    lex_sources(&sources, args.options, out)
}

/// Lexes each source and writes its listing.
pub fn lex_sources(sources: &[SourceFile], options: LexOptions, out: &mut dyn Write) -> Result<bool> {
    let mut reports = Vec::new();
    let mut clean = true;

    for source in sources {
        let scan = scan(&source.text);
        tracing::debug!(
            file = %source.name,
            tokens = scan.token_count(),
            failed = scan.error.is_some(),
            "lexed source"
        );

        match options.format {
            OutputFormat::Json => reports.push(FileReport::new(source, &scan, options)),
            OutputFormat::Table | OutputFormat::Plain => {
                if sources.len() > 1 {
                    writeln!(out, "==> {} <==", source.name)?;
                }
                if options.show_source {
                    writeln!(out, "{}\n", source.text)?;
                }
                let tokens = visible(&scan, options.show_eof);
                if options.format == OutputFormat::Table {
                    write_table(out, tokens)?;
                } else {
                    write_plain(out, tokens)?;
                }
            }
        }

        if let Some(error) = scan.error {
            clean = false;
            eprintln!("error: {}", source.located(error));
        }
    }

    if options.format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, &reports)?;
        writeln!(out)?;
    }
    Ok(clean)
}

fn visible<'s, 'a>(scan: &'s Scan<'a>, show_eof: bool) -> impl Iterator<Item = &'s Token<'a>> {
    scan.tokens.iter().filter(move |t| show_eof || !t.is_eof())
}

/// Writes the two-column `KIND | LEXEME` table.
pub fn write_table<'a, 't: 'a>(
    out: &mut dyn Write,
    tokens: impl IntoIterator<Item = &'a Token<'t>>,
) -> Result<()> {
    writeln!(out, "{:<KIND_WIDTH$} | {}", "TOKEN KIND", "LEXEME")?;
    writeln!(out, "{}|{}", "-".repeat(KIND_WIDTH + 1), "-".repeat(34))?;
    for token in tokens {
        writeln!(out, "{:<KIND_WIDTH$} | {}", token.kind.name(), token.lexeme)?;
    }
    Ok(())
}

fn write_plain<'a, 't: 'a>(
    out: &mut dyn Write,
    tokens: impl IntoIterator<Item = &'a Token<'t>>,
) -> Result<()> {
    for token in tokens {
        writeln!(out, "{} {}", token.kind.name(), token.lexeme)?;
    }
    Ok(())
}

// ============================================================================
// JSON Reports
// ============================================================================

#[derive(Debug, Serialize)]
struct FileReport<'a> {
    file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    tokens: Vec<TokenRow<'a>>,
    error: Option<ErrorRow>,
}

#[derive(Debug, Serialize)]
struct TokenRow<'a> {
    kind: &'static str,
    lexeme: &'a str,
}

#[derive(Debug, Serialize)]
struct ErrorRow {
    message: String,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> FileReport<'a> {
    fn new(source: &'a SourceFile, scan: &Scan<'a>, options: LexOptions) -> Self {
        let tokens = visible(scan, options.show_eof)
            .map(|token| TokenRow {
                kind: token.kind.name(),
                lexeme: token.lexeme,
            })
            .collect();
        let error = scan.error.as_ref().map(|error| {
            let (line, column) = line_col(&source.text, error.offset());
            ErrorRow {
                message: error.to_string(),
                offset: error.offset(),
                line,
                column,
            }
        });

        Self {
            file: &source.name,
            source: options.show_source.then_some(source.text.as_str()),
            tokens,
            error,
        }
    }
}
