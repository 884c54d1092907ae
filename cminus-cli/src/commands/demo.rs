//! Demo command implementation.
//!
//! Lexes a built-in sample program that touches every keyword class and
//! most operators, printing the source above its token table.

use std::io::Write;

use crate::commands::common::{OutputFormat, SourceFile};
use crate::commands::lex::{lex_sources, LexOptions};
use crate::error::Result;

/// Name the sample is reported under.
pub const SAMPLE_NAME: &str = "sample.cm";

/// The built-in sample program.
pub const SAMPLE_PROGRAM: &str = "/* C- test file */
int main (void) {
  int counter = 10;
  while (counter >= 0) {
    if (counter == 5) {
      counter = counter - 1;
    } else {
      counter = counter + 1;
    }
  }
  return 0;
}";

/// Runs the demo command.
///
/// JSON output carries the source inside the report; the other formats
/// print a banner with the source first.
pub fn run_demo(options: LexOptions, out: &mut dyn Write) -> Result<bool> {
    let sample = SourceFile::new(SAMPLE_NAME, SAMPLE_PROGRAM);

    if options.format == OutputFormat::Json {
        let options = LexOptions {
            show_source: true,
            ..options
        };
        return lex_sources(&[sample], options, out);
    }

    writeln!(out, "--- C- Scanner ---\n")?;
    writeln!(out, "Sample source:\n{}\n", SAMPLE_PROGRAM)?;
    writeln!(out, "--- Tokens ---")?;
    let options = LexOptions {
        show_source: false,
        ..options
    };
    lex_sources(&[sample], options, out)
}
