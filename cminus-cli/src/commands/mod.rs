//! Command modules for the cminus CLI.
//!
//! Each subcommand is implemented in its own file. Every `run_*` function
//! writes its report to the given writer and returns `Ok(false)` when the
//! input had lexical errors.

pub mod common;

pub mod check;
pub mod config;
pub mod demo;
pub mod lex;

pub use check::{run_check, CheckArgs};
pub use config::{run_config, ConfigArgs};
pub use demo::run_demo;
pub use lex::{run_lex, LexArgs, LexOptions};
