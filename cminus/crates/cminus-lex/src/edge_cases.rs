//! Edge case tests for cminus-lex
