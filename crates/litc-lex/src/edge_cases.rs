//! Edge case tests for litc-lex
