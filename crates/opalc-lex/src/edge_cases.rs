//! Edge case tests for opalc-lex.
