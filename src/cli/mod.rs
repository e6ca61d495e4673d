//! CLI module - command-line interface
//!
//! Contains the REPL, the command table, and input tokenization.

pub mod commands;
pub mod repl;

pub use repl::Repl;
