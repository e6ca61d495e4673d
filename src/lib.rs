//! Pokedex - interactive CLI for the PokeAPI location-area catalog
//!
//! A line-oriented REPL that pages forward and backward through the remote
//! catalog by following the cursor URLs (`next`/`previous`) each response
//! carries.
//!
//! # Architecture
//!
//! - **Core**: configuration, error handling, and the pagination session
//! - **Api**: wire types and the HTTP page fetcher behind [`api::PageSource`]
//! - **Cli**: the REPL loop and the command table

pub mod api;
pub mod cli;
pub mod core;

// Re-export commonly used items
pub use cli::Repl;
pub use core::{Config, PokedexError, Result};
