//! Core module - shared infrastructure for the Pokedex CLI
//!
//! Contains configuration, error handling, and the pagination session state
//! used throughout the application.

pub mod config;
pub mod error;
pub mod session;

pub use config::Config;
pub use error::{PokedexError, Result};
pub use session::{Direction, SessionState};
