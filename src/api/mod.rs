//! API module - access to the remote location-area catalog

pub mod client;
pub mod types;

pub use client::{PageSource, PokeApiClient};
pub use types::{LocationArea, LocationPage};
