//! Wire types for the location-area catalog
//!
//! Mirrors the PokeAPI pagination envelope. Unknown fields are ignored and
//! missing cursors decode as absent rather than failing.

use serde::Deserialize;

/// One page of the paginated location-area catalog
#[derive(Debug, Clone, Deserialize)]
pub struct LocationPage {
    /// URL of the next page, absent past the forward edge
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page, absent on the first page
    #[serde(default)]
    pub previous: Option<String>,
    /// Location areas in response order
    #[serde(default)]
    pub results: Vec<LocationArea>,
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationArea {
    pub name: String,
    pub url: String,
}
