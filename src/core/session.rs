//! Pagination session state
//!
//! Tracks the `next`/`previous` cursor URLs across REPL commands and picks
//! the target URL for a page turn in either direction.

/// Direction of a page turn through the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The two cursor URLs maintained across commands within one session.
///
/// Both cursors start absent. They are updated only after a fetch fully
/// succeeds, so a failed request leaves the session exactly where it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    next: Option<String>,
    previous: Option<String>,
    paged: bool,
}

impl SessionState {
    /// Create a fresh session with both cursors absent
    pub fn new() -> Self {
        Self::default()
    }

    /// URL of the next page, if the API reported one
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// URL of the previous page, if the API reported one
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Whether no page has been fetched yet this session
    pub fn is_initial(&self) -> bool {
        !self.paged
    }

    /// Pick the URL a page turn in `direction` should request.
    ///
    /// Forward falls back to the catalog root when no `next` cursor exists
    /// (first fetch, or the forward edge of the catalog). Backward returns
    /// `None` when there is no previous page; the caller reports "first
    /// page" instead of making a request.
    pub fn target_url(&self, direction: Direction, root_url: &str) -> Option<String> {
        match direction {
            Direction::Forward => Some(
                self.next
                    .clone()
                    .unwrap_or_else(|| root_url.to_string()),
            ),
            Direction::Backward => self.previous.clone(),
        }
    }

    /// Adopt the cursors of a freshly fetched page.
    ///
    /// Either cursor may be `None`, which records that no page exists in
    /// that direction.
    pub fn apply(&mut self, next: Option<String>, previous: Option<String>) {
        self.next = next;
        self.previous = previous;
        self.paged = true;
    }
}
