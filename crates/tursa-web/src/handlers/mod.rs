//! HTTP handlers for all web routes.

pub mod portfolio;
pub mod about;
pub mod contact;
pub mod fallback;

use serde::Deserialize;

/// Query parameters understood by every page.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// `open` renders the mobile menu expanded
    pub menu: Option<String>,
    /// Project to show in the overlay (home page only)
    pub project: Option<String>,
    /// Tile button pressed: open that project, or close it if it is the open one
    pub toggle: Option<String>,
    /// Key pressed while the overlay was showing
    pub key: Option<String>,
    /// Where a click on the overlay landed (`backdrop`, `close`, `content`)
    pub click: Option<String>,
}
