//! Project disclosure: at most one project is open at a time.
//!
//! Opening a project replaces whichever one was open. While a project is
//! open the overlay owns the page: background scroll is locked and focus sits
//! on the overlay's close control. Closing hands focus back to the tile that
//! opened it.

use tursa_common::{Catalog, ProjectRecord};

/// Keyboard key that dismisses the overlay.
pub const DISMISS_KEY: &str = "Escape";

/// Where a click inside the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the dialog.
    Backdrop,
    /// The dialog's close button.
    CloseControl,
    /// Anything else inside the dialog content.
    Content,
}

impl ClickTarget {
    /// Value carried in a `click=` query parameter.
    pub fn as_query(self) -> &'static str {
        match self {
            ClickTarget::Backdrop => "backdrop",
            ClickTarget::CloseControl => "close",
            ClickTarget::Content => "content",
        }
    }

    pub fn from_query(value: &str) -> Option<Self> {
        match value {
            "backdrop" => Some(ClickTarget::Backdrop),
            "close" => Some(ClickTarget::CloseControl),
            "content" => Some(ClickTarget::Content),
            _ => None,
        }
    }
}

/// Element that should hold focus after the last transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    /// No focus change requested.
    Unchanged,
    /// The open overlay's close button.
    CloseControl,
    /// The tile of the project that was just closed.
    Trigger(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Disclosure {
    active: Option<String>,
    return_to: Option<String>,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from a `project` query value. Unknown ids leave nothing open.
    pub fn from_query(catalog: &Catalog, project: Option<&str>) -> Self {
        let mut disclosure = Self::new();
        if let Some(id) = project {
            disclosure.open(catalog, id);
        }
        disclosure
    }

    /// Open `id`, replacing any open project. Returns false (and changes
    /// nothing) if the catalog has no such project.
    pub fn open(&mut self, catalog: &Catalog, id: &str) -> bool {
        if !catalog.contains(id) {
            return false;
        }
        self.active = Some(id.to_string());
        self.return_to = None;
        true
    }

    /// Close the open project, if any.
    pub fn close(&mut self) {
        if let Some(id) = self.active.take() {
            self.return_to = Some(id);
        }
    }

    /// Tile button behaviour: open, or close when it is already the open one.
    pub fn toggle(&mut self, catalog: &Catalog, id: &str) {
        if self.is_open(id) {
            self.close();
        } else {
            self.open(catalog, id);
        }
    }

    /// Returns true if the key dismissed the overlay.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == DISMISS_KEY && self.active.is_some() {
            self.close();
            return true;
        }
        false
    }

    /// Returns true if the click dismissed the overlay. Clicks on the
    /// content never do, except on its close control.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseControl if self.active.is_some() => {
                self.close();
                true
            }
            _ => false,
        }
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn active<'c>(&self, catalog: &'c Catalog) -> Option<&'c ProjectRecord> {
        self.active.as_deref().and_then(|id| catalog.get(id))
    }

    /// Background scroll is suppressed for the overlay's lifetime.
    pub fn scroll_locked(&self) -> bool {
        self.active.is_some()
    }

    pub fn focus(&self) -> Focus {
        match (&self.active, &self.return_to) {
            (Some(_), _) => Focus::CloseControl,
            (None, Some(id)) => Focus::Trigger(id.clone()),
            (None, None) => Focus::Unchanged,
        }
    }
}
