//! Site chrome: current page, nav links and the mobile menu toggle.

use serde::Serialize;

use crate::route::{BasePath, Route};

/// Query value that renders the mobile menu expanded (`?menu=open`).
pub const MENU_OPEN: &str = "open";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shell {
    current: Route,
    menu_open: bool,
}

impl Shell {
    /// Fresh chrome for a page; the menu starts closed.
    pub fn new(current: Route) -> Self {
        Self { current, menu_open: false }
    }

    /// Rebuild from a `menu` query value.
    pub fn from_query(current: Route, menu: Option<&str>) -> Self {
        Self { current, menu_open: menu == Some(MENU_OPEN) }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Switch page. Always closes the menu.
    pub fn navigate(&mut self, to: Route) {
        self.current = to;
        self.menu_open = false;
    }

    /// One link per page. Following a link is a navigation, so none of them
    /// carries the menu state.
    pub fn nav_links(&self, base: &BasePath) -> Vec<NavLink> {
        Route::ALL
            .iter()
            .map(|&route| {
                let mut next = *self;
                next.navigate(route);
                NavLink {
                    label: route.label(),
                    href: next.href(base),
                    active: route == self.current,
                }
            })
            .collect()
    }

    /// Target of the hamburger button: the current page with the menu flipped.
    pub fn menu_toggle_href(&self, base: &BasePath) -> String {
        let mut next = *self;
        next.toggle_menu();
        next.href(base)
    }

    /// URL that renders exactly this state.
    pub fn href(&self, base: &BasePath) -> String {
        let href = base.href(self.current);
        if self.menu_open {
            format!("{href}?menu={MENU_OPEN}")
        } else {
            href
        }
    }
}
