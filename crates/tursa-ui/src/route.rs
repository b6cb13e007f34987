//! Path → page resolution.
//!
//! Resolution is total: every request path maps to one of the three pages,
//! either rendered directly or through a redirect to its canonical URL.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    About,
    Contact,
}

impl Route {
    /// Navigation order.
    pub const ALL: [Route; 3] = [Route::Home, Route::About, Route::Contact];

    /// Path relative to the base path.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Contact => "/contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Portfolio",
            Route::About => "About",
            Route::Contact => "Contact",
        }
    }

    /// Exact match on a base-relative path. An empty path is the home page.
    pub fn from_relative(path: &str) -> Option<Route> {
        match path {
            "" | "/" => Some(Route::Home),
            "/about" => Some(Route::About),
            "/contact" => Some(Route::Contact),
            _ => None,
        }
    }
}

/// What to do with a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The path is canonical for this page.
    Render(Route),
    /// Send the client to this page's canonical URL.
    Redirect(Route),
}

impl Resolution {
    pub fn route(self) -> Route {
        match self {
            Resolution::Render(r) | Resolution::Redirect(r) => r,
        }
    }
}

/// Normalised deployment prefix: empty for the domain root, otherwise a
/// leading slash and no trailing slash (`/CompanyPortfolio`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self(String::new())
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Absolute URL path of a page.
    pub fn href(&self, route: Route) -> String {
        format!("{}{}", self.0, route.path())
    }

    /// Home page with the given project open.
    pub fn project_href(&self, id: &str) -> String {
        format!("{}?project={}", self.href(Route::Home), id)
    }

    /// URL of a file under the asset root.
    pub fn asset(&self, relative: &str) -> String {
        format!("{}/assets/{}", self.0, relative.trim_start_matches('/'))
    }

    /// Mount point of the asset directory.
    pub fn assets_mount(&self) -> String {
        format!("{}/assets", self.0)
    }

    /// Strip the prefix from a request path. `None` if the path lies outside it.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.is_root() {
            return Some(path);
        }
        let rest = path.strip_prefix(self.0.as_str())?;
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }

    pub fn resolve(&self, path: &str) -> Resolution {
        let Some(relative) = self.strip(path) else {
            return Resolution::Redirect(Route::Home);
        };

        if let Some(route) = Route::from_relative(relative) {
            return Resolution::Render(route);
        }

        // `/about/` and friends: same page, non-canonical spelling.
        match Route::from_relative(relative.trim_end_matches('/')) {
            Some(route) => Resolution::Redirect(route),
            None => Resolution::Redirect(Route::Home),
        }
    }
}
