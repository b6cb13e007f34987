//! Template environment and the view models handed to it.
//!
//! Templates are compiled into the binary. Every page extends `layout.html`,
//! which owns the nav/footer chrome and a separate `overlay-root` element the
//! project overlay renders into.

use chrono::Datelike;
use minijinja::Environment;
use serde::Serialize;
use tursa_common::content::{self, AboutCard, SocialLink};
use tursa_common::ProjectRecord;
use tursa_ui::{BasePath, ClickTarget, Disclosure, Focus, NavLink, Route, Shell, DISMISS_KEY};

use crate::error::Result;
use crate::state::AppState;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html",    include_str!("../templates/layout.html")),
    ("portfolio.html", include_str!("../templates/portfolio.html")),
    ("about.html",     include_str!("../templates/about.html")),
    ("contact.html",   include_str!("../templates/contact.html")),
];

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        for &(name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }
}

// ── Chrome ───────────────────────────────────────────────────────────────────

/// Everything `layout.html` needs: brand, nav, footer, asset URLs.
#[derive(Debug, Serialize)]
pub struct SiteView {
    pub brand: String,
    pub year: i32,
    pub css_href: String,
    pub js_href: String,
    pub nav: Vec<NavLink>,
    pub menu_open: bool,
    pub menu_toggle_href: String,
    pub description: &'static str,
    pub resources: &'static [&'static str],
    pub socials: &'static [SocialLink],
}

impl SiteView {
    pub fn new(state: &AppState, shell: &Shell) -> Self {
        Self {
            brand: state.brand.clone(),
            year: chrono::Utc::now().year(),
            css_href: state.base.asset("css/site.css"),
            js_href: state.base.asset("js/site.js"),
            nav: shell.nav_links(&state.base),
            menu_open: shell.menu_open(),
            menu_toggle_href: shell.menu_toggle_href(&state.base),
            description: content::FOOTER_DESCRIPTION,
            resources: content::RESOURCE_LINKS,
            socials: content::SOCIAL_LINKS,
        }
    }
}

// ── Projects ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProjectView {
    pub id: &'static str,
    pub name: &'static str,
    pub tag: &'static str,
    pub blurb: &'static str,
    pub details: &'static str,
    pub highlights: &'static [&'static str],
    /// `None` renders the text placeholder instead of an `<img>`.
    pub cover_url: Option<String>,
    pub placeholder: &'static str,
    pub is_open: bool,
    /// Tile button target: replays a toggle of this project.
    pub toggle_href: String,
    pub open_href: String,
    /// Focus returns here after its overlay was closed.
    pub return_focus: bool,
}

impl ProjectView {
    pub fn new(state: &AppState, record: &ProjectRecord, disclosure: &Disclosure) -> Self {
        Self {
            id: record.id,
            name: record.name,
            tag: record.tag,
            blurb: record.blurb,
            details: record.details,
            highlights: record.highlights,
            cover_url: state.cover_url(record.id).map(str::to_string),
            placeholder: record.placeholder_label(),
            is_open: disclosure.is_open(record.id),
            toggle_href: event_href(&state.base, disclosure, &format!("toggle={}", record.id), record.id),
            open_href: state.base.project_href(record.id),
            return_focus: disclosure.focus() == Focus::Trigger(record.id.to_string()),
        }
    }
}

/// Home page URL that carries the current disclosure state plus one event
/// (`toggle=`, `key=` or `click=`) for the page handler to replay. The
/// fragment lands on the tile so the page scrolls back to it.
pub fn event_href(base: &BasePath, disclosure: &Disclosure, event: &str, tile: &str) -> String {
    let home = base.href(Route::Home);
    match disclosure.active_id() {
        Some(active) => format!("{home}?project={active}&{event}#tile-{tile}"),
        None => format!("{home}?{event}#tile-{tile}"),
    }
}

#[derive(Debug, Serialize)]
pub struct OverlayView {
    pub project: ProjectView,
    /// Target of the dimmed area around the dialog.
    pub backdrop_href: String,
    /// Target of the dialog's close button.
    pub close_href: String,
    /// Where the script navigates on the dismiss key.
    pub key_href: String,
}

impl OverlayView {
    pub fn new(state: &AppState, record: &ProjectRecord, disclosure: &Disclosure) -> Self {
        let click = |target: ClickTarget| {
            event_href(&state.base, disclosure, &format!("click={}", target.as_query()), record.id)
        };
        Self {
            project: ProjectView::new(state, record, disclosure),
            backdrop_href: click(ClickTarget::Backdrop),
            close_href: click(ClickTarget::CloseControl),
            key_href: event_href(&state.base, disclosure, &format!("key={DISMISS_KEY}"), record.id),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PortfolioView {
    pub site: SiteView,
    pub page_title: &'static str,
    pub featured: ProjectView,
    pub projects: Vec<ProjectView>,
    pub overlay: Option<OverlayView>,
    pub scroll_locked: bool,
}

#[derive(Debug, Serialize)]
pub struct AboutView {
    pub site: SiteView,
    pub page_title: &'static str,
    pub headline: &'static str,
    pub intro: &'static str,
    pub cards: &'static [AboutCard],
}

#[derive(Debug, Serialize)]
pub struct ContactView {
    pub site: SiteView,
    pub page_title: &'static str,
    pub action: String,
    pub api_href: String,
    pub form_id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: tursa_ui::FormStatus,
    pub status_message: Option<&'static str>,
    pub submit_disabled: bool,
    /// Validation note, e.g. "Email is required"
    pub notice: Option<String>,
}
