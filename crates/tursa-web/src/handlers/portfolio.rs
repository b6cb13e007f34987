//! Portfolio (home) page: featured project, project grid and the detail overlay.

use axum::extract::{Query, State};
use axum::response::Html;
use tursa_ui::{ClickTarget, Disclosure, Route, Shell};

use crate::error::Result;
use crate::handlers::PageQuery;
use crate::render::{OverlayView, PortfolioView, ProjectView, SiteView};
use crate::state::{AppState, SharedState};

pub async fn portfolio_page(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let shell = Shell::from_query(Route::Home, query.menu.as_deref());
    let disclosure = disclosure_from_query(&state, &query);
    let view = portfolio_view(&state, &shell, &disclosure);
    Ok(Html(state.renderer.render("portfolio.html", view)?))
}

/// Rebuild the disclosure from `project`, then replay the one event the link
/// carried. Closing through an event leaves focus owed to the project's tile.
fn disclosure_from_query(state: &AppState, query: &PageQuery) -> Disclosure {
    let catalog = &state.catalog;
    let mut disclosure = Disclosure::from_query(catalog, query.project.as_deref());

    if let Some(id) = query.toggle.as_deref() {
        disclosure.toggle(catalog, id);
    }
    if let Some(key) = query.key.as_deref() {
        disclosure.handle_key(key);
    }
    if let Some(target) = query.click.as_deref().and_then(ClickTarget::from_query) {
        disclosure.handle_click(target);
    }
    disclosure
}

fn portfolio_view(state: &AppState, shell: &Shell, disclosure: &Disclosure) -> PortfolioView {
    let catalog = &state.catalog;
    let overlay = disclosure
        .active(catalog)
        .map(|record| OverlayView::new(state, record, disclosure));

    PortfolioView {
        site: SiteView::new(state, shell),
        page_title: "Portfolio",
        featured: ProjectView::new(state, catalog.featured(), disclosure),
        projects: catalog
            .secondary()
            .iter()
            .map(|p| ProjectView::new(state, p, disclosure))
            .collect(),
        overlay,
        scroll_locked: disclosure.scroll_locked(),
    }
}
