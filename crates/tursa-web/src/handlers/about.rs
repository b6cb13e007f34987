//! About page.

use axum::extract::{Query, State};
use axum::response::Html;
use tursa_common::content;
use tursa_ui::{Route, Shell};

use crate::error::Result;
use crate::handlers::PageQuery;
use crate::render::{AboutView, SiteView};
use crate::state::SharedState;

pub async fn about_page(
    State(state): State<SharedState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>> {
    let shell = Shell::from_query(Route::About, query.menu.as_deref());
    let view = AboutView {
        site: SiteView::new(&state, &shell),
        page_title: "About",
        headline: content::ABOUT_HEADLINE,
        intro: content::ABOUT_INTRO,
        cards: content::ABOUT_CARDS,
    };
    Ok(Html(state.renderer.render("about.html", view)?))
}
