//! Catch-all for paths no page claims.

use axum::extract::State;
use axum::http::Uri;
use axum::response::Redirect;
use tracing::debug;

use crate::state::SharedState;

/// Send the client to the canonical URL of whatever page the path resolves to
/// (home for anything unknown).
pub async fn fallback(State(state): State<SharedState>, uri: Uri) -> Redirect {
    let target = state.base.href(state.base.resolve(uri.path()).route());
    debug!("Redirecting {} to {}", uri.path(), target);
    Redirect::to(&target)
}
