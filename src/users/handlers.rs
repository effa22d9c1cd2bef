use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};
use tracing::{debug, error, instrument};

use crate::{state::AppState, users::view::UserListPage};

pub fn list_routes() -> Router<AppState> {
    Router::new().route("/", get(list_users))
}

/// GET / renders every user as a card, newest first.
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let users = state.users.list_newest_first().await.map_err(|e| {
        error!(error = %format!("{e:#}"), "list users failed");
        internal(e)
    })?;
    debug!(count = users.len(), "users loaded");

    let page = UserListPage::from_users(&users).map_err(|e| {
        error!(error = %format!("{e:#}"), "build user list failed");
        internal(e)
    })?;
    let html = page.to_html().map_err(|e| {
        error!(error = %format!("{e:#}"), "render failed");
        internal(e)
    })?;
    Ok(Html(html))
}

fn internal(e: anyhow::Error) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
