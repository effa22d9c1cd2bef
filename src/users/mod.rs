use crate::state::AppState;
use axum::Router;

pub mod handlers;
#[cfg(test)]
pub(crate) mod memory;
pub mod password;
pub mod repo;
pub mod repo_types;
pub mod view;

pub use repo::{PgUserStore, UserStore};
pub use repo_types::User;

pub fn router() -> Router<AppState> {
    Router::new().merge(handlers::list_routes())
}
