//! User routes, mounted at the application root.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    routing::get,
};

use userpay_types::UserId;

use super::handlers::AppState;

/// Builds the user routes that get merged into the application router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(index))
        .route("/users/{id}", get(show))
}

/// User collection index.
async fn index(State(state): State<Arc<AppState>>) -> &'static str {
    state.service.users_index()
}

/// Single user lookup, echoing the identifier.
#[tracing::instrument(skip(state), fields(user_id = %id))]
async fn show(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> String {
    let id = UserId::from(id);
    state.service.user_summary(&id)
}
