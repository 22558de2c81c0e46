//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};

use userpay_types::{PaymentQuery, UserId};

use crate::LookupService;

/// Application state shared across handlers.
pub struct AppState {
    pub service: LookupService,
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Greeting at the application root.
pub async fn hello(State(state): State<Arc<AppState>>) -> &'static str {
    state.service.greeting()
}

/// Payment lookup for a user.
///
/// Echoes the path parameter and the optional `filter` query parameter back
/// as plain text. Any non-empty `{id}` segment matches; there is no
/// not-found branch.
#[tracing::instrument(skip(state), fields(user_id = %id))]
pub async fn payment_lookup(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(query): Query<PaymentQuery>,
) -> String {
    let id = UserId::from(id);
    state.service.payment_summary(&id, query.filter.as_deref())
}
