//! services/api/src/web/middleware.rs
//!
//! Session middleware for protecting the session-gated views.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::web::state::AppState;

/// Middleware that requires an active session.
///
/// Authentication is mock throughout the application, so there is no token
/// to validate: the gate is simply whether the session manager currently
/// holds a profile. Without one, the request is rejected and the client is
/// expected to route through the auth view.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if !state.sessions.is_signed_in().await {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(req).await)
}
