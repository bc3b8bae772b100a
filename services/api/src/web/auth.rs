//! services/api/src/web/auth.rs
//!
//! Authentication endpoints for sign-in, registration, and sign-out.
//!
//! This is mock authentication by contract: no credential is ever verified
//! and no business rule rejects a well-formed request. The only failure a
//! caller can see is a storage-write failure.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

use semey_guide_core::router::{self, Resolution, ViewId};
use semey_guide_core::session::NewProfile;

use crate::web::profile::ProfileDto;
use crate::web::state::AppState;

//=========================================================================================
// Request/Response Types
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    /// View the user originally asked for before being sent to auth.
    pub return_to: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub university: Option<String>,
    pub year_of_study: Option<String>,
    pub bio: Option<String>,
    pub return_to: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AuthResponse {
    pub profile: ProfileDto,
    /// The view to land on after authentication.
    pub landing_view: String,
}

/// Resolves the remembered view now that a session exists. Unknown or
/// absent names land on the map.
fn landing_view(return_to: Option<&str>) -> ViewId {
    let requested = return_to.and_then(ViewId::parse).unwrap_or(ViewId::Map);
    match router::resolve(requested, true) {
        Resolution::Granted(view) => view,
        Resolution::RedirectToAuth { .. } => ViewId::Map,
    }
}

//=========================================================================================
// Handlers
//=========================================================================================

/// POST /auth/sign-in - Start a session from any credentials
#[utoipa::path(
    post,
    path = "/auth/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Session started", body = AuthResponse),
        (status = 500, description = "Storage write failure")
    )
)]
pub async fn sign_in_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    let profile = state
        .sessions
        .sign_in(&req.email, &req.password)
        .await
        .map_err(|e| {
            error!("Failed to persist session: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to start session".to_string(),
            )
        })?;

    Ok(Json(AuthResponse {
        profile: profile.into(),
        landing_view: landing_view(req.return_to.as_deref()).as_str().to_string(),
    }))
}

/// POST /auth/register - Create a session from a partial profile
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 500, description = "Storage write failure")
    )
)]
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), (StatusCode, String)> {
    let profile = state
        .sessions
        .register(NewProfile {
            email: req.email,
            name: req.name,
            university: req.university,
            year_of_study: req.year_of_study,
            bio: req.bio,
        })
        .await
        .map_err(|e| {
            error!("Failed to persist registration: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create account".to_string(),
            )
        })?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            profile: profile.into(),
            landing_view: landing_view(req.return_to.as_deref()).as_str().to_string(),
        }),
    ))
}

/// POST /auth/sign-out - End the session everywhere
#[utoipa::path(
    post,
    path = "/auth/sign-out",
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Storage write failure")
    )
)]
pub async fn sign_out_handler(
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, (StatusCode, String)> {
    state.sessions.sign_out().await.map_err(|e| {
        error!("Failed to clear session: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to sign out".to_string(),
        )
    })?;
    Ok(StatusCode::NO_CONTENT)
}
