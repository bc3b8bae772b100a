//! services/api/src/web/profile.rs
//!
//! The profile view: reads and merge-updates the active session's profile
//! through the session manager.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

use semey_guide_core::domain::UserProfile;
use semey_guide_core::session::ProfileUpdate;

use crate::web::state::AppState;

//=========================================================================================
// Request/Response Types
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct ProfileDto {
    pub id: String,
    pub email: String,
    pub name: String,
    pub university: String,
    pub year_of_study: String,
    pub bio: String,
}

impl From<UserProfile> for ProfileDto {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            name: profile.name,
            university: profile.university,
            year_of_study: profile.year_of_study,
            bio: profile.bio,
        }
    }
}

/// Merge-update payload; absent fields are left unchanged.
#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub university: Option<String>,
    pub year_of_study: Option<String>,
    pub bio: Option<String>,
}

//=========================================================================================
// Handlers
//=========================================================================================

/// GET /profile - The active session's profile
#[utoipa::path(
    get,
    path = "/profile",
    responses(
        (status = 200, description = "The active profile", body = ProfileDto),
        (status = 401, description = "No active session")
    )
)]
pub async fn get_profile_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ProfileDto>, (StatusCode, String)> {
    match state.sessions.current().await {
        Some(profile) => Ok(Json(profile.into())),
        None => Err((StatusCode::UNAUTHORIZED, "No active session".to_string())),
    }
}

/// PUT /profile - Merge the supplied fields into the active profile
#[utoipa::path(
    put,
    path = "/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "The updated profile", body = ProfileDto),
        (status = 401, description = "No active session"),
        (status = 500, description = "Storage write failure")
    )
)]
pub async fn update_profile_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileDto>, (StatusCode, String)> {
    let update = ProfileUpdate {
        name: req.name,
        university: req.university,
        year_of_study: req.year_of_study,
        bio: req.bio,
    };

    let updated = state.sessions.update_profile(update).await.map_err(|e| {
        error!("Failed to persist profile update: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to save profile".to_string(),
        )
    })?;

    match updated {
        Some(profile) => Ok(Json(profile.into())),
        None => Err((StatusCode::UNAUTHORIZED, "No active session".to_string())),
    }
}
