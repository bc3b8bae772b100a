//! services/api/src/web/rest.rs
//!
//! The language endpoints and the master definition for the OpenAPI
//! specification.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use utoipa::{OpenApi, ToSchema};

use semey_guide_core::i18n::{Bundle, Language};

use crate::web::state::AppState;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::auth::sign_in_handler,
        crate::web::auth::register_handler,
        crate::web::auth::sign_out_handler,
        crate::web::places::list_places_handler,
        crate::web::places::get_place_handler,
        crate::web::places::discover_places_handler,
        crate::web::onboarding::get_onboarding_handler,
        crate::web::onboarding::toggle_task_handler,
        crate::web::profile::get_profile_handler,
        crate::web::profile::update_profile_handler,
        crate::web::views::resolve_view_handler,
        get_i18n_handler,
        set_language_handler,
    ),
    components(
        schemas(
            crate::web::auth::SignInRequest,
            crate::web::auth::RegisterRequest,
            crate::web::auth::AuthResponse,
            crate::web::places::PlaceDto,
            crate::web::places::PlaceListResponse,
            crate::web::places::DiscoverRequest,
            crate::web::places::DiscoverResponse,
            crate::web::onboarding::PeriodDto,
            crate::web::onboarding::TaskDto,
            crate::web::onboarding::ToggleRequest,
            crate::web::onboarding::ToggleResponse,
            crate::web::profile::ProfileDto,
            crate::web::profile::UpdateProfileRequest,
            crate::web::views::ViewResolutionDto,
            I18nResponse,
            SetLanguageRequest,
        )
    ),
    tags(
        (name = "Semey Guide API", description = "API endpoints for the student city guide.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// Request/Response Types
//=========================================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct I18nResponse {
    pub lang: String,
    /// The full string bundle for the active language.
    #[schema(value_type = Object)]
    pub bundle: &'static Bundle,
}

#[derive(Deserialize, ToSchema)]
pub struct SetLanguageRequest {
    pub lang: String,
}

//=========================================================================================
// Handlers
//=========================================================================================

/// GET /i18n - The active language and its string bundle
#[utoipa::path(
    get,
    path = "/i18n",
    responses((status = 200, description = "Active language and bundle", body = I18nResponse))
)]
pub async fn get_i18n_handler(State(state): State<Arc<AppState>>) -> Json<I18nResponse> {
    let (lang, bundle) = state.i18n.get().await;
    Json(I18nResponse {
        lang: lang.as_str().to_string(),
        bundle,
    })
}

/// PUT /i18n - Switch and persist the active language
#[utoipa::path(
    put,
    path = "/i18n",
    request_body = SetLanguageRequest,
    responses(
        (status = 200, description = "Language switched", body = I18nResponse),
        (status = 400, description = "Unsupported language tag"),
        (status = 500, description = "Storage write failure")
    )
)]
pub async fn set_language_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetLanguageRequest>,
) -> Result<Json<I18nResponse>, (StatusCode, String)> {
    let lang = Language::parse(&req.lang).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            format!("Unsupported language tag {:?}", req.lang),
        )
    })?;

    state.i18n.set(lang).await.map_err(|e| {
        error!("Failed to persist language choice: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to switch language".to_string(),
        )
    })?;

    let (lang, bundle) = state.i18n.get().await;
    Ok(Json(I18nResponse {
        lang: lang.as_str().to_string(),
        bundle,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::app_state;

    #[tokio::test]
    async fn language_switch_is_visible_on_next_read() {
        let state = app_state(None).await;

        let initial = get_i18n_handler(State(state.clone())).await;
        assert_eq!(initial.0.lang, "en");
        assert_eq!(initial.0.bundle.nav.map, "Map");

        let switched = set_language_handler(
            State(state.clone()),
            Json(SetLanguageRequest {
                lang: "ru".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(switched.0.lang, "ru");
        assert_eq!(switched.0.bundle.nav.map, "Карта");

        let bad = set_language_handler(
            State(state),
            Json(SetLanguageRequest {
                lang: "de".to_string(),
            }),
        )
        .await;
        assert_eq!(bad.unwrap_err().0, StatusCode::BAD_REQUEST);
    }
}
