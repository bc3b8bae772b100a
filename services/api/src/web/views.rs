//! services/api/src/web/views.rs
//!
//! View resolution: maps a normalized view name to the view to render,
//! arbitrating access for the session-gated views.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use semey_guide_core::router::{self, Resolution, ViewId};

use crate::web::state::AppState;

/// The outcome of a view request. Exactly one of `view` or `redirect` is
/// set; `return_to` accompanies a redirect so the auth view can send the
/// user back after sign-in.
#[derive(Debug, Serialize, ToSchema)]
pub struct ViewResolutionDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_to: Option<String>,
}

/// GET /views/{view} - Resolve a view request against the active session
#[utoipa::path(
    get,
    path = "/views/{view}",
    params(("view" = String, Path, description = "One of map, auth, onboarding, profile")),
    responses(
        (status = 200, description = "Resolution outcome", body = ViewResolutionDto),
        (status = 404, description = "Unknown view name")
    )
)]
pub async fn resolve_view_handler(
    State(state): State<Arc<AppState>>,
    Path(view): Path<String>,
) -> Result<Json<ViewResolutionDto>, (StatusCode, String)> {
    let requested = ViewId::parse(&view)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Unknown view {:?}", view)))?;

    let signed_in = state.sessions.is_signed_in().await;
    let dto = match router::resolve(requested, signed_in) {
        Resolution::Granted(view) => ViewResolutionDto {
            view: Some(view.as_str().to_string()),
            redirect: None,
            return_to: None,
        },
        Resolution::RedirectToAuth { return_to } => ViewResolutionDto {
            view: None,
            redirect: Some(ViewId::Auth.as_str().to_string()),
            return_to: Some(return_to.as_str().to_string()),
        },
    };
    Ok(Json(dto))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::app_state;
    use crate::web::auth::{sign_in_handler, SignInRequest};

    #[tokio::test]
    async fn gated_view_redirects_then_sign_in_returns_there() {
        let state = app_state(None).await;

        let resolution =
            resolve_view_handler(State(state.clone()), Path("onboarding".to_string()))
                .await
                .unwrap();
        assert_eq!(resolution.0.redirect.as_deref(), Some("auth"));
        let remembered = resolution.0.return_to.clone().unwrap();
        assert_eq!(remembered, "onboarding");

        let auth = sign_in_handler(
            State(state.clone()),
            Json(SignInRequest {
                email: "a@b.kz".to_string(),
                password: "pw".to_string(),
                return_to: Some(remembered),
            }),
        )
        .await
        .unwrap();
        assert_eq!(auth.0.landing_view, "onboarding");

        let after = resolve_view_handler(State(state), Path("onboarding".to_string()))
            .await
            .unwrap();
        assert_eq!(after.0.view.as_deref(), Some("onboarding"));
    }

    #[tokio::test]
    async fn open_views_resolve_directly_and_unknown_views_404() {
        let state = app_state(None).await;

        let map = resolve_view_handler(State(state.clone()), Path("map".to_string()))
            .await
            .unwrap();
        assert_eq!(map.0.view.as_deref(), Some("map"));

        let unknown =
            resolve_view_handler(State(state), Path("settings".to_string())).await;
        assert_eq!(unknown.unwrap_err().0, StatusCode::NOT_FOUND);
    }
}
