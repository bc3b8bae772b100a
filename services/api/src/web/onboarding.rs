//! services/api/src/web/onboarding.rs
//!
//! The onboarding view: localized periods with advice and checklists, and
//! the completion toggle. Session-gated; completion state is ephemeral.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use semey_guide_core::i18n::Language;
use semey_guide_core::onboarding::OnboardingPeriod;
use semey_guide_core::ports::PortError;

use crate::web::state::AppState;

//=========================================================================================
// Request/Response Types
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct TaskDto {
    pub text: String,
    pub completed: bool,
}

#[derive(Serialize, ToSchema)]
pub struct PeriodDto {
    pub id: String,
    /// Time window label, e.g. "Day 1-3".
    pub period: String,
    pub title: String,
    pub advice: Vec<String>,
    pub tasks: Vec<TaskDto>,
}

impl PeriodDto {
    /// Projects one period into the requested language.
    fn localized(period: &OnboardingPeriod, lang: Language) -> Self {
        let (title, advice, tasks) = match lang {
            Language::En => (&period.title, &period.advice, &period.tasks),
            Language::Ru => (&period.title_ru, &period.advice_ru, &period.tasks_ru),
        };
        Self {
            id: period.id.clone(),
            period: period.period.as_str().to_string(),
            title: title.clone(),
            advice: advice.clone(),
            tasks: tasks
                .iter()
                .map(|t| TaskDto {
                    text: t.text.clone(),
                    completed: t.completed,
                })
                .collect(),
        }
    }
}

#[derive(Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct ToggleRequest {
    pub lang: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ToggleResponse {
    pub completed: bool,
}

async fn effective_language(state: &AppState, raw: Option<&str>) -> Language {
    match raw.and_then(Language::parse) {
        Some(lang) => lang,
        None => state.i18n.get().await.0,
    }
}

//=========================================================================================
// Handlers
//=========================================================================================

/// GET /onboarding - The localized onboarding periods
#[utoipa::path(
    get,
    path = "/onboarding",
    params(("lang" = Option<String>, Query, description = "Language tag override")),
    responses(
        (status = 200, description = "Ordered onboarding periods", body = [PeriodDto]),
        (status = 401, description = "No active session")
    )
)]
pub async fn get_onboarding_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
) -> Json<Vec<PeriodDto>> {
    let lang = effective_language(&state, query.lang.as_deref()).await;
    let checklist = state.onboarding.read().await;
    Json(
        checklist
            .periods()
            .iter()
            .map(|p| PeriodDto::localized(p, lang))
            .collect(),
    )
}

/// POST /onboarding/{period}/tasks/{task}/toggle - Flip one checklist item
///
/// Completion is held in memory only and resets when the service restarts.
#[utoipa::path(
    post,
    path = "/onboarding/{period}/tasks/{task}/toggle",
    params(
        ("period" = usize, Path, description = "Period index"),
        ("task" = usize, Path, description = "Task index within the period")
    ),
    request_body = ToggleRequest,
    responses(
        (status = 200, description = "New completion state", body = ToggleResponse),
        (status = 401, description = "No active session"),
        (status = 404, description = "Unknown period or task index")
    )
)]
pub async fn toggle_task_handler(
    State(state): State<Arc<AppState>>,
    Path((period_idx, task_idx)): Path<(usize, usize)>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, (StatusCode, String)> {
    let lang = effective_language(&state, req.lang.as_deref()).await;
    let mut checklist = state.onboarding.write().await;
    match checklist.toggle(period_idx, task_idx, lang) {
        Ok(completed) => Ok(Json(ToggleResponse { completed })),
        Err(PortError::NotFound(what)) => Err((StatusCode::NOT_FOUND, what)),
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::app_state;

    #[tokio::test]
    async fn periods_localize_per_request() {
        let state = app_state(None).await;

        let en = get_onboarding_handler(
            State(state.clone()),
            Query(LangQuery { lang: None }),
        )
        .await;
        assert_eq!(en.0[0].title, "Landing & Essentials");

        let ru = get_onboarding_handler(
            State(state),
            Query(LangQuery {
                lang: Some("ru".to_string()),
            }),
        )
        .await;
        assert_eq!(ru.0[0].title, "Прибытие и основы");
        assert_eq!(en.0.len(), ru.0.len());
    }

    #[tokio::test]
    async fn toggle_round_trips_and_rejects_bad_indices() {
        let state = app_state(None).await;

        let on = toggle_task_handler(
            State(state.clone()),
            Path((0, 0)),
            Json(ToggleRequest { lang: None }),
        )
        .await
        .unwrap();
        assert!(on.0.completed);

        let off = toggle_task_handler(
            State(state.clone()),
            Path((0, 0)),
            Json(ToggleRequest { lang: None }),
        )
        .await
        .unwrap();
        assert!(!off.0.completed);

        let missing = toggle_task_handler(
            State(state),
            Path((9, 0)),
            Json(ToggleRequest { lang: None }),
        )
        .await;
        assert_eq!(missing.unwrap_err().0, StatusCode::NOT_FOUND);
    }
}
