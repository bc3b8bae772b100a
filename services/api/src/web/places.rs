//! services/api/src/web/places.rs
//!
//! The map view's data endpoints: the filtered place catalog, single-place
//! lookup for marker activation, and the AI discovery trigger.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use semey_guide_core::catalog::places_from_chunks;
use semey_guide_core::domain::{Place, PlaceCategory};

use crate::web::state::AppState;

//=========================================================================================
// Request/Response Types
//=========================================================================================

#[derive(Debug, Serialize, ToSchema)]
pub struct PlaceDto {
    pub id: String,
    pub name: String,
    pub name_ru: Option<String>,
    pub category: String,
    pub description: String,
    pub description_ru: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub tags: Vec<String>,
    pub signals: Vec<String>,
    pub university_verified: bool,
    pub address: String,
    pub address_ru: Option<String>,
    pub link: Option<String>,
}

impl From<Place> for PlaceDto {
    fn from(place: Place) -> Self {
        Self {
            id: place.id,
            name: place.name,
            name_ru: place.name_ru,
            category: place.category.as_str().to_string(),
            description: place.description,
            description_ru: place.description_ru,
            lat: place.lat,
            lng: place.lng,
            tags: place.tags,
            signals: place.signals.iter().map(|s| s.as_str().to_string()).collect(),
            university_verified: place.university_verified,
            address: place.address,
            address_ru: place.address_ru,
            link: place.link,
        }
    }
}

#[derive(Deserialize)]
pub struct PlacesQuery {
    /// Category display name; absent means no category filter.
    pub category: Option<String>,
    /// Free-text search; absent means match everything.
    pub q: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PlaceListResponse {
    pub total: usize,
    pub places: Vec<PlaceDto>,
}

#[derive(Deserialize, ToSchema)]
pub struct DiscoverRequest {
    /// Category to discover places for; absent means a general
    /// student-friendly sweep.
    pub category: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct DiscoverResponse {
    /// Number of places added to the discovered partition. Zero with no
    /// narrative means the discovery call yielded nothing; the catalog is
    /// unchanged and the condition is not an error.
    pub added: usize,
    pub narrative: Option<String>,
    pub places: Vec<PlaceDto>,
}

fn parse_category(raw: Option<&str>) -> Result<Option<PlaceCategory>, (StatusCode, String)> {
    match raw {
        None => Ok(None),
        Some(value) => PlaceCategory::parse(value).map(Some).ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                format!("Unknown category {:?}", value),
            )
        }),
    }
}

//=========================================================================================
// Handlers
//=========================================================================================

/// GET /places - The catalog, filtered by category and search text
#[utoipa::path(
    get,
    path = "/places",
    params(
        ("category" = Option<String>, Query, description = "Category display name"),
        ("q" = Option<String>, Query, description = "Case-insensitive search text")
    ),
    responses(
        (status = 200, description = "Filtered places in catalog order", body = PlaceListResponse),
        (status = 400, description = "Unknown category")
    )
)]
pub async fn list_places_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlacesQuery>,
) -> Result<Json<PlaceListResponse>, (StatusCode, String)> {
    let category = parse_category(query.category.as_deref())?;
    let search = query.q.unwrap_or_default();

    let places = state.catalog.read().await.filter(category, &search);
    Ok(Json(PlaceListResponse {
        total: places.len(),
        places: places.into_iter().map(PlaceDto::from).collect(),
    }))
}

/// GET /places/{id} - Resolve one place, e.g. from a map-marker activation
#[utoipa::path(
    get,
    path = "/places/{id}",
    params(("id" = String, Path, description = "Place identifier")),
    responses(
        (status = 200, description = "The place", body = PlaceDto),
        (status = 404, description = "Unknown place id")
    )
)]
pub async fn get_place_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<PlaceDto>, (StatusCode, String)> {
    state
        .catalog
        .read()
        .await
        .find(&id)
        .map(|place| Json(place.into()))
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("No place {:?}", id)))
}

/// POST /places/discover - One discovery round trip against the AI service
///
/// Failure of the external service is not an error here: the response then
/// reports zero added places and the catalog is left untouched.
#[utoipa::path(
    post,
    path = "/places/discover",
    request_body = DiscoverRequest,
    responses(
        (status = 200, description = "Discovery outcome", body = DiscoverResponse),
        (status = 400, description = "Unknown category")
    )
)]
pub async fn discover_places_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DiscoverRequest>,
) -> Result<Json<DiscoverResponse>, (StatusCode, String)> {
    let category = parse_category(req.category.as_deref())?;
    let topic = category
        .map(|c| c.as_str().to_string())
        .unwrap_or_else(|| "student-friendly places".to_string());

    let Some(result) = state.discovery.discover(&topic).await else {
        return Ok(Json(DiscoverResponse {
            added: 0,
            narrative: None,
            places: Vec::new(),
        }));
    };

    let new_places = places_from_chunks(&result.chunks, category);
    state
        .catalog
        .write()
        .await
        .add_discovered(new_places.clone());

    Ok(Json(DiscoverResponse {
        added: new_places.len(),
        narrative: Some(result.narrative),
        places: new_places.into_iter().map(PlaceDto::from).collect(),
    }))
}
