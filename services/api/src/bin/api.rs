//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{DisabledDiscovery, FileStore, OpenAiDiscoveryAdapter},
    config::Config,
    error::ApiError,
    web::{
        auth::{register_handler, sign_in_handler, sign_out_handler},
        onboarding::{get_onboarding_handler, toggle_task_handler},
        places::{discover_places_handler, get_place_handler, list_places_handler},
        profile::{get_profile_handler, update_profile_handler},
        rest::{get_i18n_handler, set_language_handler},
        require_session,
        state::AppState,
        views::resolve_view_handler,
        ApiDoc,
    },
};
use async_openai::{config::OpenAIConfig, Client};
use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use semey_guide_core::catalog::PlaceCatalog;
use semey_guide_core::i18n::LocalizationProvider;
use semey_guide_core::onboarding::OnboardingChecklist;
use semey_guide_core::ports::{DiscoveryService, KeyValueStore};
use semey_guide_core::seed::{onboarding_periods, seed_places};
use semey_guide_core::session::SessionManager;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Open the Key-Value Store & Restore Persisted State ---
    info!("Opening key-value store at {}", config.data_dir.display());
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.data_dir)?);
    let sessions = Arc::new(SessionManager::load(store.clone()).await?);
    let i18n = Arc::new(LocalizationProvider::load(store.clone()).await?);
    if sessions.is_signed_in().await {
        info!("Restored a persisted session");
    }

    // --- 3. Initialize the Discovery Adapter ---
    let discovery: Arc<dyn DiscoveryService> = match &config.openai_api_key {
        Some(api_key) => {
            let openai_config = OpenAIConfig::new().with_api_key(api_key);
            Arc::new(OpenAiDiscoveryAdapter::new(
                Client::with_config(openai_config),
                config.discovery_model.clone(),
            ))
        }
        None => {
            info!("OPENAI_API_KEY not set; place discovery will return no results");
            Arc::new(DisabledDiscovery)
        }
    };

    // --- 4. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        config: config.clone(),
        sessions,
        i18n,
        catalog: RwLock::new(PlaceCatalog::new(seed_places())),
        onboarding: RwLock::new(OnboardingChecklist::new(onboarding_periods())),
        discovery,
    });

    let cors = CorsLayer::new()
        .allow_origin("http://localhost:3000".parse::<HeaderValue>().unwrap())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]);

    // --- 5. Create the Web Router ---
    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/auth/sign-in", post(sign_in_handler))
        .route("/auth/register", post(register_handler))
        .route("/auth/sign-out", post(sign_out_handler))
        .route("/places", get(list_places_handler))
        .route("/places/discover", post(discover_places_handler))
        .route("/places/{id}", get(get_place_handler))
        .route("/views/{view}", get(resolve_view_handler))
        .route("/i18n", get(get_i18n_handler).put(set_language_handler));

    // Session-gated routes
    let gated_routes = Router::new()
        .route("/onboarding", get(get_onboarding_handler))
        .route(
            "/onboarding/{period}/tasks/{task}/toggle",
            post(toggle_task_handler),
        )
        .route(
            "/profile",
            get(get_profile_handler).put(update_profile_handler),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            require_session,
        ));

    // Combine API routes
    let api_router = Router::new()
        .merge(public_routes)
        .merge(gated_routes)
        .layer(cors)
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 6. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
