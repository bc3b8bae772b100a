//! services/api/src/test_support.rs
//!
//! Shared doubles for handler tests: an in-memory key-value store, a
//! scriptable discovery stub, and an `AppState` fixture over both.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::Level;

use semey_guide_core::catalog::PlaceCatalog;
use semey_guide_core::domain::DiscoveryResult;
use semey_guide_core::i18n::LocalizationProvider;
use semey_guide_core::onboarding::OnboardingChecklist;
use semey_guide_core::ports::{DiscoveryService, KeyValueStore, PortResult};
use semey_guide_core::seed::{onboarding_periods, seed_places};
use semey_guide_core::session::SessionManager;

use crate::config::Config;
use crate::web::state::AppState;

#[derive(Default)]
pub(crate) struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.map.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> PortResult<()> {
        self.map
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> PortResult<()> {
        self.map.lock().unwrap().remove(key);
        Ok(())
    }
}

/// A discovery double that always yields the configured outcome.
pub(crate) struct StubDiscovery {
    result: Option<DiscoveryResult>,
}

impl StubDiscovery {
    /// Simulates a transport failure: every call degrades to "no result".
    pub(crate) fn failing() -> Arc<Self> {
        Arc::new(Self { result: None })
    }

    pub(crate) fn returning(result: DiscoveryResult) -> Arc<Self> {
        Arc::new(Self {
            result: Some(result),
        })
    }
}

#[async_trait]
impl DiscoveryService for StubDiscovery {
    async fn discover(&self, _topic: &str) -> Option<DiscoveryResult> {
        self.result.clone()
    }
}

/// Builds a fully wired state over in-memory doubles.
pub(crate) async fn app_state(discovery: Option<Arc<StubDiscovery>>) -> Arc<AppState> {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::default());
    let config = Arc::new(Config {
        bind_address: "127.0.0.1:0".parse().unwrap(),
        log_level: Level::INFO,
        data_dir: std::env::temp_dir(),
        openai_api_key: None,
        discovery_model: "test".to_string(),
    });

    let sessions = Arc::new(SessionManager::load(store.clone()).await.unwrap());
    let i18n = Arc::new(LocalizationProvider::load(store.clone()).await.unwrap());
    let discovery: Arc<dyn DiscoveryService> = match discovery {
        Some(stub) => stub,
        None => StubDiscovery::failing(),
    };

    Arc::new(AppState {
        config,
        sessions,
        i18n,
        catalog: RwLock::new(PlaceCatalog::new(seed_places())),
        onboarding: RwLock::new(OnboardingChecklist::new(onboarding_periods())),
        discovery,
    })
}
