//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use semey_guide_core::catalog::PlaceCatalog;
use semey_guide_core::i18n::LocalizationProvider;
use semey_guide_core::onboarding::OnboardingChecklist;
use semey_guide_core::ports::DiscoveryService;
use semey_guide_core::session::SessionManager;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The shared application state, created once at startup and passed to all
/// handlers. Views receive exactly the components they consume; there are
/// no ambient globals.
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<SessionManager>,
    pub i18n: Arc<LocalizationProvider>,
    /// Seed places plus the bounded discovered partition.
    pub catalog: RwLock<PlaceCatalog>,
    /// Checklist completion is process-lifetime only.
    pub onboarding: RwLock<OnboardingChecklist>,
    pub discovery: Arc<dyn DiscoveryService>,
}
