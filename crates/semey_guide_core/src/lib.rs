pub mod catalog;
pub mod domain;
pub mod i18n;
pub mod onboarding;
pub mod ports;
pub mod router;
pub mod seed;
pub mod session;

pub use catalog::{PlaceCatalog, DISCOVERED_CAP};
pub use domain::{DiscoveryResult, Place, PlaceCategory, RawChunk, Signal, UserProfile};
pub use i18n::{Language, LocalizationProvider};
pub use onboarding::OnboardingChecklist;
pub use ports::{DiscoveryService, KeyValueStore, PortError, PortResult};
pub use router::{Resolution, ViewId};
pub use session::SessionManager;
