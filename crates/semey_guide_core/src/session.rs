//! crates/semey_guide_core/src/session.rs
//!
//! The session manager: the single source of truth for "who is using the
//! app now". Wraps the persistent key-value store and owns serialization of
//! the current profile snapshot.
//!
//! Authentication here is mock: sign-in and registration never verify
//! credentials against anything, they synthesize a profile. The only
//! failure mode of a mutating operation is a storage-write failure, which is
//! surfaced to the caller.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

use crate::domain::UserProfile;
use crate::ports::{KeyValueStore, PortError, PortResult};

/// Storage key holding the serialized active session profile.
pub const SESSION_KEY: &str = "ssg_user";

const DEFAULT_UNIVERSITY: &str = "SMU Semey";
const DEFAULT_YEAR_OF_STUDY: &str = "1";

/// Fields supplied at registration. Unset fields get fixed defaults.
#[derive(Debug, Clone, Default)]
pub struct NewProfile {
    pub email: Option<String>,
    pub name: Option<String>,
    pub university: Option<String>,
    pub year_of_study: Option<String>,
    pub bio: Option<String>,
}

/// A partial profile for merge-updates. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub university: Option<String>,
    pub year_of_study: Option<String>,
    pub bio: Option<String>,
}

/// Owns the active session and mirrors every mutation to the store before
/// returning. At most one session is active per manager instance.
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    current: RwLock<Option<UserProfile>>,
}

impl SessionManager {
    /// Creates a manager, restoring any persisted session snapshot.
    ///
    /// An absent key means signed-out (first run); a corrupt snapshot is
    /// treated the same way after a warning. Neither is fatal.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> PortResult<Self> {
        let current = match store.get(SESSION_KEY).await? {
            Some(raw) => match serde_json::from_str::<UserProfile>(&raw) {
                Ok(profile) => Some(profile),
                Err(e) => {
                    warn!("Discarding unreadable session snapshot: {}", e);
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            store,
            current: RwLock::new(current),
        })
    }

    /// The active profile, if any.
    pub async fn current(&self) -> Option<UserProfile> {
        self.current.read().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Mock sign-in: accepts any credentials and synthesizes the profile
    /// deterministically from the email. The password is ignored.
    pub async fn sign_in(&self, email: &str, _password: &str) -> PortResult<UserProfile> {
        let name = email.split('@').next().unwrap_or(email).to_string();
        let profile = UserProfile {
            id: "1".to_string(),
            email: email.to_string(),
            name,
            university: DEFAULT_UNIVERSITY.to_string(),
            year_of_study: DEFAULT_YEAR_OF_STUDY.to_string(),
            bio: "Medical student in Semey.".to_string(),
        };

        self.replace(profile.clone()).await?;
        Ok(profile)
    }

    /// Mock registration: fills unset fields with fixed defaults and a
    /// random identifier. Like sign-in, nothing is validated.
    pub async fn register(&self, data: NewProfile) -> PortResult<UserProfile> {
        let profile = UserProfile {
            id: Uuid::new_v4().to_string(),
            email: data.email.unwrap_or_else(|| "guest@example.com".to_string()),
            name: data.name.unwrap_or_else(|| "Anonymous".to_string()),
            university: data
                .university
                .unwrap_or_else(|| DEFAULT_UNIVERSITY.to_string()),
            year_of_study: data
                .year_of_study
                .unwrap_or_else(|| DEFAULT_YEAR_OF_STUDY.to_string()),
            bio: data.bio.unwrap_or_default(),
        };

        self.replace(profile.clone()).await?;
        Ok(profile)
    }

    /// Merges the supplied fields into the active profile and persists the
    /// result. Returns `Ok(None)` when no session is active; the caller
    /// decides how to report that condition.
    pub async fn update_profile(
        &self,
        update: ProfileUpdate,
    ) -> PortResult<Option<UserProfile>> {
        let mut guard = self.current.write().await;
        let Some(profile) = guard.as_ref() else {
            return Ok(None);
        };

        let mut updated = profile.clone();
        if let Some(name) = update.name {
            updated.name = name;
        }
        if let Some(university) = update.university {
            updated.university = university;
        }
        if let Some(year) = update.year_of_study {
            updated.year_of_study = year;
        }
        if let Some(bio) = update.bio {
            updated.bio = bio;
        }

        // Persist first; a failed write must not change the active session.
        self.persist(&updated).await?;
        *guard = Some(updated.clone());
        Ok(Some(updated))
    }

    /// Clears the session from memory and from the persistent store.
    pub async fn sign_out(&self) -> PortResult<()> {
        *self.current.write().await = None;
        self.store.remove(SESSION_KEY).await
    }

    async fn replace(&self, profile: UserProfile) -> PortResult<()> {
        self.persist(&profile).await?;
        *self.current.write().await = Some(profile);
        Ok(())
    }

    async fn persist(&self, profile: &UserProfile) -> PortResult<()> {
        let raw = serde_json::to_string(profile)
            .map_err(|e| PortError::Unexpected(format!("Serializing session: {}", e)))?;
        self.store.set(SESSION_KEY, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory stand-in for the durable key-value medium.
    #[derive(Default)]
    struct MemoryStore {
        map: Mutex<HashMap<String, String>>,
        fail_writes: bool,
    }

    #[async_trait]
    impl KeyValueStore for MemoryStore {
        async fn get(&self, key: &str) -> PortResult<Option<String>> {
            Ok(self.map.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> PortResult<()> {
            if self.fail_writes {
                return Err(PortError::Unexpected("write refused".to_string()));
            }
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

    #[tokio::test]
    async fn sign_in_synthesizes_profile_from_email() {
        let store = Arc::new(MemoryStore::default());
        let manager = SessionManager::load(store).await.unwrap();

        let profile = manager.sign_in("aisha@smu.kz", "whatever").await.unwrap();
        assert_eq!(profile.name, "aisha");
        assert_eq!(profile.university, "SMU Semey");
        assert_eq!(manager.current().await.unwrap(), profile);
    }

    #[tokio::test]
    async fn update_profile_merges_only_supplied_fields() {
        let store = Arc::new(MemoryStore::default());
        let manager = SessionManager::load(store).await.unwrap();
        let before = manager.sign_in("a@b.kz", "pw").await.unwrap();

        let after = manager
            .update_profile(ProfileUpdate {
                bio: Some("X".to_string()),
                ..Default::default()
            })
            .await
            .unwrap()
            .expect("session active");

        assert_eq!(after.bio, "X");
        assert_eq!(
            UserProfile {
                bio: before.bio.clone(),
                ..after.clone()
            },
            before
        );
    }

    #[tokio::test]
    async fn update_without_session_reports_condition() {
        let store = Arc::new(MemoryStore::default());
        let manager = SessionManager::load(store).await.unwrap();

        let outcome = manager
            .update_profile(ProfileUpdate {
                bio: Some("X".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn registration_survives_a_manager_restart() {
        let store = Arc::new(MemoryStore::default());
        let manager = SessionManager::load(store.clone()).await.unwrap();
        let registered = manager
            .register(NewProfile {
                email: Some("a@b.kz".to_string()),
                name: Some("A".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let reloaded = SessionManager::load(store).await.unwrap();
        let restored = reloaded.current().await.expect("persisted session");
        assert_eq!(restored.id, registered.id);
        assert_eq!(restored.email, "a@b.kz");
        assert_eq!(restored.name, "A");
    }

    #[tokio::test]
    async fn sign_out_clears_memory_and_store() {
        let store = Arc::new(MemoryStore::default());
        let manager = SessionManager::load(store.clone()).await.unwrap();
        manager.sign_in("a@b.kz", "pw").await.unwrap();

        manager.sign_out().await.unwrap();
        assert!(manager.current().await.is_none());

        let reloaded = SessionManager::load(store).await.unwrap();
        assert!(reloaded.current().await.is_none());
    }

    #[tokio::test]
    async fn corrupt_snapshot_falls_back_to_signed_out() {
        let store = Arc::new(MemoryStore::default());
        store.set(SESSION_KEY, "{not json").await.unwrap();

        let manager = SessionManager::load(store).await.unwrap();
        assert!(manager.current().await.is_none());
    }

    #[tokio::test]
    async fn write_failure_is_surfaced() {
        let store = Arc::new(MemoryStore {
            fail_writes: true,
            ..Default::default()
        });
        let manager = SessionManager::load(store).await.unwrap();

        let err = manager.sign_in("a@b.kz", "pw").await.unwrap_err();
        assert!(matches!(err, PortError::Unexpected(_)));
        // A failed sign-in must not leave a half-installed session behind.
        assert!(manager.current().await.is_none());
    }
}
