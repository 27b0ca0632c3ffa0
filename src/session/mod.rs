//! Authenticated session lifecycle: created empty at startup, populated by
//! login, persisted on every mutation, rehydrated once from storage, and
//! destroyed on logout. The store is the only shared mutable state in the
//! crate: single writer (login / logout / token refresh), many readers.

pub mod storage;

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::access::roles::normalize_role;
use crate::types::UserProfile;
use storage::SessionStorage;

/// In-memory session snapshot read by guards and feature checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_authenticated: bool,
    /// True only between process start and the first rehydration attempt.
    /// Never trusted from storage.
    pub is_loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            access_token: None,
            refresh_token: None,
            is_authenticated: false,
            is_loading: true,
        }
    }
}

/// The subset of session fields that survives process restarts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedSession {
    pub user: Option<UserProfile>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_authenticated: bool,
}

impl Session {
    fn from_persisted(persisted: PersistedSession) -> Self {
        Self {
            user: persisted.user,
            access_token: persisted.access_token,
            refresh_token: persisted.refresh_token,
            is_authenticated: persisted.is_authenticated,
            is_loading: true,
        }
    }

    fn to_persisted(&self) -> PersistedSession {
        PersistedSession {
            user: self.user.clone(),
            access_token: self.access_token.clone(),
            refresh_token: self.refresh_token.clone(),
            is_authenticated: self.is_authenticated,
        }
    }
}

/// Owner of the session cell. Mutations are single atomic field-sets under
/// the write lock followed by a persist; persistence failures are logged
/// and never block the in-memory state change.
pub struct SessionStore {
    inner: RwLock<Session>,
    storage: Box<dyn SessionStorage>,
}

impl SessionStore {
    /// Rehydrate from storage. `is_loading` resolves to `false` exactly
    /// once here, whether or not the read succeeds; a read failure is
    /// treated as "no prior session".
    pub fn open(storage: Box<dyn SessionStorage>) -> Self {
        let mut session = match storage.load() {
            Ok(Some(persisted)) => Session::from_persisted(persisted),
            Ok(None) => Session::default(),
            Err(e) => {
                tracing::warn!(error = %e, "session rehydration failed, starting unauthenticated");
                Session::default()
            }
        };
        session.is_loading = false;

        Self {
            inner: RwLock::new(session),
            storage,
        }
    }

    /// Cheap copy of the current session for guard evaluation.
    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    /// Establish an authenticated session. The user's role is normalized
    /// here, once, so backend spelling drift never reaches the route
    /// registry.
    pub fn set_auth(&self, mut user: UserProfile, access_token: String, refresh_token: String) {
        user.role = normalize_role(&user.role);

        let mut session = self.write();
        session.user = Some(user);
        session.access_token = Some(access_token);
        session.refresh_token = Some(refresh_token);
        session.is_authenticated = true;
        session.is_loading = false;
        self.persist(&session);
    }

    /// Swap in a fresh access token after a refresh exchange. Leaves
    /// `is_authenticated` and the rest of the identity untouched.
    pub fn set_access_token(&self, token: String) {
        let mut session = self.write();
        session.access_token = Some(token);
        self.persist(&session);
    }

    pub fn logout(&self) {
        let mut session = self.write();
        *session = Session {
            is_loading: false,
            ..Session::default()
        };
        if let Err(e) = self.storage.clear() {
            tracing::warn!(error = %e, "failed to clear persisted session");
        }
    }

    pub fn set_loading(&self, loading: bool) {
        self.write().is_loading = loading;
    }

    fn persist(&self, session: &Session) {
        if let Err(e) = self.storage.save(&session.to_persisted()) {
            tracing::warn!(error = %e, "failed to persist session");
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Session> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Session> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::storage::{SessionStorage, StorageError};
    use super::*;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct MemoryStorage {
        record: Mutex<Option<PersistedSession>>,
    }

    impl SessionStorage for MemoryStorage {
        fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
            Ok(self.record.lock().unwrap().clone())
        }

        fn save(&self, session: &PersistedSession) -> Result<(), StorageError> {
            *self.record.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        fn clear(&self) -> Result<(), StorageError> {
            *self.record.lock().unwrap() = None;
            Ok(())
        }
    }

    struct FailingStorage;

    impl SessionStorage for FailingStorage {
        fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
            Err(StorageError::ConfigDir("simulated failure".to_string()))
        }

        fn save(&self, _session: &PersistedSession) -> Result<(), StorageError> {
            Err(StorageError::ConfigDir("simulated failure".to_string()))
        }

        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::ConfigDir("simulated failure".to_string()))
        }
    }

    fn profile(role: &str) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: "Jess".to_string(),
            email: "jess@example.com".to_string(),
            role: role.to_string(),
            gym_id: None,
            subscription_name: Some("Starter Plan".to_string()),
        }
    }

    #[test]
    fn test_fresh_store_resolves_loading() {
        let store = SessionStore::open(Box::new(MemoryStorage::default()));
        let session = store.snapshot();
        assert!(!session.is_loading);
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
    }

    #[test]
    fn test_set_auth_normalizes_role_and_persists() {
        let store = SessionStore::open(Box::new(MemoryStorage::default()));
        store.set_auth(profile("owner"), "at".to_string(), "rt".to_string());

        let session = store.snapshot();
        assert!(session.is_authenticated);
        assert_eq!(session.user.as_ref().map(|u| u.role.as_str()), Some("GYM_OWNER"));
        assert_eq!(session.access_token.as_deref(), Some("at"));
    }

    #[test]
    fn test_rehydration_restores_persisted_fields() {
        let storage = MemoryStorage::default();
        storage
            .save(&PersistedSession {
                user: Some(profile("TRAINER")),
                access_token: Some("at".to_string()),
                refresh_token: Some("rt".to_string()),
                is_authenticated: true,
            })
            .unwrap();

        let store = SessionStore::open(Box::new(storage));
        let session = store.snapshot();
        assert!(session.is_authenticated);
        assert!(!session.is_loading);
        assert_eq!(session.refresh_token.as_deref(), Some("rt"));
    }

    #[test]
    fn test_rehydration_failure_is_no_prior_session() {
        let store = SessionStore::open(Box::new(FailingStorage));
        let session = store.snapshot();
        assert!(!session.is_loading, "a stuck loading flag would block guards forever");
        assert!(!session.is_authenticated);
    }

    #[test]
    fn test_persist_failure_keeps_in_memory_state() {
        let store = SessionStore::open(Box::new(FailingStorage));
        store.set_auth(profile("ADMIN"), "at".to_string(), "rt".to_string());
        assert!(store.snapshot().is_authenticated);
    }

    #[test]
    fn test_set_access_token_leaves_identity_alone() {
        let store = SessionStore::open(Box::new(MemoryStorage::default()));
        store.set_auth(profile("MEMBER"), "old".to_string(), "rt".to_string());
        store.set_access_token("new".to_string());

        let session = store.snapshot();
        assert_eq!(session.access_token.as_deref(), Some("new"));
        assert_eq!(session.refresh_token.as_deref(), Some("rt"));
        assert!(session.is_authenticated);
    }

    #[test]
    fn test_logout_clears_everything() {
        let storage = Box::new(MemoryStorage::default());
        let store = SessionStore::open(storage);
        store.set_auth(profile("MEMBER"), "at".to_string(), "rt".to_string());
        store.logout();

        let session = store.snapshot();
        assert_eq!(session.user, None);
        assert_eq!(session.access_token, None);
        assert_eq!(session.refresh_token, None);
        assert!(!session.is_authenticated);
        assert!(!session.is_loading);
    }
}
