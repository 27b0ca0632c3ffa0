use std::fs;
use std::path::PathBuf;

use super::PersistedSession;
use crate::config;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt session record: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("cannot resolve session directory: {0}")]
    ConfigDir(String),
}

/// Durable key-value home for the persisted session fields. Read once at
/// startup, written on every store mutation.
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError>;
    fn save(&self, session: &PersistedSession) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// JSON file under the gymctl config directory.
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Storage at the configured location: `GYMCTL_CONFIG_DIR` if set,
    /// otherwise `$HOME/.config/gymctl`.
    pub fn open_default() -> Result<Self, StorageError> {
        let dir = config_dir()?;
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(Self::new(dir.join(&config::config().session.store_file)))
    }
}

fn config_dir() -> Result<PathBuf, StorageError> {
    if let Some(dir) = &config::config().session.store_dir {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(custom) = std::env::var("GYMCTL_CONFIG_DIR") {
        return Ok(PathBuf::from(custom));
    }
    let home = std::env::var("HOME")
        .map_err(|_| StorageError::ConfigDir("HOME environment variable not set".to_string()))?;
    Ok(PathBuf::from(home).join(".config").join("gymctl"))
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let session: PersistedSession = serde_json::from_str(&content)?;
        Ok(Some(session))
    }

    fn save(&self, session: &PersistedSession) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserProfile;
    use uuid::Uuid;

    fn sample_session() -> PersistedSession {
        PersistedSession {
            user: Some(UserProfile {
                id: Uuid::new_v4(),
                name: "Sam".to_string(),
                email: "sam@example.com".to_string(),
                role: "GYM_OWNER".to_string(),
                gym_id: Some(Uuid::new_v4()),
                subscription_name: Some("PROFESSIONAL - Most Popular".to_string()),
            }),
            access_token: Some("access".to_string()),
            refresh_token: Some("refresh".to_string()),
            is_authenticated: true,
        }
    }

    #[test]
    fn test_missing_file_is_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"));

        let saved = sample_session();
        storage.save(&saved).unwrap();
        let loaded = storage.load().unwrap().unwrap();

        assert_eq!(loaded.user, saved.user);
        assert_eq!(loaded.access_token, saved.access_token);
        assert!(loaded.is_authenticated);
    }

    #[test]
    fn test_corrupt_file_surfaces_as_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json {").unwrap();

        let storage = FileSessionStorage::new(path);
        assert!(matches!(storage.load(), Err(StorageError::Serde(_))));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"));

        storage.save(&sample_session()).unwrap();
        storage.clear().unwrap();
        storage.clear().unwrap();
        assert!(storage.load().unwrap().is_none());
    }
}
