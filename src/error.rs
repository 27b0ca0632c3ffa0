use thiserror::Error;

/// Crate-level error taxonomy. The core itself is policy-only and never
/// fails; errors come from the two collaborators it sits between, the
/// backend API and the local session storage.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Service(#[from] crate::services::ServiceError),
    #[error(transparent)]
    Storage(#[from] crate::session::storage::StorageError),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;
