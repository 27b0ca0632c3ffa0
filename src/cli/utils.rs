use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::services::ApiClient;
use crate::session::storage::FileSessionStorage;
use crate::session::SessionStore;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Session store rehydrated from the default on-disk location.
pub fn open_session_store() -> Result<SessionStore> {
    let storage = FileSessionStorage::open_default()?;
    Ok(SessionStore::open(Box::new(storage)))
}

/// API client carrying the stored access token, when one exists.
pub fn authed_client(store: &SessionStore) -> Result<ApiClient> {
    let session = store.snapshot();
    let client = ApiClient::from_config()?;
    Ok(match session.access_token {
        Some(token) => client.with_bearer(token),
        None => client,
    })
}

/// Prompt on stderr and read one line from stdin. Plain echo; fine for an
/// operator tool.
pub fn prompt(label: &str) -> anyhow::Result<String> {
    eprint!("{label}: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
