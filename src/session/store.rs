use super::Session;
use crate::{Error, Result};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tracing::{debug, info};
use uuid::Uuid;

pub type SharedSession = Arc<tokio::sync::Mutex<Session>>;

/// In-memory sessions keyed by id. Each session has its own lock so turns
/// on different sessions never contend.
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, SharedSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session for `session_id`, creating it when unknown. A new
    /// id is generated when none is given.
    pub fn get_or_create(&self, session_id: Option<String>) -> Result<(String, SharedSession)> {
        let session_id = session_id.unwrap_or_else(|| Uuid::new_v4().to_string());
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))?;

        let session = sessions
            .entry(session_id.clone())
            .or_insert_with(|| {
                info!("Created session: {}", session_id);
                Arc::new(tokio::sync::Mutex::new(Session::new(session_id.clone())))
            })
            .clone();

        Ok((session_id, session))
    }

    pub fn get(&self, session_id: &str) -> Result<SharedSession> {
        let sessions = self
            .sessions
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))?;

        debug!("Looking up session: {}", session_id);
        sessions
            .get(session_id)
            .cloned()
            .ok_or_else(|| Error::SessionNotFound {
                session_id: session_id.to_string(),
            })
    }

    /// Drops a session and everything it holds. Turns still running on it
    /// keep their handle until they finish.
    pub fn remove(&self, session_id: &str) -> Result<SharedSession> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|e| Error::internal(format!("Mutex lock failed: {e}")))?;

        let session = sessions
            .remove(session_id)
            .ok_or_else(|| Error::SessionNotFound {
                session_id: session_id.to_string(),
            })?;

        info!(
            "Removed session: {} ({} remaining)",
            session_id,
            sessions.len()
        );
        Ok(session)
    }
}
