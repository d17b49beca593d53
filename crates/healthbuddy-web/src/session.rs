use axum::http::{header::COOKIE, HeaderMap};
use chrono::{DateTime, Utc};
use healthbuddy_core::Conversation;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "hb_session";

pub type SessionId = Uuid;

/// One browser session and its transcript
pub struct Session {
    pub id: SessionId,
    /// Held for the whole exchange, so a session has one request in flight
    pub conversation: Mutex<Conversation>,
    /// Unix millis of the latest request
    last_activity: AtomicI64,
}

impl Session {
    fn new(id: SessionId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            conversation: Mutex::new(Conversation::new()),
            last_activity: AtomicI64::new(now.timestamp_millis()),
        }
    }

    fn touch(&self, now: DateTime<Utc>) {
        self.last_activity
            .fetch_max(now.timestamp_millis(), Ordering::Relaxed);
    }

    fn is_idle(&self, now: DateTime<Utc>, timeout: std::time::Duration) -> bool {
        let idle_ms = now.timestamp_millis() - self.last_activity.load(Ordering::Relaxed);
        idle_ms > 0 && idle_ms as u128 > timeout.as_millis()
    }
}

/// In-memory map of live sessions. Nothing is persisted; a session ends when
/// it sits idle past the timeout or the process exits.
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, Arc<Session>>>,
    idle_timeout: std::time::Duration,
}

impl SessionRegistry {
    pub fn new(idle_timeout: std::time::Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    /// Find the caller's session or start a fresh one
    pub async fn resolve(&self, id: Option<SessionId>) -> Arc<Session> {
        self.resolve_at(id, Utc::now()).await
    }

    pub async fn resolve_at(&self, id: Option<SessionId>, now: DateTime<Utc>) -> Arc<Session> {
        self.prune_idle(now).await;

        if let Some(id) = id {
            // Touched under the map lock: a concurrent prune either sees the
            // fresh timestamp or has already removed the entry.
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(&id) {
                session.touch(now);
                return Arc::clone(session);
            }
        }

        let session = Arc::new(Session::new(Uuid::new_v4(), now));
        self.sessions
            .write()
            .await
            .insert(session.id, Arc::clone(&session));
        tracing::debug!(session_id = %session.id, "Session started");
        session
    }

    /// Drop sessions idle past the timeout; returns how many were removed
    pub async fn prune_idle(&self, now: DateTime<Utc>) -> usize {
        let any_idle = self
            .sessions
            .read()
            .await
            .values()
            .any(|session| session.is_idle(now, self.idle_timeout));
        if !any_idle {
            return 0;
        }

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|id, session| {
            let keep = !session.is_idle(now, self.idle_timeout);
            if !keep {
                tracing::debug!(session_id = %id, "Session expired");
            }
            keep
        });
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

/// Session id from the request's `Cookie` header, if present and well formed
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value binding the browser to a session
pub fn session_cookie(id: SessionId) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}
