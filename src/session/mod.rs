pub mod stats;

pub use stats::{compute_statistics, PracticeStatistics, StatsPeriod};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::analysis::{AnalysisResult, Category};

/// Page size used when a query does not ask for one.
pub const DEFAULT_SESSION_LIMIT: usize = 20;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage failed: {0}")]
    StorageFailed(String),
}

/// One completed practice round for a known user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeSession {
    pub id: Uuid,
    pub user_id: String,
    pub question: String,
    pub response: String,
    pub category: Category,
    pub analysis: AnalysisResult,
    pub follow_up_question: String,
    pub timestamp: DateTime<Utc>,
}

/// Filters for listing a user's sessions. Both bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct SessionQuery {
    pub limit: Option<usize>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// One page of session history, newest first.
///
/// `total` is the length of this page, not the overall match count.
#[derive(Debug, Clone, Serialize)]
pub struct SessionPage {
    pub sessions: Vec<PracticeSession>,
    pub total: usize,
    pub has_more: bool,
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persists a session and returns its id.
    async fn record(&self, session: PracticeSession) -> Result<Uuid, SessionError>;

    /// Lists a user's sessions, newest first, honoring the query filters.
    async fn sessions_for_user(
        &self,
        user_id: &str,
        query: SessionQuery,
    ) -> Result<SessionPage, SessionError>;
}

/// Process-local store backing single-node deployments and tests.
pub struct InMemorySessionStore {
    sessions: Mutex<Vec<PracticeSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn record(&self, session: PracticeSession) -> Result<Uuid, SessionError> {
        let id = session.id;
        self.sessions.lock().push(session);
        Ok(id)
    }

    async fn sessions_for_user(
        &self,
        user_id: &str,
        query: SessionQuery,
    ) -> Result<SessionPage, SessionError> {
        let limit = query.limit.unwrap_or(DEFAULT_SESSION_LIMIT);

        let mut matching: Vec<PracticeSession> = {
            let sessions = self.sessions.lock();
            sessions
                .iter()
                .filter(|s| s.user_id == user_id)
                .filter(|s| query.start.map_or(true, |start| s.timestamp >= start))
                .filter(|s| query.end.map_or(true, |end| s.timestamp <= end))
                .cloned()
                .collect()
        };

        matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let has_more = matching.len() > limit;
        matching.truncate(limit);

        Ok(SessionPage {
            total: matching.len(),
            has_more,
            sessions: matching,
        })
    }
}
