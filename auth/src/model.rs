use chrono::{DateTime, Utc};
use serde_json::Value;
use user::model::UserRecord;

/// A server-side session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    /// Opaque identifier, delivered to the client as a cookie.
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub data: SessionData,
}

/// Per-session state slots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionData {
    /// Snapshot of the authenticated user, absent while anonymous.
    pub user: Option<UserRecord>,

    /// Cart items in insertion order; allocated on first write.
    pub cart: Option<Vec<Value>>,
}

impl Session {
    /// Whether the session has outlived its expiry deadline.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether a user is logged in on this session.
    pub fn is_authenticated(&self) -> bool {
        self.data.user.is_some()
    }
}
