/// The session cookie key.
pub const SESSION_COOKIE_KEY: &'static str = "sessionId";

/// Default session lifetime in seconds (one day).
pub const DEFAULT_SESSION_MAX_AGE_SECS: i64 = 60 * 60 * 24;

/// Represents session state attached to an authenticated request.
#[derive(Clone, Debug)]
pub struct SessionState {
    /// The id of the server-side session.
    pub session_id: String,

    /// The id of the authenticated user.
    pub user_id: i64,
}

impl SessionState {
    /// Creates a new `SessionState`.
    pub fn new(session_id: String, user_id: i64) -> Self {
        Self {
            session_id,
            user_id,
        }
    }
}
