use crate::handler::Handler;
use crate::store::SessionStore;
use crate::verifier::CredentialVerifier;

impl<S: SessionStore, V: CredentialVerifier> Handler<S, V> {
    /// Logs a session out by destroying it entirely, so cart data tied to
    /// the authenticated identity cannot resurface if the id is ever
    /// presented again.
    ///
    /// Idempotent: logging out an absent or anonymous session is a no-op.
    pub fn logout(&self, session_id: Option<&str>) {
        let Some(id) = session_id else {
            return;
        };

        if self.sessions.destroy(id) {
            tracing::debug!("session destroyed on logout");
        }
    }
}
