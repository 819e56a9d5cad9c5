use crate::store::SessionStore;
use crate::verifier::CredentialVerifier;
use async_trait::async_trait;
use shared::middleware::{SessionValidator, ValidateSessionErr};
use shared::session::SessionState;

/// Authentication flow over a session store and a credential strategy.
#[derive(Clone)]
pub struct Handler<S, V> {
    pub sessions: S,
    pub verifier: V,
}

impl<S: SessionStore, V: CredentialVerifier> Handler<S, V> {
    #[must_use]
    pub fn new(sessions: S, verifier: V) -> Self {
        Self { sessions, verifier }
    }
}

#[async_trait]
impl<S, V> SessionValidator for Handler<S, V>
where
    S: SessionStore,
    V: CredentialVerifier,
{
    /// Resolves a session id to the authenticated session state behind it.
    /// Anonymous and expired sessions are both unauthenticated; sliding
    /// stores refresh the expiry window on each validated access.
    async fn validate_session(
        &self,
        session_id: String,
    ) -> Result<SessionState, ValidateSessionErr> {
        let session = self
            .sessions
            .get(&session_id)
            .ok_or(ValidateSessionErr::Unauthenticated)?;

        let Some(user) = session.data.user else {
            return Err(ValidateSessionErr::Unauthenticated);
        };

        self.sessions.touch(&session_id);

        Ok(SessionState::new(session_id, user.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixture_record, fixture_session_store, fixture_verifier};

    #[tokio::test]
    async fn test_validate_session_authenticated() {
        // given
        let handler = Handler::new(fixture_session_store(), fixture_verifier());
        let session = handler.sessions.create();
        handler
            .sessions
            .with_session(&session.id, |s| s.data.user = Some(fixture_record(|_| {})));

        // when
        let got = handler.validate_session(session.id.clone()).await;

        // then
        let state = got.expect("session should validate");
        assert_eq!(state.session_id, session.id);
        assert_eq!(state.user_id, 1);
    }

    #[tokio::test]
    async fn test_validate_session_anonymous() {
        // given a live session nobody has logged in on
        let handler = Handler::new(fixture_session_store(), fixture_verifier());
        let session = handler.sessions.create();

        // when
        let got = handler.validate_session(session.id).await;

        // then
        assert!(matches!(got, Err(ValidateSessionErr::Unauthenticated)));
    }

    #[tokio::test]
    async fn test_validate_session_unknown_id() {
        let handler = Handler::new(fixture_session_store(), fixture_verifier());

        let got = handler.validate_session("missing".to_string()).await;

        assert!(matches!(got, Err(ValidateSessionErr::Unauthenticated)));
    }
}
