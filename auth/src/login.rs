use crate::error::Error;
use crate::handler::Handler;
use crate::store::SessionStore;
use crate::verifier::CredentialVerifier;
use user::model::{PublicUser, UserRecord};

/// Result of a successful login: the session to hand back as a cookie and
/// the public view of the authenticated user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    pub session_id: String,
    pub user: PublicUser,
}

impl<S: SessionStore, V: CredentialVerifier> Handler<S, V> {
    /// Logs a user in.
    ///
    /// A live session presented by the client keeps its id, so a client
    /// that browsed anonymously keeps continuity across the login call;
    /// otherwise a fresh session is allocated. Failed verification leaves
    /// the store untouched.
    ///
    /// # Errors
    /// - the name is unknown or the password does not match
    pub fn login(
        &self,
        session_id: Option<&str>,
        name: &str,
        password: &str,
    ) -> Result<LoginOutcome, Error> {
        let user = self.verifier.verify(name, password)?;

        let session_id = match session_id {
            Some(id) if self.attach_user(id, &user) => id.to_string(),
            _ => {
                let session = self.sessions.create();
                self.attach_user(&session.id, &user);
                session.id
            }
        };

        self.sessions.touch(&session_id);

        tracing::debug!(user_id = user.id, "user logged in");

        Ok(LoginOutcome {
            session_id,
            user: user.into(),
        })
    }

    /// Stores the verified user on a live session. A cart left behind by a
    /// previously authenticated different user is discarded rather than
    /// handed over. Returns whether the session was live.
    fn attach_user(&self, session_id: &str, user: &UserRecord) -> bool {
        self.sessions
            .with_session(session_id, |session| {
                if session.data.user.as_ref().is_some_and(|u| u.id != user.id) {
                    session.data.cart = None;
                }
                session.data.user = Some(user.clone());
            })
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verifier::PasswordVerifier;
    use crate::{fixture_session_store, fixture_verifier};
    use common::Code;
    use rstest::rstest;
    use testutils::assert_response;
    use user::model::PublicUser;

    fn fixture_public_user() -> PublicUser {
        PublicUser {
            id: 1,
            name: "johnny".to_string(),
            display_name: "Johnny".to_string(),
        }
    }

    #[rstest]
    #[case::happy_path("johnny", "hunter2", Ok(fixture_public_user()))]
    #[case::unknown_name("nobody", "hunter2", Err(Code::Unauthenticated))]
    #[case::wrong_password("johnny", "letmein", Err(Code::Unauthenticated))]
    fn test_login_fresh_client(
        #[case] name: &str,
        #[case] password: &str,
        #[case] want: Result<PublicUser, Code>,
    ) {
        // given
        let handler = Handler::new(fixture_session_store(), fixture_verifier());

        // when
        let got = handler.login(None, name, password);

        // then
        let failed = got.is_err();
        assert_response(got.map(|outcome| outcome.user), want);

        // failed logins must not allocate sessions
        if failed {
            assert!(handler.sessions.is_empty());
        }
    }

    #[test]
    fn test_login_sets_session_user() {
        // given
        let handler = Handler::new(fixture_session_store(), fixture_verifier());

        // when
        let outcome = handler.login(None, "johnny", "hunter2").unwrap();

        // then
        let session = handler.sessions.get(&outcome.session_id).unwrap();
        assert_eq!(session.data.user.map(|u| u.id), Some(1));
    }

    #[test]
    fn test_login_reuses_presented_session() {
        // given a client that browsed anonymously first
        let handler = Handler::new(fixture_session_store(), fixture_verifier());
        let anonymous = handler.sessions.create();

        // when
        let outcome = handler
            .login(Some(&anonymous.id), "johnny", "hunter2")
            .unwrap();

        // then
        assert_eq!(outcome.session_id, anonymous.id);
        assert_eq!(handler.sessions.len(), 1);
    }

    #[test]
    fn test_login_with_stale_session_allocates_fresh_one() {
        // given a cookie pointing at a session that no longer exists
        let handler = Handler::new(fixture_session_store(), fixture_verifier());

        // when
        let outcome = handler.login(Some("stale"), "johnny", "hunter2").unwrap();

        // then
        assert_ne!(outcome.session_id, "stale");
        assert!(handler.sessions.get(&outcome.session_id).is_some());
    }

    #[test]
    fn test_login_as_other_user_discards_cart() {
        // given a session already authenticated with a cart
        let verifier = PasswordVerifier::new(user::store::InMemoryUserStore::with_users(vec![
            crate::fixture_record(|_| {}),
            crate::fixture_record(|u| {
                u.id = 2;
                u.name = "jacky".into();
                u.password = "jack123".into();
            }),
        ]));
        let handler = Handler::new(fixture_session_store(), verifier);
        let outcome = handler.login(None, "johnny", "hunter2").unwrap();
        handler.sessions.with_session(&outcome.session_id, |s| {
            s.data.cart = Some(vec![serde_json::json!({"name": "widget"})]);
        });

        // when a different user logs in on the same session
        let relogin = handler
            .login(Some(&outcome.session_id), "jacky", "jack123")
            .unwrap();

        // then the previous user's cart is gone
        assert_eq!(relogin.session_id, outcome.session_id);
        let session = handler.sessions.get(&outcome.session_id).unwrap();
        assert_eq!(session.data.cart, None);
        assert_eq!(session.data.user.map(|u| u.id), Some(2));
    }
}
