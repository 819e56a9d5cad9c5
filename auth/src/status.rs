use crate::error::Error;
use crate::handler::Handler;
use crate::store::SessionStore;
use crate::verifier::CredentialVerifier;
use user::model::PublicUser;

impl<S: SessionStore, V: CredentialVerifier> Handler<S, V> {
    /// Reports who is logged in on a session.
    ///
    /// An absent cookie, an unknown or expired session, and a live session
    /// nobody has logged in on all look the same from the outside: not
    /// authenticated.
    ///
    /// # Errors
    /// - the session is not authenticated
    pub fn status(&self, session_id: Option<&str>) -> Result<PublicUser, Error> {
        let session = session_id
            .and_then(|id| self.sessions.get(id))
            .ok_or(Error::Unauthenticated)?;

        let user = session.data.user.ok_or(Error::Unauthenticated)?;

        self.sessions.touch(&session.id);

        Ok(user.into())
    }
}
