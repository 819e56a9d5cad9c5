use crate::error::Error;
use user::model::UserRecord;
use user::store::UserStore;

/// Pluggable credential-checking strategy.
///
/// The login flow only depends on this seam, so swapping the password check
/// for another mechanism does not touch session handling.
pub trait CredentialVerifier: Send + Sync + 'static {
    /// Checks a claimed identity against stored credentials.
    ///
    /// # Errors
    /// - the name is unknown or the password does not match
    fn verify(&self, name: &str, password: &str) -> Result<UserRecord, Error>;
}

/// Verifies a name/password pair against the user store.
#[derive(Clone)]
pub struct PasswordVerifier<S> {
    pub store: S,
}

impl<S: UserStore> PasswordVerifier<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: UserStore> CredentialVerifier for PasswordVerifier<S> {
    fn verify(&self, name: &str, password: &str) -> Result<UserRecord, Error> {
        let user = self
            .store
            .find_by_name(name)
            .ok_or(Error::InvalidCredentials)?;

        if user.password != password {
            return Err(Error::InvalidCredentials);
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture_record;
    use common::{Code, ErrorCode as _};
    use rstest::rstest;
    use user::store::InMemoryUserStore;

    #[rstest]
    #[case::happy_path("johnny", "hunter2", true)]
    #[case::unknown_name("nobody", "hunter2", false)]
    #[case::wrong_password("johnny", "letmein", false)]
    fn test_verify(#[case] name: &str, #[case] password: &str, #[case] want_ok: bool) {
        // given
        let store = InMemoryUserStore::with_users(vec![fixture_record(|_| {})]);
        let verifier = PasswordVerifier::new(store);

        // when
        let got = verifier.verify(name, password);

        // then
        match got {
            Ok(user) => {
                assert!(want_ok);
                assert_eq!(user.name, "johnny");
            }
            Err(err) => {
                assert!(!want_ok);
                // unknown name and wrong password must be indistinguishable
                assert_eq!(err.code(), Code::Unauthenticated);
                assert_eq!(err.to_string(), "invalid credentials");
            }
        }
    }
}
