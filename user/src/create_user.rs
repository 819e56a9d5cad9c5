use crate::{
    error::Error,
    handler::Handler,
    model::PublicUser,
    store::UserStore,
    validate::{validate_display_name, validate_name, validate_password},
};
use serde::Deserialize;

/// Request body for creating a user.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub name: String,
    pub display_name: String,
    pub password: String,
}

impl<S: UserStore> Handler<S> {
    /// Creates a new user.
    ///
    /// # Errors
    /// - name, display name, or password fail validation
    /// - the name is already taken
    pub fn create_user(&self, req: CreateUser) -> Result<PublicUser, Error> {
        validate_name(&req.name)?;
        validate_display_name(&req.display_name)?;
        validate_password(&req.password)?;

        if self.store.find_by_name(&req.name).is_some() {
            return Err(Error::NameTaken(req.name));
        }

        let user = self.store.insert(req.name, req.display_name, req.password);

        tracing::Span::current().record("user_id", user.id);

        Ok(user.into())
    }
}
