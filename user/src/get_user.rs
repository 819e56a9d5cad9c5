use crate::{
    error::Error, handler::Handler, model::PublicUser, store::UserStore, validate::parse_user_id,
};

impl<S: UserStore> Handler<S> {
    /// Gets a user by identifier.
    ///
    /// # Errors
    /// - id is missing or not numeric
    /// - no user with that id exists
    pub fn get_user(&self, id: &str) -> Result<PublicUser, Error> {
        let id = parse_user_id(id)?;

        let user = self.store.find_by_id(id).ok_or(Error::UserNotFound(id))?;

        Ok(user.into())
    }
}
