use crate::{error::Error, handler::Handler, store::UserStore, validate::parse_user_id};

impl<S: UserStore> Handler<S> {
    /// Deletes a user by identifier.
    ///
    /// # Errors
    /// - id is missing or not numeric
    /// - no user with that id exists
    pub fn delete_user(&self, id: &str) -> Result<(), Error> {
        let id = parse_user_id(id)?;

        if !self.store.remove(id) {
            return Err(Error::UserNotFound(id));
        }

        Ok(())
    }
}
