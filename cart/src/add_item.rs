use crate::error::Error;
use crate::handler::Handler;
use auth::store::SessionStore;
use serde_json::Value;

impl<S: SessionStore> Handler<S> {
    /// Appends an item to the session's cart, allocating the cart on first
    /// write, and returns the stored item unchanged. Items are arbitrary
    /// payloads; every call appends a distinct entry, in call order.
    ///
    /// # Errors
    /// - the session is not authenticated
    pub fn add_item(&self, session_id: Option<&str>, item: Value) -> Result<Value, Error> {
        let id = session_id.ok_or(Error::Unauthenticated)?;

        self.sessions
            .with_session(id, |session| {
                if !session.is_authenticated() {
                    return Err(Error::Unauthenticated);
                }
                session
                    .data
                    .cart
                    .get_or_insert_with(Vec::new)
                    .push(item.clone());
                Ok(item)
            })
            .unwrap_or(Err(Error::Unauthenticated))
    }
}
