use crate::error::Error;
use crate::handler::Handler;
use auth::store::SessionStore;
use serde_json::Value;

impl<S: SessionStore> Handler<S> {
    /// Returns the session's cart in insertion order. A session that has
    /// never added an item gets an empty list, not an absent one.
    ///
    /// # Errors
    /// - the session is not authenticated
    pub fn get_cart(&self, session_id: Option<&str>) -> Result<Vec<Value>, Error> {
        let id = session_id.ok_or(Error::Unauthenticated)?;

        let session = self.sessions.get(id).ok_or(Error::Unauthenticated)?;

        if !session.is_authenticated() {
            return Err(Error::Unauthenticated);
        }

        Ok(session.data.cart.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fixture_authenticated_session, fixture_session_store};
    use common::Code;
    use serde_json::json;
    use testutils::assert_response;

    #[test]
    fn test_get_cart_empty_before_first_add() {
        // given
        let store = fixture_session_store();
        let session_id = fixture_authenticated_session(&store);
        let handler = Handler::new(store);

        // when
        let got = handler.get_cart(Some(&session_id));

        // then an empty list, never an absent one
        assert_response(got, Ok(vec![]));
    }

    #[test]
    fn test_get_cart_returns_items_in_call_order() {
        // given
        let store = fixture_session_store();
        let session_id = fixture_authenticated_session(&store);
        let handler = Handler::new(store);
        handler
            .add_item(Some(&session_id), json!({"name": "widget"}))
            .unwrap();
        handler
            .add_item(Some(&session_id), json!({"name": "gizmo"}))
            .unwrap();

        // when
        let got = handler.get_cart(Some(&session_id));

        // then
        assert_response(
            got,
            Ok(vec![json!({"name": "widget"}), json!({"name": "gizmo"})]),
        );
    }

    #[test]
    fn test_get_cart_without_cookie() {
        let handler = Handler::new(fixture_session_store());

        assert_response(handler.get_cart(None), Err(Code::Unauthenticated));
    }

    #[test]
    fn test_get_cart_anonymous_session() {
        // given a live session nobody has logged in on
        let store = fixture_session_store();
        let session = store.create();
        let handler = Handler::new(store);

        // then
        assert_response(
            handler.get_cart(Some(&session.id)),
            Err(Code::Unauthenticated),
        );
    }
}
