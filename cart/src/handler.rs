use auth::store::SessionStore;

/// Cart endpoints over the session store. Every operation is gated on the
/// session being authenticated; the cart itself lives inside the session.
#[derive(Clone)]
pub struct Handler<S> {
    pub sessions: S,
}

impl<S: SessionStore> Handler<S> {
    #[must_use]
    pub fn new(sessions: S) -> Self {
        Self { sessions }
    }
}
