use crate::store::UserStore;

/// User endpoints over a pluggable store.
#[derive(Clone)]
pub struct Handler<S> {
    pub store: S,
}

impl<S: UserStore> Handler<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }
}
