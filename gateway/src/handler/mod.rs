pub mod auth;
pub mod cart;
pub mod products;
pub mod users;

use crate::config::Config;
use ::auth::store::{InMemorySessionStore, SessionConfig};
use ::auth::verifier::PasswordVerifier;
use chrono::Duration;
use std::sync::Arc;
use user::store::InMemoryUserStore;

pub type SharedSessionStore = Arc<InMemorySessionStore>;
pub type SharedUserStore = Arc<InMemoryUserStore>;

pub type AuthHandler = ::auth::Handler<SharedSessionStore, PasswordVerifier<SharedUserStore>>;
pub type UserHandler = user::Handler<SharedUserStore>;
pub type CartHandler = ::cart::Handler<SharedSessionStore>;

/// Shared application state: the service handlers wired over the in-memory
/// stores, plus the cookie lifetime.
#[derive(Clone)]
pub struct Handler {
    pub auth: AuthHandler,
    pub users: UserHandler,
    pub cart: CartHandler,
    pub cookie_max_age: Duration,
}

impl Handler {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let sessions: SharedSessionStore = Arc::new(InMemorySessionStore::new(SessionConfig {
            max_age: config.session_max_age,
            sliding: config.sliding_expiration,
        }));
        let users: SharedUserStore = Arc::new(InMemoryUserStore::seeded());

        Self {
            auth: ::auth::Handler::new(sessions.clone(), PasswordVerifier::new(users.clone())),
            users: user::Handler::new(users),
            cart: ::cart::Handler::new(sessions),
            cookie_max_age: config.session_max_age,
        }
    }
}
