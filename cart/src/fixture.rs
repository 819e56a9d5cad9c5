#![cfg(test)]

use auth::store::{InMemorySessionStore, SessionConfig, SessionStore as _};
use common::mock::{MockNow, SeqRandom};
use user::model::UserRecord;

pub type TestSessionStore = InMemorySessionStore<SeqRandom, MockNow>;

pub fn fixture_session_store() -> TestSessionStore {
    InMemorySessionStore::new(SessionConfig::default())
}

/// Allocates a session with a user already logged in and returns its id.
pub fn fixture_authenticated_session(store: &TestSessionStore) -> String {
    let session = store.create();
    store.with_session(&session.id, |s| {
        s.data.user = Some(UserRecord {
            id: 1,
            name: "johnny".to_string(),
            password: "hunter2".to_string(),
            display_name: "Johnny".to_string(),
        });
    });
    session.id
}
