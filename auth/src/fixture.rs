#![cfg(test)]

use crate::store::{InMemorySessionStore, SessionConfig};
use crate::verifier::PasswordVerifier;
use common::mock::{MockNow, SeqRandom};
use user::model::UserRecord;
use user::store::InMemoryUserStore;

pub type TestSessionStore = InMemorySessionStore<SeqRandom, MockNow>;
pub type TestVerifier = PasswordVerifier<InMemoryUserStore>;

pub fn fixture_record<F>(mut func: F) -> UserRecord
where
    F: FnMut(&mut UserRecord),
{
    let mut user = UserRecord {
        id: 1,
        name: "johnny".to_string(),
        password: "hunter2".to_string(),
        display_name: "Johnny".to_string(),
    };
    func(&mut user);
    user
}

pub fn fixture_session_store() -> TestSessionStore {
    InMemorySessionStore::new(SessionConfig::default())
}

pub fn fixture_verifier() -> TestVerifier {
    PasswordVerifier::new(InMemoryUserStore::with_users(vec![fixture_record(
        |_| {},
    )]))
}
