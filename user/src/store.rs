use crate::model::UserRecord;
use parking_lot::RwLock;
use std::sync::Arc;

/// Shared identity storage interface.
///
/// Lookups model absence as `None`, never as an error: "no such user" is a
/// normal state. A persistent backend can be swapped in behind this trait
/// without touching the authentication flow.
pub trait UserStore: Send + Sync + 'static {
    fn find_by_id(&self, id: i64) -> Option<UserRecord>;

    fn find_by_name(&self, name: &str) -> Option<UserRecord>;

    fn list(&self) -> Vec<UserRecord>;

    /// Inserts a new record, allocating the next free id.
    fn insert(&self, name: String, display_name: String, password: String) -> UserRecord;

    /// Replaces every field of an existing record except its id.
    fn replace(
        &self,
        id: i64,
        name: String,
        display_name: String,
        password: String,
    ) -> Option<UserRecord>;

    /// Updates only the provided fields of an existing record.
    fn patch(
        &self,
        id: i64,
        name: Option<String>,
        display_name: Option<String>,
        password: Option<String>,
    ) -> Option<UserRecord>;

    /// Removes a record; returns whether it existed.
    fn remove(&self, id: i64) -> bool;
}

impl<S: UserStore> UserStore for Arc<S> {
    fn find_by_id(&self, id: i64) -> Option<UserRecord> {
        (**self).find_by_id(id)
    }

    fn find_by_name(&self, name: &str) -> Option<UserRecord> {
        (**self).find_by_name(name)
    }

    fn list(&self) -> Vec<UserRecord> {
        (**self).list()
    }

    fn insert(&self, name: String, display_name: String, password: String) -> UserRecord {
        (**self).insert(name, display_name, password)
    }

    fn replace(
        &self,
        id: i64,
        name: String,
        display_name: String,
        password: String,
    ) -> Option<UserRecord> {
        (**self).replace(id, name, display_name, password)
    }

    fn patch(
        &self,
        id: i64,
        name: Option<String>,
        display_name: Option<String>,
        password: Option<String>,
    ) -> Option<UserRecord> {
        (**self).patch(id, name, display_name, password)
    }

    fn remove(&self, id: i64) -> bool {
        (**self).remove(id)
    }
}

/// In-memory user storage over a read-write lock.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records.
    #[must_use]
    pub fn with_users(users: Vec<UserRecord>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Creates a store holding the demo user set.
    #[must_use]
    pub fn seeded() -> Self {
        let seed = [
            (1, "john", "pass123", "John"),
            (2, "jack", "jack123", "Jack"),
            (3, "adam", "adam123", "Adam"),
            (4, "tina", "tina123", "Tina"),
            (5, "henry", "henry123", "Henry"),
        ];
        Self::with_users(
            seed.into_iter()
                .map(|(id, name, password, display_name)| UserRecord {
                    id,
                    name: name.to_string(),
                    password: password.to_string(),
                    display_name: display_name.to_string(),
                })
                .collect(),
        )
    }
}

impl UserStore for InMemoryUserStore {
    fn find_by_id(&self, id: i64) -> Option<UserRecord> {
        self.users.read().iter().find(|u| u.id == id).cloned()
    }

    fn find_by_name(&self, name: &str) -> Option<UserRecord> {
        self.users.read().iter().find(|u| u.name == name).cloned()
    }

    fn list(&self) -> Vec<UserRecord> {
        self.users.read().clone()
    }

    fn insert(&self, name: String, display_name: String, password: String) -> UserRecord {
        let mut users = self.users.write();
        // Ids come from the last record, the way a toy fixture set numbers
        // itself; a real backend would own id allocation.
        let id = users.last().map_or(1, |u| u.id + 1);
        let user = UserRecord {
            id,
            name,
            password,
            display_name,
        };
        users.push(user.clone());
        user
    }

    fn replace(
        &self,
        id: i64,
        name: String,
        display_name: String,
        password: String,
    ) -> Option<UserRecord> {
        let mut users = self.users.write();
        let user = users.iter_mut().find(|u| u.id == id)?;
        user.name = name;
        user.display_name = display_name;
        user.password = password;
        Some(user.clone())
    }

    fn patch(
        &self,
        id: i64,
        name: Option<String>,
        display_name: Option<String>,
        password: Option<String>,
    ) -> Option<UserRecord> {
        let mut users = self.users.write();
        let user = users.iter_mut().find(|u| u.id == id)?;
        if let Some(name) = name {
            user.name = name;
        }
        if let Some(display_name) = display_name {
            user.display_name = display_name;
        }
        if let Some(password) = password {
            user.password = password;
        }
        Some(user.clone())
    }

    fn remove(&self, id: i64) -> bool {
        let mut users = self.users.write();
        let before = users.len();
        users.retain(|u| u.id != id);
        users.len() != before
    }
}
