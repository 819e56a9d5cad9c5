use serde::{Deserialize, Serialize};

/// A stored user record.
///
/// Deliberately not `Serialize`: the plaintext password must never leave the
/// process, so every outward-facing response goes through [`PublicUser`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub password: String,
    pub display_name: String,
}

/// The subset of a user record that is safe to return to a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub display_name: String,
}

impl From<UserRecord> for PublicUser {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name,
            display_name: user.display_name,
        }
    }
}

impl From<&UserRecord> for PublicUser {
    fn from(user: &UserRecord) -> Self {
        user.clone().into()
    }
}
