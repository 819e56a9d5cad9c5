#![cfg(test)]

use crate::model::{PublicUser, UserRecord};
use crate::CreateUser;

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

pub fn fixture_public<F>(mut func: F) -> PublicUser
where
    F: FnMut(&mut PublicUser),
{
    let mut user = PublicUser {
        id: 1,
        name: "johnny".to_string(),
        display_name: "Johnny".to_string(),
    };
    func(&mut user);
    user
}

pub fn fixture_create_user<F>(mut func: F) -> CreateUser
where
    F: FnMut(&mut CreateUser),
{
    let mut req = CreateUser {
        name: "wanda".to_string(),
        display_name: "Wanda".to_string(),
        password: "hunter2".to_string(),
    };
    func(&mut req);
    req
}
