use crate::{
    error::Error,
    handler::Handler,
    model::PublicUser,
    store::UserStore,
    validate::{parse_user_id, validate_display_name, validate_name, validate_password},
};
use serde::Deserialize;

/// Request body for fully replacing a user.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    pub name: String,
    pub display_name: String,
    pub password: String,
}

impl<S: UserStore> Handler<S> {
    /// Replaces every field of an existing user except its id.
    ///
    /// # Errors
    /// - id is missing or not numeric
    /// - name, display name, or password fail validation
    /// - the name is taken by a different user
    /// - no user with that id exists
    pub fn update_user(&self, id: &str, req: UpdateUser) -> Result<PublicUser, Error> {
        let id = parse_user_id(id)?;

        validate_name(&req.name)?;
        validate_display_name(&req.display_name)?;
        validate_password(&req.password)?;

        if let Some(other) = self.store.find_by_name(&req.name)
            && other.id != id
        {
            return Err(Error::NameTaken(req.name));
        }

        let user = self
            .store
            .replace(id, req.name, req.display_name, req.password)
            .ok_or(Error::UserNotFound(id))?;

        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryUserStore;
    use crate::fixture_record;
    use common::Code;
    use rstest::rstest;
    use testutils::assert_response;

    fn fixture_update() -> UpdateUser {
        UpdateUser {
            name: "johnny".to_string(),
            display_name: "Johnny II".to_string(),
            password: "hunter3".to_string(),
        }
    }

    #[rstest]
    #[case::happy_path(
        "1",
        fixture_update(),
        Ok(PublicUser {
            id: 1,
            name: "johnny".to_string(),
            display_name: "Johnny II".to_string(),
        })
    )]
    #[case::not_numeric("one", fixture_update(), Err(Code::InvalidArgument))]
    #[case::not_found("99", fixture_update(), Err(Code::NotFound))]
    #[case::invalid_name(
        "1",
        UpdateUser { name: "jo".to_string(), ..fixture_update() },
        Err(Code::InvalidArgument)
    )]
    #[case::name_taken_by_other(
        "1",
        UpdateUser { name: "jacky".to_string(), ..fixture_update() },
        Err(Code::InvalidArgument)
    )]
    fn test_update_user(
        #[case] id: &str,
        #[case] req: UpdateUser,
        #[case] want: Result<PublicUser, Code>,
    ) {
        // given
        let store = InMemoryUserStore::with_users(vec![
            fixture_record(|_| {}),
            fixture_record(|u| {
                u.id = 2;
                u.name = "jacky".into();
            }),
        ]);
        let handler = Handler::new(store);

        // when
        let got = handler.update_user(id, req);

        // then
        assert_response(got, want);
    }
}
