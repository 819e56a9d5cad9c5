use crate::{
    error::Error,
    handler::Handler,
    model::PublicUser,
    store::UserStore,
    validate::{parse_user_id, validate_display_name, validate_name, validate_password},
};
use serde::Deserialize;

/// Request body for partially updating a user. Absent fields keep their
/// current value.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchUser {
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub password: Option<String>,
}

impl<S: UserStore> Handler<S> {
    /// Updates only the provided fields of an existing user.
    ///
    /// # Errors
    /// - id is missing or not numeric
    /// - a provided field fails validation
    /// - the name is taken by a different user
    /// - no user with that id exists
    pub fn patch_user(&self, id: &str, req: PatchUser) -> Result<PublicUser, Error> {
        let id = parse_user_id(id)?;

        if let Some(name) = &req.name {
            validate_name(name)?;
            if let Some(other) = self.store.find_by_name(name)
                && other.id != id
            {
                return Err(Error::NameTaken(name.clone()));
            }
        }
        if let Some(display_name) = &req.display_name {
            validate_display_name(display_name)?;
        }
        if let Some(password) = &req.password {
            validate_password(password)?;
        }

        let user = self
            .store
            .patch(id, req.name, req.display_name, req.password)
            .ok_or(Error::UserNotFound(id))?;

        Ok(user.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture_record;
    use crate::store::InMemoryUserStore;
    use common::Code;
    use rstest::rstest;
    use testutils::assert_response;

    #[rstest]
    #[case::display_name_only(
        "1",
        PatchUser { display_name: Some("Johnny II".to_string()), ..Default::default() },
        Ok(PublicUser {
            id: 1,
            name: "johnny".to_string(),
            display_name: "Johnny II".to_string(),
        })
    )]
    #[case::empty_patch("1", PatchUser::default(), Ok(PublicUser {
        id: 1,
        name: "johnny".to_string(),
        display_name: "Johnny".to_string(),
    }))]
    #[case::invalid_name(
        "1",
        PatchUser { name: Some("jo".to_string()), ..Default::default() },
        Err(Code::InvalidArgument)
    )]
    #[case::not_numeric("one", PatchUser::default(), Err(Code::InvalidArgument))]
    #[case::not_found("99", PatchUser::default(), Err(Code::NotFound))]
    fn test_patch_user(
        #[case] id: &str,
        #[case] req: PatchUser,
        #[case] want: Result<PublicUser, Code>,
    ) {
        // given
        let store = InMemoryUserStore::with_users(vec![fixture_record(|_| {})]);
        let handler = Handler::new(store);

        // when
        let got = handler.patch_user(id, req);

        // then
        assert_response(got, want);
    }
}
