use crate::{error::Error, handler::Handler, model::PublicUser, store::UserStore};

/// Substring filter over a single user field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListFilter {
    /// Field to match against: `name` or `displayName`.
    pub field: String,
    pub value: String,
}

impl<S: UserStore> Handler<S> {
    /// Lists users, optionally narrowed to those whose `field` contains
    /// `value` as a substring.
    ///
    /// # Errors
    /// - filter names an unknown field
    pub fn list_users(&self, filter: Option<ListFilter>) -> Result<Vec<PublicUser>, Error> {
        let users = self.store.list();

        let users = match filter {
            Some(ListFilter { field, value }) => match field.as_str() {
                "name" => users
                    .into_iter()
                    .filter(|u| u.name.contains(&value))
                    .collect(),
                "displayName" => users
                    .into_iter()
                    .filter(|u| u.display_name.contains(&value))
                    .collect(),
                _ => return Err(Error::InvalidFilter(field)),
            },
            None => users,
        };

        Ok(users.iter().map(PublicUser::from).collect())
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

    fn filter(field: &str, value: &str) -> Option<ListFilter> {
        Some(ListFilter {
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    #[rstest]
    #[case::no_filter(None, Ok(vec![1, 2, 3]))]
    #[case::by_name(filter("name", "jo"), Ok(vec![1, 3]))]
    #[case::by_display_name(filter("displayName", "Jac"), Ok(vec![2]))]
    #[case::no_match(filter("name", "zz"), Ok(vec![]))]
    #[case::unknown_field(filter("password", "h"), Err(Code::InvalidArgument))]
    fn test_list_users(
        #[case] filter: Option<ListFilter>,
        #[case] want_ids: Result<Vec<i64>, Code>,
    ) {
        // given
        let store = InMemoryUserStore::with_users(vec![
            fixture_record(|_| {}),
            fixture_record(|u| {
                u.id = 2;
                u.name = "jacky".into();
                u.display_name = "Jacky".into();
            }),
            fixture_record(|u| {
                u.id = 3;
                u.name = "joanna".into();
                u.display_name = "Joanna".into();
            }),
        ]);
        let handler = Handler::new(store);

        // when
        let got = handler
            .list_users(filter)
            .map(|users| users.into_iter().map(|u| u.id).collect::<Vec<_>>());

        // then
        assert_response(got, want_ids);
    }
}
