//! Convenient helper methods to deal with user validation.
use crate::error::Error;

pub const NAME_MIN: usize = 5;
pub const NAME_MAX: usize = 32;
pub const DISPLAY_NAME_MIN: usize = 3;
pub const DISPLAY_NAME_MAX: usize = 32;

/// Parses a user id from its path-parameter form.
pub fn parse_user_id(user_id: &str) -> Result<i64, Error> {
    if user_id.is_empty() {
        return Err(Error::MissingUserId);
    }

    let Ok(id) = user_id.parse::<i64>() else {
        return Err(Error::InvalidUserId(user_id.to_string()));
    };

    tracing::Span::current().record("user_id", id);

    Ok(id)
}

pub fn validate_name(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::MissingUserName);
    }
    if name.chars().count() < NAME_MIN || name.chars().count() > NAME_MAX {
        return Err(Error::InvalidUserName);
    }
    Ok(())
}

pub fn validate_display_name(display_name: &str) -> Result<(), Error> {
    if display_name.is_empty() {
        return Err(Error::MissingDisplayName);
    }
    let len = display_name.chars().count();
    if len < DISPLAY_NAME_MIN || len > DISPLAY_NAME_MAX {
        return Err(Error::InvalidDisplayName);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), Error> {
    if password.is_empty() {
        return Err(Error::MissingPassword);
    }
    Ok(())
}
