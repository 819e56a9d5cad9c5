use common::{Code, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("missing user name")]
    MissingUserName,

    #[error("user name must be 5 to 32 characters")]
    InvalidUserName,

    #[error("missing display name")]
    MissingDisplayName,

    #[error("display name must be 3 to 32 characters")]
    InvalidDisplayName,

    #[error("missing password")]
    MissingPassword,

    #[error("missing user id")]
    MissingUserId,

    #[error("invalid user id: {0}")]
    InvalidUserId(String),

    #[error("user not found: {0}")]
    UserNotFound(i64),

    #[error("user name already taken: {0}")]
    NameTaken(String),

    #[error("unknown filter field: {0}")]
    InvalidFilter(String),
}

impl ErrorCode for Error {
    fn code(&self) -> Code {
        match self {
            Error::MissingUserName
            | Error::InvalidUserName
            | Error::MissingDisplayName
            | Error::InvalidDisplayName
            | Error::MissingPassword
            | Error::MissingUserId
            | Error::InvalidUserId(_)
            | Error::NameTaken(_)
            | Error::InvalidFilter(_) => Code::InvalidArgument,
            Error::UserNotFound(_) => Code::NotFound,
        }
    }
}
