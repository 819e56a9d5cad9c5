use common::{Code, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Unknown name or wrong password. The two cases are deliberately
    /// indistinguishable so the response cannot be used to enumerate
    /// accounts.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("unauthenticated")]
    Unauthenticated,
}

impl ErrorCode for Error {
    fn code(&self) -> Code {
        match self {
            Error::InvalidCredentials | Error::Unauthenticated => Code::Unauthenticated,
        }
    }
}
