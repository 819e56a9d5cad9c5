use common::{Code, ErrorCode};
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("unauthenticated")]
    Unauthenticated,
}

impl ErrorCode for Error {
    fn code(&self) -> Code {
        match self {
            Error::Unauthenticated => Code::Unauthenticated,
        }
    }
}
