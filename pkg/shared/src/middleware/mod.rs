mod auth;

pub use auth::{SessionValidator, ValidateSessionErr, add_session_auth_middleware};
