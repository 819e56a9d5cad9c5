use axum::http::StatusCode;
use common::Code;
use http::HeaderMap;
use shared::cookie::extract_session_cookie;

/// Maps service codes to http status codes.
pub(crate) fn code_to_http_status(code: Code) -> StatusCode {
    match code {
        Code::InvalidArgument => StatusCode::BAD_REQUEST,
        Code::Unauthenticated => StatusCode::UNAUTHORIZED,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Pulls the session id out of the request's cookie header, if any.
pub(crate) fn session_id_from_headers(headers: &HeaderMap) -> Option<String> {
    headers.get("cookie").and_then(extract_session_cookie)
}
