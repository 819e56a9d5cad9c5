use crate::error::ApiError;
use crate::handler::Handler;
use crate::utils::session_id_from_headers;
use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::{Json, response::Response};
use axum_macros::debug_handler;
use serde::Deserialize;
use shared::cookie::{ResponseCookies as _, create_session_cookie, expire_session_cookie};
use tracing::instrument;
use user::model::PublicUser;

#[derive(Clone, Debug, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// Logs a user in and delivers the session id as a cookie. A client that
/// already holds a live session cookie keeps its session id.
#[debug_handler]
#[instrument(skip_all, fields(name = %req.name), err)]
pub async fn login(
    State(h): State<Handler>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let session_id = session_id_from_headers(&headers);
    let outcome = h.auth.login(session_id.as_deref(), &req.name, &req.password)?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(http::header::CONTENT_TYPE, "application/json")
        .with_cookie(create_session_cookie(outcome.session_id, h.cookie_max_age))
        .body(Body::from(serde_json::to_vec(&outcome.user)?))?;

    Ok(response)
}

/// Reports who is logged in on the presented session.
#[debug_handler]
#[instrument(skip_all, err)]
pub async fn status(
    State(h): State<Handler>,
    headers: HeaderMap,
) -> Result<Json<PublicUser>, ApiError> {
    let session_id = session_id_from_headers(&headers);
    let user = h.auth.status(session_id.as_deref())?;

    Ok(Json(user))
}

/// Logs the presented session out and expires its cookie. A no-op for
/// clients that are not logged in.
#[debug_handler]
#[instrument(skip_all)]
pub async fn logout(State(h): State<Handler>, headers: HeaderMap) -> Result<Response, ApiError> {
    let session_id = session_id_from_headers(&headers);
    h.auth.logout(session_id.as_deref());

    let response = Response::builder()
        .status(StatusCode::OK)
        .with_cookie(expire_session_cookie())
        .body(Body::empty())?;

    Ok(response)
}
