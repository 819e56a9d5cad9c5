use crate::error::ApiError;
use crate::handler::Handler;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use axum_macros::debug_handler;
use serde_json::Value;
use shared::session::SessionState;
use tracing::instrument;

/// Appends an item to the session's cart and echoes the stored item.
#[debug_handler]
#[instrument(skip(h, item), fields(user_id = session.user_id), err)]
pub async fn add_item(
    State(h): State<Handler>,
    Extension(session): Extension<SessionState>,
    Json(item): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let item = h.cart.add_item(Some(&session.session_id), item)?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Returns the session's cart in insertion order.
#[debug_handler]
#[instrument(skip(h), fields(user_id = session.user_id), err)]
pub async fn get_cart(
    State(h): State<Handler>,
    Extension(session): Extension<SessionState>,
) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(h.cart.get_cart(Some(&session.session_id))?))
}
