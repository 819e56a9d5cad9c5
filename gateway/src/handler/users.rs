use crate::error::ApiError;
use crate::handler::Handler;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use axum_macros::debug_handler;
use serde::Deserialize;
use tracing::instrument;
use user::model::PublicUser;
use user::{CreateUser, ListFilter, PatchUser, UpdateUser};

#[derive(Clone, Debug, Deserialize)]
pub struct ListUsersQuery {
    pub filter: Option<String>,
    pub value: Option<String>,
}

/// Lists users, optionally filtered by `?filter=<field>&value=<substring>`.
/// The filter only applies when both parameters are present.
#[debug_handler]
#[instrument(skip(h), err)]
pub async fn list_users(
    State(h): State<Handler>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let filter = match (query.filter, query.value) {
        (Some(field), Some(value)) => Some(ListFilter { field, value }),
        _ => None,
    };

    Ok(Json(h.users.list_users(filter)?))
}

#[debug_handler]
#[instrument(skip_all, fields(user_id), err)]
pub async fn create_user(
    State(h): State<Handler>,
    Json(req): Json<CreateUser>,
) -> Result<(StatusCode, Json<PublicUser>), ApiError> {
    let user = h.users.create_user(req)?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[debug_handler]
#[instrument(skip(h), fields(user_id), err)]
pub async fn get_user(
    State(h): State<Handler>,
    Path(id): Path<String>,
) -> Result<Json<PublicUser>, ApiError> {
    Ok(Json(h.users.get_user(&id)?))
}

#[debug_handler]
#[instrument(skip(h, req), fields(user_id), err)]
pub async fn update_user(
    State(h): State<Handler>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUser>,
) -> Result<Json<PublicUser>, ApiError> {
    Ok(Json(h.users.update_user(&id, req)?))
}

#[debug_handler]
#[instrument(skip(h, req), fields(user_id), err)]
pub async fn patch_user(
    State(h): State<Handler>,
    Path(id): Path<String>,
    Json(req): Json<PatchUser>,
) -> Result<Json<PublicUser>, ApiError> {
    Ok(Json(h.users.patch_user(&id, req)?))
}

#[debug_handler]
#[instrument(skip(h), fields(user_id), err)]
pub async fn delete_user(
    State(h): State<Handler>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    h.users.delete_user(&id)?;

    Ok(StatusCode::NO_CONTENT)
}
