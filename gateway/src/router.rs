use crate::handler::{self, Handler};
use axum::{
    Router,
    routing::{get, post},
};
use shared::middleware::add_session_auth_middleware;

/// Builds the application router: the user and auth surfaces are public,
/// products and cart sit behind the session-auth layer.
pub fn build_router(handler: Handler) -> Router {
    let public = Router::new()
        .route(
            "/users",
            get(handler::users::list_users).post(handler::users::create_user),
        )
        .route(
            "/users/{id}",
            get(handler::users::get_user)
                .put(handler::users::update_user)
                .patch(handler::users::patch_user)
                .delete(handler::users::delete_user),
        )
        .route("/auth/login", post(handler::auth::login))
        .route("/auth/status", get(handler::auth::status))
        .route("/auth/logout", post(handler::auth::logout))
        .with_state(handler.clone());

    let protected = Router::new()
        .route("/products", get(handler::products::list_products))
        .route(
            "/cart",
            get(handler::cart::get_cart).post(handler::cart::add_item),
        )
        .with_state(handler.clone());
    let protected = add_session_auth_middleware(protected, handler.auth, vec![]);

    Router::new().nest("/api", public.merge(protected))
}
