use axum::{Extension, Json};
use axum_macros::debug_handler;
use serde::Serialize;
use shared::session::SessionState;
use tracing::instrument;

#[derive(Clone, Debug, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: &'static str,
}

/// Static demo catalog, visible only to authenticated sessions (the
/// session-auth layer gates this route).
#[debug_handler]
#[instrument(skip_all, fields(user_id = session.user_id))]
pub async fn list_products(Extension(session): Extension<SessionState>) -> Json<Vec<Product>> {
    Json(vec![
        Product {
            id: 123,
            name: "GTA VI",
        },
        Product {
            id: 456,
            name: "RDR3",
        },
    ])
}
