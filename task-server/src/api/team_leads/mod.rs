//! Team Lead API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Team lead router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/teamleads", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list)
                .post(handler::create)
                .delete(handler::bulk_delete),
        )
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
