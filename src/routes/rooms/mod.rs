use axum::{routing::get, Router};

use super::AppState;

mod handlers;
mod schemas;

pub fn room_router() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(handlers::get_rooms).post(handlers::post_room))
        .route("/rooms/:id", get(handlers::get_room))
}
