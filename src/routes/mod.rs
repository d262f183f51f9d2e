use std::sync::Arc;

use axum::Router;
use rooms::room_router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::repositories::RoomRepository;

pub mod rooms;

#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<dyn RoomRepository>,
}

impl AppState {
    pub fn new(rooms: Arc<dyn RoomRepository>) -> Self {
        Self { rooms }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(room_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
