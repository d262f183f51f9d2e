use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{http::StatusCode, response::IntoResponse, Json};
use tracing::info;

use super::schemas::RoomPayload;
use crate::models::rooms::Room;
use crate::routes::AppState;
use crate::utils::error::{AppError, RoomNotFound};

pub async fn post_room(
    State(state): State<AppState>,
    payload: Result<Json<RoomPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let room = payload.into_room().map_err(AppError::Validation)?;
    let room = state.rooms.save(room).await?;

    info!(room_id = room.id.as_deref().unwrap_or_default(), name = %room.name, "Room created");
    Ok((StatusCode::CREATED, Json(room)))
}

pub async fn get_rooms(State(state): State<AppState>) -> Result<Json<Vec<Room>>, AppError> {
    let rooms = state.rooms.find_all().await?;
    Ok(Json(rooms))
}

pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Room>, AppError> {
    state
        .rooms
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| RoomNotFound::with_message(format!("No room with id '{id}'")).into())
}
