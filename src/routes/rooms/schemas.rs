use serde::Deserialize;

use crate::models::rooms::{Room, ROOM_NAME_MIN_LENGTH, ROOM_NAME_TOO_SHORT, ROOM_OBJECT_NAME};
use crate::utils::validation::{FieldError, Validator};

/// Candidate room submitted to `POST /rooms`. A client-supplied `id` is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RoomPayload {
    pub name: Option<String>,
    #[serde(rename = "campusName")]
    pub campus_name: Option<String>,
    pub capacity: Option<i32>,
    pub vc: Option<bool>,
}

impl RoomPayload {
    /// Validates the payload and builds a fresh, id-less room from it.
    pub fn into_room(self) -> Result<Room, Vec<FieldError>> {
        let mut validator = Validator::new(ROOM_OBJECT_NAME);
        validator.min_length(
            "name",
            self.name.as_deref(),
            ROOM_NAME_MIN_LENGTH,
            ROOM_NAME_TOO_SHORT,
        );
        validator.finish()?;

        Ok(Room::new(
            self.name.unwrap_or_default(),
            self.campus_name.unwrap_or_default(),
            self.capacity.unwrap_or_default(),
            self.vc.unwrap_or_default(),
        ))
    }
}
