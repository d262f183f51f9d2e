use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

pub const ROOM_OBJECT_NAME: &str = "room";
pub const ROOM_NAME_MIN_LENGTH: usize = 2;
pub const ROOM_NAME_TOO_SHORT: &str = "Room name must be more than 1 character";

/// A bookable space. Two rooms are the same room when they carry the same id; rooms that
/// have no id yet are compared field by field.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "campusName")]
    pub campus_name: String,
    pub capacity: i32,
    pub vc: bool,
}

impl Room {
    pub fn new(
        name: impl Into<String>,
        campus_name: impl Into<String>,
        capacity: i32,
        vc: bool,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            campus_name: campus_name.into(),
            capacity,
            vc,
        }
    }

    /// Returns the room with an id, generating one if it has none yet.
    pub fn with_assigned_id(mut self) -> Self {
        if self.id.is_none() {
            self.id = Some(new_room_id());
        }
        self
    }
}

impl Eq for Room {}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(id), Some(other_id)) => id == other_id,
            (None, None) => {
                self.name == other.name
                    && self.campus_name == other.campus_name
                    && self.capacity == other.capacity
                    && self.vc == other.vc
            }
            _ => false,
        }
    }
}

/// Ids are the hex form of a fresh ObjectId, so both backends hand out the same shape.
pub fn new_room_id() -> String {
    ObjectId::new().to_hex()
}
