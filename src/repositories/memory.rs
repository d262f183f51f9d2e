use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{RepositoryError, RoomRepository};
use crate::models::rooms::Room;

#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    rooms: RwLock<HashMap<String, Room>>,
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn save(&self, room: Room) -> Result<Room, RepositoryError> {
        let room = room.with_assigned_id();
        if let Some(id) = &room.id {
            self.rooms.write().insert(id.clone(), room.clone());
        }
        Ok(room)
    }

    async fn find_all(&self) -> Result<Vec<Room>, RepositoryError> {
        Ok(self.rooms.read().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Room>, RepositoryError> {
        Ok(self.rooms.read().get(id).cloned())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.rooms.write().clear();
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.rooms.read().len() as u64)
    }
}
