use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::Collection;
use serde::{Deserialize, Serialize};

use super::{RepositoryError, RoomRepository};
use crate::databases::mongo::MongoDb;
use crate::models::rooms::{new_room_id, Room};

const COLLECTION_NAME: &str = "rooms";

/// Stored shape of a room: the id lives in `_id`.
#[derive(Debug, Serialize, Deserialize)]
struct RoomDocument {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    #[serde(rename = "campusName")]
    campus_name: String,
    capacity: i32,
    vc: bool,
}

impl From<Room> for RoomDocument {
    fn from(room: Room) -> Self {
        Self {
            id: room.id.unwrap_or_else(new_room_id),
            name: room.name,
            campus_name: room.campus_name,
            capacity: room.capacity,
            vc: room.vc,
        }
    }
}

impl From<RoomDocument> for Room {
    fn from(document: RoomDocument) -> Self {
        Self {
            id: Some(document.id),
            name: document.name,
            campus_name: document.campus_name,
            capacity: document.capacity,
            vc: document.vc,
        }
    }
}

pub struct MongoRoomRepository {
    collection: Collection<RoomDocument>,
}

impl MongoRoomRepository {
    pub fn new(mongo: &MongoDb) -> Self {
        let collection = mongo.db.collection::<RoomDocument>(COLLECTION_NAME);
        Self { collection }
    }
}

#[async_trait]
impl RoomRepository for MongoRoomRepository {
    async fn save(&self, room: Room) -> Result<Room, RepositoryError> {
        let document = RoomDocument::from(room);
        self.collection
            .replace_one(doc! { "_id": document.id.as_str() }, &document)
            .upsert(true)
            .await?;
        Ok(document.into())
    }

    async fn find_all(&self) -> Result<Vec<Room>, RepositoryError> {
        let mut cursor = self.collection.find(doc! {}).await?;
        let mut rooms: Vec<Room> = Vec::new();
        while cursor.advance().await? {
            rooms.push(Room::from(cursor.deserialize_current()?));
        }
        Ok(rooms)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Room>, RepositoryError> {
        let document = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(document.map(Room::from))
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        self.collection.delete_many(doc! {}).await?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }
}

/// These run against a live server and are skipped unless `MONGODB_TEST_URI` is set.
#[cfg(test)]
mod tests {
    use super::*;

    /// Repository over a throwaway database; call [`drop_database`] at the end of the test.
    async fn repository() -> Option<(MongoDb, MongoRoomRepository)> {
        let uri = std::env::var("MONGODB_TEST_URI").ok()?;
        let database = format!("rooms_test_{}", new_room_id());
        let mongo = MongoDb::connect(&uri, &database)
            .await
            .expect("Failed to connect to test MongoDB");
        let repository = MongoRoomRepository::new(&mongo);
        Some((mongo, repository))
    }

    async fn drop_database(mongo: MongoDb) {
        mongo.db.drop().await.expect("Failed to drop test database");
    }

    #[tokio::test]
    async fn saves_and_finds_room() {
        let Some((mongo, repository)) = repository().await else {
            return;
        };

        let saved = repository
            .save(Room::new("Ruby", "Boulder", 12, false))
            .await
            .expect("Failed to save room");
        let id = saved.id.clone().expect("Saved room has no id");
        let found = repository
            .find_by_id(&id)
            .await
            .expect("Failed to find room")
            .expect("Room not found");

        assert_eq!(saved, found);
        assert_eq!("Ruby", found.name);
        assert_eq!("Boulder", found.campus_name);
        assert_eq!(12, found.capacity);
        assert!(!found.vc);

        drop_database(mongo).await;
    }

    #[tokio::test]
    async fn missing_and_malformed_ids_are_absent() {
        let Some((mongo, repository)) = repository().await else {
            return;
        };

        assert!(repository.find_by_id("badid").await.unwrap().is_none());
        assert!(repository.find_by_id(&new_room_id()).await.unwrap().is_none());

        drop_database(mongo).await;
    }

    #[tokio::test]
    async fn save_is_an_upsert() {
        let Some((mongo, repository)) = repository().await else {
            return;
        };

        let mut room = repository
            .save(Room::new("Rails", "Boulder", 10, false))
            .await
            .unwrap();
        repository.save(Room::new("Go", "Boulder", 4, false)).await.unwrap();
        room.vc = true;
        repository.save(room).await.unwrap();

        assert_eq!(2, repository.count().await.unwrap());
        assert_eq!(2, repository.find_all().await.unwrap().len());

        repository.delete_all().await.unwrap();
        assert_eq!(0, repository.count().await.unwrap());

        drop_database(mongo).await;
    }
}
