use mongodb::bson::doc;
use mongodb::{Client, Database};
use tracing::info;

pub struct MongoDb {
    pub db: Database,
}

impl MongoDb {
    /// Connects and pings the server.
    pub async fn connect(uri: &str, database: &str) -> mongodb::error::Result<Self> {
        info!(database, "Connecting to MongoDB");
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);
        db.run_command(doc! { "ping": 1 }).await?;

        info!(database, "Connected to MongoDB");
        Ok(Self { db })
    }
}
