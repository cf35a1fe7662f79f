use crate::error::AppError;
use crate::models::Product;
use backoff::future::retry;
use backoff::ExponentialBackoff;
use mongodb::{bson::doc, Client as MongoClient, Collection, Database};
use std::time::Duration;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    /// Startup connection supervised with exponential backoff. The driver
    /// connects lazily, so a ping is issued to force the handshake before the
    /// handle is handed to the application.
    pub async fn connect_with_backoff(uri: &str, database: &str) -> Result<Self, AppError> {
        let backoff = ExponentialBackoff {
            max_elapsed_time: Some(Duration::from_secs(30)),
            ..Default::default()
        };

        retry(backoff, || async {
            let db = Self::connect(uri, database)
                .await
                .map_err(backoff::Error::transient)?;
            db.health_check().await.map_err(|e| {
                tracing::warn!("MongoDB not reachable yet, retrying: {}", e);
                backoff::Error::transient(e)
            })?;
            Ok(db)
        })
        .await
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn products(&self) -> Collection<Product> {
        self.db.collection("products")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}
