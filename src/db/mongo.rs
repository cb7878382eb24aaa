// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! MongoDB client wrapper with typed operations.
//!
//! One client is created at startup and shared; the driver keeps its own
//! connection pool, so handlers never open connections themselves.

use crate::db::{collections, RankingStore};
use crate::error::AppError;
use crate::models::{PlayerPool, RankingDocument, RankingKey};
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

const APP_NAME: &str = "playbook-api";

/// MongoDB database client.
#[derive(Clone)]
pub struct MongoDb {
    database: Option<Database>,
}

impl MongoDb {
    /// Connect to MongoDB and verify the server answers a ping.
    pub async fn new(uri: &str, database: &str) -> Result<Self, AppError> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AppError::Database(format!("Invalid MongoDB URI: {}", e)))?;
        options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(options)
            .map_err(|e| AppError::Database(format!("Failed to create MongoDB client: {}", e)))?;
        let db = client.database(database);

        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to MongoDB: {}", e)))?;

        tracing::info!(database, "Connected to MongoDB");

        Ok(Self { database: Some(db) })
    }

    /// Create a mock client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { database: None }
    }

    /// Helper to get the database or return an error if offline.
    fn get_database(&self) -> Result<&Database, AppError> {
        self.database
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    fn rankings(&self) -> Result<Collection<RankingDocument>, AppError> {
        Ok(self.get_database()?.collection(collections::RANKINGS))
    }

    fn stats(&self) -> Result<Collection<PlayerPool>, AppError> {
        Ok(self.get_database()?.collection(collections::STATS))
    }
}

#[async_trait]
impl RankingStore for MongoDb {
    async fn latest_ranking(&self, key: &RankingKey) -> Result<Option<RankingDocument>, AppError> {
        let document = self
            .rankings()?
            .find_one(doc! {
                "sport": key.sport.as_str(),
                "format": key.format.as_str(),
                "scoring": key.scoring.as_str(),
                "isLatest": true,
            })
            .sort(doc! { "publishedAt": -1 })
            .await?;

        tracing::debug!(
            key = %key,
            found = document.is_some(),
            "Looked up latest ranking"
        );
        Ok(document)
    }

    async fn player_pool(&self, sport: &str) -> Result<Option<PlayerPool>, AppError> {
        let pool = self
            .stats()?
            .find_one(doc! { "sport": sport })
            .sort(doc! { "updatedAt": -1 })
            .await?;

        tracing::debug!(
            sport,
            players = pool.as_ref().map(|p| p.players.len()).unwrap_or(0),
            "Looked up player pool"
        );
        Ok(pool)
    }
}
