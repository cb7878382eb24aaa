// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory [`RankingStore`] for tests and fixtures.
//!
//! Mirrors the MongoDB query semantics: exact key match on the stored
//! fields, `isLatest` filter, newest first.

use crate::db::RankingStore;
use crate::error::AppError;
use crate::models::{PlayerPool, RankingDocument, RankingKey};
use crate::time_utils::bson_to_utc;
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    rankings: RwLock<Vec<RankingDocument>>,
    pools: RwLock<Vec<PlayerPool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_ranking(&self, document: RankingDocument) {
        self.rankings.write().await.push(document);
    }

    pub async fn insert_player_pool(&self, pool: PlayerPool) {
        self.pools.write().await.push(pool);
    }
}

#[async_trait]
impl RankingStore for MemoryStore {
    async fn latest_ranking(&self, key: &RankingKey) -> Result<Option<RankingDocument>, AppError> {
        let rankings = self.rankings.read().await;
        Ok(rankings
            .iter()
            .filter(|d| {
                d.is_latest
                    && d.sport == key.sport
                    && d.format == key.format
                    && d.scoring == key.scoring
            })
            .max_by_key(|d| d.published_at_utc())
            .cloned())
    }

    async fn player_pool(&self, sport: &str) -> Result<Option<PlayerPool>, AppError> {
        let pools = self.pools.read().await;
        Ok(pools
            .iter()
            .filter(|p| p.sport == sport)
            .max_by_key(|p| p.updated_at.as_ref().and_then(bson_to_utc))
            .cloned())
    }
}
