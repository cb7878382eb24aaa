//! Database layer (MongoDB).

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoDb;

use crate::error::AppError;
use crate::models::{PlayerPool, RankingDocument, RankingKey};
use async_trait::async_trait;

/// Collection names as constants.
pub mod collections {
    /// Published rankings, one document per (sport, format, scoring) publish
    pub const RANKINGS: &str = "rankings";
    /// Per-sport player pools with stats
    pub const STATS: &str = "stats";
}

/// Read access to rankings and player pools.
#[async_trait]
pub trait RankingStore: Send + Sync {
    /// The document flagged `isLatest` for `key`, newest publish first.
    async fn latest_ranking(&self, key: &RankingKey) -> Result<Option<RankingDocument>, AppError>;

    /// The player pool for `sport`, most recently updated first.
    async fn player_pool(&self, sport: &str) -> Result<Option<PlayerPool>, AppError>;
}

