// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::Response;
use playbook_api::config::Config;
use playbook_api::db::{MemoryStore, MongoDb, RankingStore};
use playbook_api::models::{PlayerPool, RankingDocument};
use playbook_api::routes::create_router;
use playbook_api::services::RankingService;
use playbook_api::AppState;
use std::sync::Arc;

/// MongoDB URI for integration tests, if one is configured.
#[allow(dead_code)]
pub fn mongo_test_uri() -> Option<String> {
    std::env::var("MONGODB_TEST_URI").ok()
}

/// Skip test with message if no test database is configured.
#[macro_export]
macro_rules! require_mongo {
    () => {
        match crate::common::mongo_test_uri() {
            Some(uri) => uri,
            None => {
                eprintln!("⚠️  Skipping: MONGODB_TEST_URI not set");
                return;
            }
        }
    };
}

/// Build the router on top of any store.
#[allow(dead_code)]
pub fn app_with_store(store: Arc<dyn RankingStore>) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        rankings: RankingService::new(store),
    });
    (create_router(state.clone()), state)
}

/// Create a test app backed by an offline database: every lookup fails.
#[allow(dead_code)]
pub fn create_offline_app() -> axum::Router {
    app_with_store(Arc::new(MongoDb::new_mock())).0
}

/// Create a test app seeded with the standard NFL fixtures.
#[allow(dead_code)]
pub async fn create_test_app() -> axum::Router {
    let store = MemoryStore::new();
    store.insert_ranking(nfl_ranking()).await;
    store.insert_player_pool(nfl_pool()).await;
    app_with_store(Arc::new(store)).0
}

/// Latest NFL redraft PPR ranking, with two malformed rows mixed in.
#[allow(dead_code)]
pub fn nfl_ranking() -> RankingDocument {
    serde_json::from_value(serde_json::json!({
        "sport": "nfl",
        "format": "redraft",
        "scoring": "ppr",
        "isLatest": true,
        "publishedAt": "2025-09-02T15:30:00Z",
        "rankings": [
            { "playerId": "4046", "name": "Christian McCaffrey", "rank": 1 },
            { "playerId": "6794", "name": "Justin Jefferson", "rank": 2 },
            { "playerId": "9999", "name": "Rookie Unknown", "rank": 3 },
            { "name": "No Id Row", "rank": 4 },
            { "playerId": 4881, "name": "Lamar Jackson", "rank": 5 },
            { "playerId": "1111", "name": "Bad Rank", "rank": "6" }
        ]
    }))
    .expect("fixture ranking")
}

/// An older NFL ranking that is no longer flagged latest.
#[allow(dead_code)]
pub fn stale_nfl_ranking() -> RankingDocument {
    serde_json::from_value(serde_json::json!({
        "sport": "nfl",
        "format": "redraft",
        "scoring": "ppr",
        "isLatest": false,
        "publishedAt": "2025-08-26T15:30:00Z",
        "rankings": [
            { "playerId": "6794", "name": "Justin Jefferson", "rank": 1 }
        ]
    }))
    .expect("fixture ranking")
}

/// NFL player pool; trade values live in `stats.value`.
#[allow(dead_code)]
pub fn nfl_pool() -> PlayerPool {
    serde_json::from_value(serde_json::json!({
        "sport": "nfl",
        "updatedAt": "2025-09-02T12:00:00Z",
        "players": [
            {
                "playerId": "4046",
                "info": { "name": "Christian McCaffrey", "position": "RB", "team": "SF" },
                "stats": { "value": 9800, "rushYds": 1459 }
            },
            {
                "playerId": "6794",
                "info": { "name": "Justin Jefferson", "position": "WR", "team": "MIN" },
                "stats": { "value": 9400 }
            },
            {
                "playerId": "4881",
                "position": "QB",
                "team": "BAL"
            }
        ]
    }))
    .expect("fixture pool")
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("JSON body")
}
