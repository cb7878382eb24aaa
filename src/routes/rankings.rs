// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ranking routes.

use crate::error::{AppError, Result};
use crate::models::ranking::validate_key_part;
use crate::models::{EnrichedRanking, RankingKey};
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Rankings only change when a sync job publishes.
pub const RANKINGS_CACHE_CONTROL: &str = "public, max-age=300";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/rankings", get(get_rankings))
}

#[derive(Debug, Deserialize, Validate)]
struct RankingsQuery {
    #[serde(default)]
    #[validate(custom(function = "validate_key_part"))]
    sport: String,
    #[serde(default)]
    #[validate(custom(function = "validate_key_part"))]
    format: String,
    #[serde(default)]
    #[validate(custom(function = "validate_key_part"))]
    scoring: String,
}

/// Enriched ranking response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RankingsResponse {
    pub sport: String,
    pub format: String,
    pub scoring: String,
    pub published_at: Option<String>,
    pub count: usize,
    pub rankings: Vec<EnrichedRanking>,
}

/// Latest rankings for a sport/format/scoring, joined with player data.
async fn get_rankings(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<RankingsQuery>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(params) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    params.validate()?;
    let key = RankingKey::new(&params.sport, &params.format, &params.scoring)?;

    tracing::debug!(key = %key, "Fetching rankings");

    let list = state.rankings.latest_enriched(&key).await?;

    let body = RankingsResponse {
        sport: list.key.sport,
        format: list.key.format,
        scoring: list.key.scoring,
        published_at: list.published_at.map(format_utc_rfc3339),
        count: list.rankings.len(),
        rankings: list.rankings,
    };

    Ok(([(header::CACHE_CONTROL, RANKINGS_CACHE_CONTROL)], Json(body)))
}
