// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trade valuation routes.

use crate::error::{AppError, Result};
use crate::models::ranking::validate_key_part;
use crate::models::{RankingKey, TradeEvaluation};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/trades/value", post(value_trade))
}

/// Trade to evaluate: up to ten player IDs on each side.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct TradeRequest {
    #[validate(custom(function = "validate_key_part"))]
    sport: String,
    #[validate(custom(function = "validate_key_part"))]
    format: String,
    #[validate(custom(function = "validate_key_part"))]
    scoring: String,
    #[validate(length(min = 1, max = 10))]
    side_a: Vec<String>,
    #[validate(length(min = 1, max = 10))]
    side_b: Vec<String>,
}

/// Value a proposed trade against the latest ranking.
async fn value_trade(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<TradeRequest>, JsonRejection>,
) -> Result<Json<TradeEvaluation>> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    request.validate()?;
    let key = RankingKey::new(&request.sport, &request.format, &request.scoring)?;

    tracing::debug!(
        key = %key,
        side_a = request.side_a.len(),
        side_b = request.side_b.len(),
        "Valuing trade"
    );

    let evaluation = state
        .rankings
        .evaluate_trade(&key, &request.side_a, &request.side_b)
        .await?;

    Ok(Json(evaluation))
}
