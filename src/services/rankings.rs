// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ranking lookups: fetch the latest ranking and player pool, then enrich.

use crate::db::RankingStore;
use crate::error::{AppError, Result};
use crate::models::{EnrichedRanking, RankingKey, TradeEvaluation};
use crate::services::{enrichment, trade};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// An enriched ranking ready to serve.
#[derive(Debug, Clone)]
pub struct RankedList {
    pub key: RankingKey,
    pub published_at: Option<DateTime<Utc>>,
    pub rankings: Vec<EnrichedRanking>,
}

/// Ranking reads on top of a [`RankingStore`].
#[derive(Clone)]
pub struct RankingService {
    store: Arc<dyn RankingStore>,
}

impl RankingService {
    pub fn new(store: Arc<dyn RankingStore>) -> Self {
        Self { store }
    }

    /// Latest ranking for `key`, joined with the sport's player pool.
    ///
    /// Returns `NotFound` when no ranking is published for the key, or when
    /// every row in it is malformed.
    pub async fn latest_enriched(&self, key: &RankingKey) -> Result<RankedList> {
        let (document, pool) = tokio::try_join!(
            self.store.latest_ranking(key),
            self.store.player_pool(&key.sport),
        )?;

        let document =
            document.ok_or_else(|| AppError::NotFound(format!("No rankings published for {key}")))?;

        let players = pool.map(|p| p.players).unwrap_or_default();
        let index = enrichment::PlayerIndex::build(&players);
        if index.is_empty() {
            tracing::warn!(sport = %key.sport, "No player pool; rankings will lack position/team");
        }

        let outcome = enrichment::enrich_with_index(&document.rankings, &index);
        for skipped in &outcome.skipped {
            tracing::warn!(
                key = %key,
                index = skipped.index,
                reason = skipped.reason.as_str(),
                "Skipping malformed ranking entry"
            );
        }

        if outcome.rankings.is_empty() {
            return Err(AppError::NotFound(format!(
                "No valid ranking entries for {key}"
            )));
        }

        tracing::debug!(
            key = %key,
            entries = outcome.rankings.len(),
            skipped = outcome.skipped.len(),
            players = index.len(),
            "Enriched rankings"
        );

        Ok(RankedList {
            key: key.clone(),
            published_at: document.published_at_utc(),
            rankings: outcome.rankings,
        })
    }

    /// Value both sides of a trade against the latest ranking for `key`.
    pub async fn evaluate_trade(
        &self,
        key: &RankingKey,
        side_a: &[String],
        side_b: &[String],
    ) -> Result<TradeEvaluation> {
        trade::check_sides(side_a, side_b)?;

        let list = self.latest_enriched(key).await?;
        let evaluation = trade::evaluate(&list.rankings, side_a, side_b);

        tracing::info!(
            key = %key,
            side_a_total = evaluation.side_a.total,
            side_b_total = evaluation.side_b.total,
            favors = ?evaluation.favors,
            "Evaluated trade"
        );
        Ok(evaluation)
    }
}
