// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Joins ranking rows against the synced player pool.
//!
//! Ranking documents only carry `playerId`, `name` and `rank`; the dashboard
//! also needs position, team and stats. The join is done in memory per
//! request: the pool is indexed once by player ID and each ranking row is
//! looked up in order, so output order always matches ranking order.

use crate::models::ranking::PLACEHOLDER;
use crate::models::{EnrichedRanking, PlayerRecord, RankingEntry, RawRankingEntry};
use serde_json::Value;
use std::collections::HashMap;

/// Why a ranking row was left out of the enriched list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingPlayerId,
    MissingName,
    NonNumericRank,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MissingPlayerId => "missing_player_id",
            SkipReason::MissingName => "missing_name",
            SkipReason::NonNumericRank => "non_numeric_rank",
        }
    }
}

/// A dropped row, by its position in the source ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub index: usize,
    pub reason: SkipReason,
}

/// Result of [`enrich`].
#[derive(Debug, Clone, Default)]
pub struct EnrichmentOutcome {
    pub rankings: Vec<EnrichedRanking>,
    pub skipped: Vec<SkippedEntry>,
}

/// Player pool keyed by normalized player ID.
pub struct PlayerIndex<'a> {
    by_id: HashMap<String, &'a PlayerRecord>,
}

impl<'a> PlayerIndex<'a> {
    /// Index a pool. When an ID repeats, the first record wins.
    pub fn build(players: &'a [PlayerRecord]) -> Self {
        let mut by_id = HashMap::with_capacity(players.len());
        for player in players {
            if let Some(id) = player.player_id.as_ref().and_then(normalize_player_id) {
                by_id.entry(id).or_insert(player);
            }
        }
        Self { by_id }
    }

    pub fn get(&self, player_id: &str) -> Option<&'a PlayerRecord> {
        self.by_id.get(player_id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Canonical string form of a player ID.
///
/// Providers store IDs as strings or numbers (sometimes as whole-valued
/// doubles), so `7`, `7.0` and `"7"` all normalize to `"7"`.
pub fn normalize_player_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                Some(v.to_string())
            } else if let Some(v) = n.as_u64() {
                Some(v.to_string())
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15)
                    .map(|f| (f as i64).to_string())
            }
        }
        _ => None,
    }
}

/// Check the required fields of a stored ranking row.
pub fn validate_entry(entry: &RawRankingEntry) -> Result<RankingEntry, SkipReason> {
    let player_id = entry
        .player_id
        .as_ref()
        .and_then(normalize_player_id)
        .ok_or(SkipReason::MissingPlayerId)?;

    let name = match &entry.name {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => return Err(SkipReason::MissingName),
    };

    let rank = match &entry.rank {
        Some(Value::Number(n)) => n.clone(),
        _ => return Err(SkipReason::NonNumericRank),
    };

    Ok(RankingEntry {
        player_id,
        name,
        rank,
    })
}

/// Join `entries` against `players`, keeping ranking order.
pub fn enrich(entries: &[RawRankingEntry], players: &[PlayerRecord]) -> EnrichmentOutcome {
    enrich_with_index(entries, &PlayerIndex::build(players))
}

/// Same as [`enrich`], against a pool that is already indexed.
pub fn enrich_with_index(
    entries: &[RawRankingEntry],
    index: &PlayerIndex<'_>,
) -> EnrichmentOutcome {
    let mut outcome = EnrichmentOutcome {
        rankings: Vec::with_capacity(entries.len()),
        skipped: Vec::new(),
    };

    for (i, raw) in entries.iter().enumerate() {
        let entry = match validate_entry(raw) {
            Ok(entry) => entry,
            Err(reason) => {
                outcome.skipped.push(SkippedEntry { index: i, reason });
                continue;
            }
        };

        let player = index.get(&entry.player_id);
        outcome.rankings.push(EnrichedRanking {
            position: player
                .and_then(PlayerRecord::position)
                .unwrap_or(PLACEHOLDER)
                .to_string(),
            team: player
                .and_then(PlayerRecord::team)
                .unwrap_or(PLACEHOLDER)
                .to_string(),
            stats: player.and_then(PlayerRecord::stats).cloned(),
            player_id: entry.player_id,
            name: entry.name,
            rank: entry.rank,
        });
    }

    outcome
}
