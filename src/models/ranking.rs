// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ranking documents as stored by the sync jobs, and the enriched rows
//! served to the dashboard.

use crate::error::AppError;
use crate::models::lenient::vec_or_default;
use crate::time_utils::bson_to_utc;
use chrono::{DateTime, Utc};
use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::ValidationError;

/// Shown for position/team when the player pool has nothing for a player.
pub const PLACEHOLDER: &str = "—";

const MAX_KEY_PART_LEN: usize = 32;

/// A published ranking for one (sport, format, scoring) combination.
///
/// Stored in the `rankings` collection. Entries are kept loose because
/// older sync runs wrote partial rows; they are validated at enrichment time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingDocument {
    pub sport: String,
    pub format: String,
    pub scoring: String,
    /// Only one document per key should carry this flag.
    #[serde(default)]
    pub is_latest: bool,
    /// BSON date, or an RFC 3339 string in documents written by hand.
    #[serde(default)]
    pub published_at: Option<Bson>,
    /// Non-object rows load as empty entries and are skipped at enrichment.
    #[serde(default, deserialize_with = "vec_or_default")]
    pub rankings: Vec<RawRankingEntry>,
}

impl RankingDocument {
    /// Publication time, if present and parseable.
    pub fn published_at_utc(&self) -> Option<DateTime<Utc>> {
        self.published_at.as_ref().and_then(bson_to_utc)
    }
}

/// A ranking row exactly as stored; any field may be missing or mistyped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRankingEntry {
    #[serde(default)]
    pub player_id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub rank: Option<Value>,
}

/// A ranking row that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub player_id: String,
    pub name: String,
    pub rank: Number,
}

/// Ranking row joined with the player's position, team and stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EnrichedRanking {
    pub player_id: String,
    pub name: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub rank: Number,
    pub position: String,
    pub team: String,
    #[cfg_attr(
        feature = "binding-generation",
        ts(type = "Record<string, unknown> | null")
    )]
    pub stats: Option<Map<String, Value>>,
}

/// Identifies a ranking: sport, league format and scoring system.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankingKey {
    pub sport: String,
    pub format: String,
    pub scoring: String,
}

impl RankingKey {
    /// Build a key, lower-casing each part. Fails on empty parts, parts
    /// longer than 32 characters, or characters outside `[A-Za-z0-9_-]`.
    pub fn new(sport: &str, format: &str, scoring: &str) -> Result<Self, AppError> {
        for (field, value) in [("sport", sport), ("format", format), ("scoring", scoring)] {
            validate_key_part(value).map_err(|_| {
                AppError::BadRequest(format!(
                    "Invalid '{field}': expected 1-{MAX_KEY_PART_LEN} characters of [A-Za-z0-9_-]"
                ))
            })?;
        }

        Ok(Self {
            sport: sport.to_ascii_lowercase(),
            format: format.to_ascii_lowercase(),
            scoring: scoring.to_ascii_lowercase(),
        })
    }
}

impl fmt::Display for RankingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.sport, self.format, self.scoring)
    }
}

/// Validator hook shared by the query and body DTOs.
pub fn validate_key_part(value: &str) -> Result<(), ValidationError> {
    let valid = !value.is_empty()
        && value.len() <= MAX_KEY_PART_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("ranking_key"))
    }
}
