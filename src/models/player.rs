// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Player records as synced from the data providers.

use crate::models::lenient::{non_empty_str, vec_or_default};
use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-sport stats document from the `stats` collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPool {
    pub sport: String,
    #[serde(default)]
    pub updated_at: Option<Bson>,
    /// Non-object records load as empty records, which never match a ranking.
    #[serde(default, deserialize_with = "vec_or_default")]
    pub players: Vec<PlayerRecord>,
}

/// One player inside a [`PlayerPool`].
///
/// Providers disagree on shape: some nest profile data under `info`,
/// others put `position`/`team` at the top level, and a few use objects
/// where a string is expected. Fields are kept as raw JSON and read
/// through the accessors, which treat anything unexpected as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    #[serde(default)]
    pub player_id: Option<Value>,
    #[serde(default)]
    pub info: Option<Value>,
    #[serde(default)]
    pub position: Option<Value>,
    #[serde(default)]
    pub team: Option<Value>,
    #[serde(default)]
    pub stats: Option<Value>,
}

impl PlayerRecord {
    /// Position, preferring `info.position` over the top-level field.
    pub fn position(&self) -> Option<&str> {
        self.profile_field("position", self.position.as_ref())
    }

    /// Team, preferring `info.team` over the top-level field.
    pub fn team(&self) -> Option<&str> {
        self.profile_field("team", self.team.as_ref())
    }

    /// Stats mapping, if the record has one.
    pub fn stats(&self) -> Option<&Map<String, Value>> {
        self.stats.as_ref().and_then(Value::as_object)
    }

    fn profile_field<'a>(&'a self, name: &str, top_level: Option<&'a Value>) -> Option<&'a str> {
        let nested = self.info.as_ref().and_then(|info| info.get(name));
        non_empty_str(nested).or_else(|| non_empty_str(top_level))
    }
}
