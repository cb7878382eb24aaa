// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trade evaluation results.

use serde::Serialize;
use serde_json::Number;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Which side of a trade comes out ahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum TradeVerdict {
    SideA,
    SideB,
    Even,
}

/// A ranked player with a known trade value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ValuedPlayer {
    pub player_id: String,
    pub name: String,
    pub position: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub rank: Number,
    pub value: f64,
}

/// Aggregate for one side of a trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TradeSide {
    pub total: f64,
    pub players: Vec<ValuedPlayer>,
    /// Ranked, but without a numeric `value` stat
    pub unvalued: Vec<String>,
    /// Not in the current ranking at all
    pub unknown: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TradeEvaluation {
    pub side_a: TradeSide,
    pub side_b: TradeSide,
    /// `side_a.total - side_b.total`
    pub difference: f64,
    pub favors: TradeVerdict,
}
