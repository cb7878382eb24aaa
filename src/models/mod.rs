// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod lenient;
pub mod player;
pub mod ranking;
pub mod trade;

pub use player::{PlayerPool, PlayerRecord};
pub use ranking::{EnrichedRanking, RankingDocument, RankingEntry, RankingKey, RawRankingEntry};
pub use trade::{TradeEvaluation, TradeSide, TradeVerdict, ValuedPlayer};
