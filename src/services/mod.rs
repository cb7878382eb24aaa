// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod enrichment;
pub mod rankings;
pub mod trade;

pub use enrichment::{enrich, enrich_with_index, EnrichmentOutcome, PlayerIndex, SkipReason};
pub use rankings::{RankedList, RankingService};
