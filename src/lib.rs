// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Playbook: fantasy rankings backend
//!
//! This crate provides the API behind the Playbook dashboard: it serves the
//! latest published rankings joined with synced player data, and values
//! trades against them.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::RankingService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub rankings: RankingService,
}
