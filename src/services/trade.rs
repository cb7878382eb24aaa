// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trade value aggregation over an enriched ranking.
//!
//! A player's trade value is the numeric `value` stat synced from the
//! trade-value provider. Players without one still show up, but do not
//! count toward a side's total.

use crate::error::AppError;
use crate::models::{EnrichedRanking, TradeEvaluation, TradeSide, TradeVerdict, ValuedPlayer};
use std::collections::{HashMap, HashSet};

/// Trades within this fraction of the larger side are called even.
const EVEN_TOLERANCE: f64 = 0.05;

const VALUE_STAT: &str = "value";

/// Reject trades that list a player twice.
pub fn check_sides(side_a: &[String], side_b: &[String]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for id in side_a.iter().chain(side_b) {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::BadRequest("Player IDs must not be empty".to_string()));
        }
        if !seen.insert(id) {
            return Err(AppError::BadRequest(format!(
                "Player {id} appears more than once in the trade"
            )));
        }
    }
    Ok(())
}

/// Total up both sides of a trade against `rankings`.
pub fn evaluate(rankings: &[EnrichedRanking], side_a: &[String], side_b: &[String]) -> TradeEvaluation {
    let by_id: HashMap<&str, &EnrichedRanking> = rankings
        .iter()
        .rev() // first occurrence wins
        .map(|r| (r.player_id.as_str(), r))
        .collect();

    let side_a = aggregate(&by_id, side_a);
    let side_b = aggregate(&by_id, side_b);
    let difference = side_a.total - side_b.total;

    TradeEvaluation {
        favors: verdict(side_a.total, side_b.total),
        side_a,
        side_b,
        difference,
    }
}

fn aggregate(by_id: &HashMap<&str, &EnrichedRanking>, ids: &[String]) -> TradeSide {
    let mut side = TradeSide::default();

    for id in ids {
        let id = id.trim();
        let Some(ranked) = by_id.get(id) else {
            side.unknown.push(id.to_string());
            continue;
        };

        match player_value(ranked) {
            Some(value) => {
                side.total += value;
                side.players.push(ValuedPlayer {
                    player_id: ranked.player_id.clone(),
                    name: ranked.name.clone(),
                    position: ranked.position.clone(),
                    rank: ranked.rank.clone(),
                    value,
                });
            }
            None => side.unvalued.push(id.to_string()),
        }
    }

    side
}

fn player_value(ranked: &EnrichedRanking) -> Option<f64> {
    ranked
        .stats
        .as_ref()?
        .get(VALUE_STAT)?
        .as_f64()
        .filter(|v| v.is_finite())
}

fn verdict(total_a: f64, total_b: f64) -> TradeVerdict {
    let larger = total_a.abs().max(total_b.abs());
    if larger == 0.0 || (total_a - total_b).abs() <= larger * EVEN_TOLERANCE {
        TradeVerdict::Even
    } else if total_a > total_b {
        TradeVerdict::SideA
    } else {
        TradeVerdict::SideB
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ranking::PLACEHOLDER;
    use serde_json::json;

    fn ranked(id: &str, rank: u64, value: Option<serde_json::Value>) -> EnrichedRanking {
        EnrichedRanking {
            player_id: id.to_string(),
            name: format!("Player {id}"),
            rank: rank.into(),
            position: PLACEHOLDER.to_string(),
            team: PLACEHOLDER.to_string(),
            stats: value.map(|v| {
                let mut stats = serde_json::Map::new();
                stats.insert(VALUE_STAT.to_string(), v);
                stats
            }),
        }
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_totals_and_buckets() {
        let rankings = vec![
            ranked("a", 1, Some(json!(9000))),
            ranked("b", 2, Some(json!(7500.5))),
            ranked("c", 3, Some(json!("high"))),
            ranked("d", 4, None),
        ];

        let eval = evaluate(&rankings, &ids(&["a"]), &ids(&["b", "c", "d", "zz"]));

        assert_eq!(eval.side_a.total, 9000.0);
        assert_eq!(eval.side_b.total, 7500.5);
        assert_eq!(eval.side_b.players.len(), 1);
        assert_eq!(eval.side_b.unvalued, ["c", "d"]);
        assert_eq!(eval.side_b.unknown, ["zz"]);
        assert_eq!(eval.difference, 1499.5);
        assert_eq!(eval.favors, TradeVerdict::SideA);
    }

    #[test]
    fn test_even_within_tolerance() {
        assert_eq!(verdict(100.0, 96.0), TradeVerdict::Even);
        assert_eq!(verdict(100.0, 94.0), TradeVerdict::SideA);
        assert_eq!(verdict(10.0, 50.0), TradeVerdict::SideB);
        assert_eq!(verdict(0.0, 0.0), TradeVerdict::Even);
    }

    #[test]
    fn test_check_sides() {
        assert!(check_sides(&ids(&["a", "b"]), &ids(&["c"])).is_ok());
        assert!(matches!(
            check_sides(&ids(&["a"]), &ids(&["a"])),
            Err(AppError::BadRequest(_))
        ));
        assert!(check_sides(&ids(&["a", " a "]), &ids(&["c"])).is_err());
        assert!(check_sides(&ids(&[""]), &ids(&["c"])).is_err());
    }
}
