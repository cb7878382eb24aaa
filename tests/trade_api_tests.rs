// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trade valuation API tests.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::body_json;

fn post_json(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/trades/value")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_trade_totals() {
    let app = common::create_test_app().await;

    let response = app
        .oneshot(post_json(json!({
            "sport": "nfl",
            "format": "redraft",
            "scoring": "ppr",
            "sideA": ["4046"],
            "sideB": ["6794", "4881", "0000"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;

    assert_eq!(body["sideA"]["total"], 9800.0);
    assert_eq!(body["sideA"]["players"][0]["position"], "RB");
    assert_eq!(body["sideB"]["total"], 9400.0);
    // Ranked without a value, and not ranked at all
    assert_eq!(body["sideB"]["unvalued"], json!(["4881"]));
    assert_eq!(body["sideB"]["unknown"], json!(["0000"]));
    assert_eq!(body["difference"], 400.0);
    // 400 is within 5% of 9800
    assert_eq!(body["favors"], "even");
}

#[tokio::test]
async fn test_trade_favors_stronger_side() {
    let app = common::create_test_app().await;

    let response = app
        .oneshot(post_json(json!({
            "sport": "nfl",
            "format": "redraft",
            "scoring": "ppr",
            "sideA": ["4881"],
            "sideB": ["6794"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["favors"], "side_b");
}

#[tokio::test]
async fn test_trade_duplicate_player() {
    let app = common::create_test_app().await;

    let response = app
        .oneshot(post_json(json!({
            "sport": "nfl",
            "format": "redraft",
            "scoring": "ppr",
            "sideA": ["4046"],
            "sideB": ["4046"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_trade_empty_side() {
    let app = common::create_test_app().await;

    let response = app
        .oneshot(post_json(json!({
            "sport": "nfl",
            "format": "redraft",
            "scoring": "ppr",
            "sideA": [],
            "sideB": ["4046"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_trade_too_many_players() {
    let app = common::create_test_app().await;
    let side_a: Vec<String> = (0..11).map(|i| i.to_string()).collect();

    let response = app
        .oneshot(post_json(json!({
            "sport": "nfl",
            "format": "redraft",
            "scoring": "ppr",
            "sideA": side_a,
            "sideB": ["4046"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_trade_malformed_body() {
    let app = common::create_test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/trades/value")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"sport\": \"nfl\""))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_trade_without_ranking() {
    let app = common::create_test_app().await;

    let response = app
        .oneshot(post_json(json!({
            "sport": "nba",
            "format": "dynasty",
            "scoring": "points",
            "sideA": ["1"],
            "sideB": ["2"]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
