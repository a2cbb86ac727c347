//! Aggregation tests across multiple upstream bidders.
//!
//! Tests verify:
//! - Highest price wins a tile, with ties kept by arrival order
//! - Tile ordering and omission in the assembled response
//! - Failure and timeout isolation between upstreams
//! - The outbound request every upstream receives

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use super::test_utils::{
    bid, placement_json, post_placement, test_router, MockBidSource, TEST_BID_TIMEOUT,
};

async fn response_payload(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Price Selection
// =============================================================================

#[tokio::test]
async fn test_highest_price_wins_across_upstreams() {
    let source = MockBidSource::new()
        .with_bids("ads-a:9000", vec![bid(1, 1.0, "low")])
        .with_bids("ads-b:9000", vec![bid(1, 4.5, "high")]);
    let router = test_router(source, &["ads-a:9000", "ads-b:9000"], TEST_BID_TIMEOUT);

    let body = placement_json("req-agg-1", &[(1, 300, 0.5)]);
    let response = router.oneshot(post_placement(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = response_payload(response).await;
    assert_eq!(payload["imp"].as_array().unwrap().len(), 1);
    assert_eq!(payload["imp"][0]["title"], "high");
}

#[tokio::test]
async fn test_equal_prices_keep_first_arrival() {
    // The delayed upstream bids the same price; the earlier bid must hold
    let source = MockBidSource::new()
        .with_bids("ads-a:9000", vec![bid(1, 3.0, "first")])
        .with_delayed_bids(
            "ads-b:9000",
            Duration::from_millis(100),
            vec![bid(1, 3.0, "second")],
        );
    let router = test_router(
        source,
        &["ads-a:9000", "ads-b:9000"],
        Duration::from_secs(1),
    );

    let body = placement_json("req-agg-2", &[(1, 300, 0.5)]);
    let response = router.oneshot(post_placement(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = response_payload(response).await;
    assert_eq!(payload["imp"][0]["title"], "first");
}

#[tokio::test]
async fn test_equal_price_within_one_reply_keeps_first_listed() {
    let source = MockBidSource::new().with_bids(
        "ads-a:9000",
        vec![bid(1, 3.0, "listed-first"), bid(1, 3.0, "listed-second")],
    );
    let router = test_router(source, &["ads-a:9000"], TEST_BID_TIMEOUT);

    let body = placement_json("req-agg-3", &[(1, 300, 0.5)]);
    let response = router.oneshot(post_placement(&body)).await.unwrap();

    let payload = response_payload(response).await;
    assert_eq!(payload["imp"][0]["title"], "listed-first");
}

#[tokio::test]
async fn test_zero_price_bid_fills_tile() {
    let source = MockBidSource::new().with_bids("ads-a:9000", vec![bid(1, 0.0, "free")]);
    let router = test_router(source, &["ads-a:9000"], TEST_BID_TIMEOUT);

    let body = placement_json("req-agg-4", &[(1, 300, 0.5)]);
    let response = router.oneshot(post_placement(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = response_payload(response).await;
    assert_eq!(payload["imp"][0]["title"], "free");
}

// =============================================================================
// Assembly
// =============================================================================

#[tokio::test]
async fn test_response_preserves_caller_tile_order() {
    let source = MockBidSource::new()
        .with_bids("ads-a:9000", vec![bid(9, 1.0, "nine"), bid(3, 1.0, "three")])
        .with_bids("ads-b:9000", vec![bid(7, 1.0, "seven")]);
    let router = test_router(source, &["ads-a:9000", "ads-b:9000"], TEST_BID_TIMEOUT);

    let body = placement_json("req-agg-5", &[(7, 300, 0.5), (3, 300, 0.5), (9, 300, 0.5)]);
    let response = router.oneshot(post_placement(&body)).await.unwrap();

    let payload = response_payload(response).await;
    let ids: Vec<u64> = payload["imp"]
        .as_array()
        .unwrap()
        .iter()
        .map(|imp| imp["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![7, 3, 9]);
}

#[tokio::test]
async fn test_unfilled_tiles_omitted() {
    let source = MockBidSource::new().with_bids("ads-a:9000", vec![bid(2, 1.0, "only-two")]);
    let router = test_router(source, &["ads-a:9000"], TEST_BID_TIMEOUT);

    let body = placement_json("req-agg-6", &[(1, 300, 0.5), (2, 300, 0.5), (3, 300, 0.5)]);
    let response = router.oneshot(post_placement(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = response_payload(response).await;
    let imps = payload["imp"].as_array().unwrap();
    assert_eq!(imps.len(), 1);
    assert_eq!(imps[0]["id"], 2);
}

#[tokio::test]
async fn test_bid_for_unknown_tile_yields_empty_fill() {
    // Bids arrived, so the outcome is Created, but none matched a tile
    let source = MockBidSource::new().with_bids("ads-a:9000", vec![bid(99, 5.0, "stray")]);
    let router = test_router(source, &["ads-a:9000"], TEST_BID_TIMEOUT);

    let body = placement_json("req-agg-7", &[(1, 300, 0.5)]);
    let response = router.oneshot(post_placement(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = response_payload(response).await;
    assert_eq!(payload["imp"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_overlapping_and_disjoint_bids_merge() {
    let source = MockBidSource::new()
        .with_bids(
            "ads-a:9000",
            vec![bid(1, 5.0, "a-one"), bid(2, 1.0, "a-two")],
        )
        .with_bids(
            "ads-b:9000",
            vec![bid(1, 2.0, "b-one"), bid(3, 3.0, "b-three")],
        );
    let router = test_router(source, &["ads-a:9000", "ads-b:9000"], TEST_BID_TIMEOUT);

    let body = placement_json("req-agg-8", &[(1, 300, 0.5), (2, 300, 0.5), (3, 300, 0.5)]);
    let response = router.oneshot(post_placement(&body)).await.unwrap();

    let payload = response_payload(response).await;
    let titles: Vec<&str> = payload["imp"]
        .as_array()
        .unwrap()
        .iter()
        .map(|imp| imp["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["a-one", "a-two", "b-three"]);
}

// =============================================================================
// Failure and Timeout Isolation
// =============================================================================

#[tokio::test]
async fn test_failed_upstream_does_not_block_others() {
    let source = MockBidSource::new()
        .with_failure("ads-a:9000")
        .with_bids("ads-b:9000", vec![bid(1, 2.0, "survivor")]);
    let router = test_router(source, &["ads-a:9000", "ads-b:9000"], TEST_BID_TIMEOUT);

    let body = placement_json("req-agg-9", &[(1, 300, 0.5)]);
    let response = router.oneshot(post_placement(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = response_payload(response).await;
    assert_eq!(payload["imp"][0]["title"], "survivor");
}

#[tokio::test]
async fn test_slow_upstream_abandoned_at_timeout() {
    let source = MockBidSource::new()
        .with_delayed_bids(
            "ads-a:9000",
            Duration::from_secs(60),
            vec![bid(1, 99.0, "too-late")],
        )
        .with_bids("ads-b:9000", vec![bid(1, 1.0, "on-time")]);
    let router = test_router(
        source,
        &["ads-a:9000", "ads-b:9000"],
        Duration::from_millis(150),
    );

    let body = placement_json("req-agg-10", &[(1, 300, 0.5)]);
    let start = Instant::now();
    let response = router.oneshot(post_placement(&body)).await.unwrap();
    let elapsed = start.elapsed();

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = response_payload(response).await;
    assert_eq!(payload["imp"][0]["title"], "on-time");

    // The slow upstream is cut off at the bid timeout, not awaited
    assert!(
        elapsed >= Duration::from_millis(150),
        "responded before the bid timeout elapsed: {:?}",
        elapsed
    );
    assert!(
        elapsed < Duration::from_secs(2),
        "waited on an abandoned upstream: {:?}",
        elapsed
    );
}

// =============================================================================
// Outbound Fan-Out
// =============================================================================

#[tokio::test]
async fn test_request_forwarded_to_every_upstream() {
    let source = MockBidSource::new()
        .with_bids("ads-a:9000", vec![bid(1, 1.0, "a")])
        .with_bids("ads-b:9000", vec![bid(1, 2.0, "b")])
        .with_bids("ads-c:9000", vec![]);
    let tracker = source.clone();
    let router = test_router(
        source,
        &["ads-a:9000", "ads-b:9000", "ads-c:9000"],
        TEST_BID_TIMEOUT,
    );

    let body = placement_json("req-agg-11", &[(1, 100, 0.333)]);
    let response = router.oneshot(post_placement(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let received = tracker.received_requests().await;
    assert_eq!(received.len(), 3);

    let mut endpoints: Vec<&str> = received.iter().map(|(e, _)| e.as_str()).collect();
    endpoints.sort_unstable();
    assert_eq!(endpoints, vec!["ads-a:9000", "ads-b:9000", "ads-c:9000"]);

    // Every upstream sees the same translated request
    for (_, request) in &received {
        assert_eq!(request.id, "req-agg-11");
        assert_eq!(request.imp.len(), 1);
        assert_eq!(request.imp[0].minwidth, 100);
        assert_eq!(request.imp[0].minheight, 33);
        assert_eq!(request.context.ip, "203.0.113.7");
    }
}
