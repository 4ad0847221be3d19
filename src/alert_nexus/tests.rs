use super::aggregator::{AlertAggregator, AlertDecision};
use super::alert_endpoint;
use crate::keychain::Keychain;
use crate::mission_control::tests::RecordingLink;
use crate::mission_control::{Command, Coordinates, TAKEOFF_ALTITUDE};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn alert_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/alert")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Polls the fake actuator until `n` commands arrived or a timeout passes.
/// Mission dispatch is fire-and-forget, so endpoint tests have to wait.
async fn wait_for_commands(link: &RecordingLink, n: usize) -> Vec<Command> {
    for _ in 0..200 {
        {
            let sent = link.sent.lock().await;
            if sent.len() >= n {
                return sent.clone();
            }
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    link.sent.lock().await.clone()
}

#[tokio::test]
async fn counts_accumulate_below_threshold() {
    let aggregator = AlertAggregator::new(5);
    for expected in 1..=5 {
        assert_eq!(aggregator.report("3").await, AlertDecision::Accumulated(expected));
    }
    assert_eq!(aggregator.count("3").await, 5);
    assert_eq!(aggregator.count("never-reported").await, 0);
}

#[tokio::test]
async fn crossing_threshold_triggers_once_and_resets() {
    let aggregator = AlertAggregator::new(2);
    assert_eq!(aggregator.report("0").await, AlertDecision::Accumulated(1));
    assert_eq!(aggregator.report("0").await, AlertDecision::Accumulated(2));
    assert_eq!(aggregator.report("0").await, AlertDecision::TriggerMission);
    assert_eq!(aggregator.count("0").await, 0);

    // Counters are per sensor; another node is unaffected by the reset.
    assert_eq!(aggregator.report("1").await, AlertDecision::Accumulated(1));
    assert_eq!(aggregator.count("1").await, 1);
}

#[tokio::test]
async fn concurrent_reports_trigger_exactly_once() {
    let aggregator = Arc::new(AlertAggregator::new(99));
    let mut handles = Vec::new();
    for _ in 0..100 {
        let agg = Arc::clone(&aggregator);
        handles.push(tokio::spawn(async move { agg.report("42").await }));
    }
    let mut triggers = 0;
    for handle in handles {
        if handle.await.unwrap() == AlertDecision::TriggerMission {
            triggers += 1;
        }
    }
    assert_eq!(triggers, 1);
    assert_eq!(aggregator.count("42").await, 0);
}

#[tokio::test]
async fn report_without_coordinates_is_rejected_without_counting() {
    let keychain = Arc::new(Keychain::with_link(2, Arc::new(RecordingLink::grounded())));
    let app = alert_endpoint::router(Arc::clone(&keychain));

    let response = app.oneshot(alert_request(json!({"sensorId": "0"}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert!(body.get("error").is_some());
    assert_eq!(keychain.aggregator().count("0").await, 0);
}

#[tokio::test]
async fn report_without_sensor_id_is_rejected() {
    let keychain = Arc::new(Keychain::with_link(2, Arc::new(RecordingLink::grounded())));
    let app = alert_endpoint::router(keychain);

    let response = app
        .oneshot(alert_request(json!({"coordinates": {"lat": 1.0, "lon": 2.0}})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn valid_report_is_acknowledged() {
    let keychain = Arc::new(Keychain::with_link(100, Arc::new(RecordingLink::grounded())));
    let app = alert_endpoint::router(Arc::clone(&keychain));

    let response = app
        .oneshot(alert_request(
            json!({"sensorId": "2", "coordinates": {"lat": -250.0, "lon": 150.0}}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body.get("message").is_some());
    assert_eq!(keychain.aggregator().count("2").await, 1);
}

#[tokio::test]
async fn numeric_sensor_ids_are_accepted() {
    let keychain = Arc::new(Keychain::with_link(100, Arc::new(RecordingLink::grounded())));
    let app = alert_endpoint::router(Arc::clone(&keychain));

    let response = app
        .oneshot(alert_request(json!({"sensorId": 3, "coordinates": {"lat": 0.0, "lon": 0.0}})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(keychain.aggregator().count("3").await, 1);
}

#[tokio::test]
async fn third_report_launches_grounded_departure() {
    let link = Arc::new(RecordingLink::grounded());
    let keychain = Arc::new(Keychain::with_link(2, Arc::clone(&link) as _));
    let app = alert_endpoint::router(Arc::clone(&keychain));
    let report = json!({"sensorId": "0", "coordinates": {"lat": 1.0, "lon": 2.0}});

    for _ in 0..2 {
        let response = app.clone().oneshot(alert_request(report.clone())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    // Two reports are below the threshold: nothing was dispatched.
    assert!(link.sent.lock().await.is_empty());
    assert_eq!(keychain.aggregator().count("0").await, 2);

    let response = app.clone().oneshot(alert_request(report)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let sent = wait_for_commands(&link, 2).await;
    assert_eq!(
        sent,
        vec![
            Command::Takeoff { altitude: TAKEOFF_ALTITUDE },
            Command::MoveForward(Coordinates { lat: 1.0, lon: 2.0 }),
        ]
    );
    assert_eq!(keychain.aggregator().count("0").await, 0);
}

#[tokio::test]
async fn health_probe_answers() {
    let keychain = Arc::new(Keychain::with_link(2, Arc::new(RecordingLink::grounded())));
    let app = alert_endpoint::router(keychain);

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
