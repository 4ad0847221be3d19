use super::aggregator::AlertDecision;
use crate::keychain::Keychain;
use crate::mission_control::Coordinates;
use crate::{error, info, log};
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

/// HTTP surface exposed to the sensor nodes.
pub fn router(keychain: Arc<Keychain>) -> Router {
    Router::new()
        .route("/alert", post(report_alert))
        .route("/health", get(health_check))
        .with_state(keychain)
}

/// Binds `addr` and serves the alert surface until `shutdown` fires.
pub async fn serve(
    addr: &str,
    keychain: Arc<Keychain>,
    shutdown: CancellationToken,
) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    info!("Alert endpoint listening on {addr}");
    axum::serve(listener, router(keychain))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
}

async fn health_check() -> Json<Value> {
    Json(json!({"status": "ok", "service": "argus-dispatch"}))
}

type Rejection = (StatusCode, Json<Value>);

fn invalid_report(reason: &str) -> Rejection {
    (StatusCode::BAD_REQUEST, Json(json!({"error": reason})))
}

/// `POST /alert` with body `{sensorId, coordinates}`.
///
/// A malformed report is rejected without touching any counter. An accepted
/// report is always acknowledged with 200 regardless of downstream mission
/// outcome; mission initiation is fire-and-forget from the sensor's side.
async fn report_alert(
    State(keychain): State<Arc<Keychain>>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, Rejection> {
    let Some(Json(body)) = body else {
        return Err(invalid_report("request body is not valid JSON"));
    };
    let sensor_id = match body.get("sensorId") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        // Camera ids arrive as small integers from some sensor builds.
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(invalid_report("missing or malformed sensorId")),
    };
    let coordinates: Coordinates = body
        .get("coordinates")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .ok_or_else(|| invalid_report("missing or malformed coordinates"))?;

    match keychain.aggregator().report(&sensor_id).await {
        AlertDecision::Accumulated(count) => {
            log!("Sensor {sensor_id}: {count} alert(s) accumulated");
        }
        AlertDecision::TriggerMission => {
            info!("Sensor {sensor_id}: alert threshold crossed, launching mission");
            let dispatcher = keychain.dispatcher();
            let sensor = sensor_id.clone();
            tokio::spawn(async move {
                match dispatcher.dispatch(coordinates).await {
                    Ok(()) => info!("Mission for sensor {sensor} completed"),
                    Err(e) => error!("Mission for sensor {sensor} abandoned: {e}"),
                }
            });
        }
    }
    Ok(Json(json!({"message": format!("alert from sensor {sensor_id} registered")})))
}
