use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use samp_topup::domain::relay::DonationRequest;
use serde_json::Value;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

/// Requests captured by the stub relay, in arrival order.
pub type CapturedRequests = Arc<RwLock<Vec<DonationRequest>>>;

#[derive(Clone)]
struct RelayState {
    status: StatusCode,
    reply: Value,
    captured: CapturedRequests,
}

/// Spawns a stub relay on an ephemeral port.
///
/// Every POST gets the configured status and JSON reply; the returned log
/// collects the decoded request bodies.
pub async fn spawn_relay(status: StatusCode, reply: Value) -> (String, CapturedRequests) {
    let captured: CapturedRequests = Arc::default();
    let state = RelayState {
        status,
        reply,
        captured: captured.clone(),
    };

    let app = Router::new()
        .route("/", post(handle_donation))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub relay");
    let addr = listener.local_addr().expect("stub relay addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub relay");
    });

    (format!("http://{addr}/"), captured)
}

async fn handle_donation(
    State(state): State<RelayState>,
    Json(request): Json<DonationRequest>,
) -> (StatusCode, Json<Value>) {
    state.captured.write().await.push(request);
    (state.status, Json(state.reply.clone()))
}
