use crate::domain::notification::Notification;
use crate::domain::ports::{Notifier, RelayClient};
use crate::domain::relay::{DonationRequest, RelayReply, RelayResponse};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory notifier.
///
/// Uses `Arc<RwLock<Vec<Notification>>>` to allow shared concurrent access.
/// Collects every dispatched notification so tests can assert on them
/// without any presentation layer.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates a new, empty recording notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications dispatched so far, in order.
    pub async fn notifications(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: Notification) {
        self.notifications.write().await.push(notification);
    }
}

#[derive(Clone)]
enum StubOutcome {
    Reply(RelayResponse),
    ConnectionLost,
}

/// A scripted relay for tests and wiring demos.
///
/// Records every submitted request and answers each call with the
/// configured outcome.
#[derive(Clone)]
pub struct StubRelayClient {
    outcome: StubOutcome,
    requests: Arc<RwLock<Vec<DonationRequest>>>,
}

impl StubRelayClient {
    /// Answers every submission with the given response.
    pub fn replying(response: RelayResponse) -> Self {
        Self {
            outcome: StubOutcome::Reply(response),
            requests: Arc::default(),
        }
    }

    /// Fails every submission with a transport-level error.
    pub fn unreachable() -> Self {
        Self {
            outcome: StubOutcome::ConnectionLost,
            requests: Arc::default(),
        }
    }

    /// Requests submitted so far, in order.
    pub async fn requests(&self) -> Vec<DonationRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl RelayClient for StubRelayClient {
    async fn submit(&self, request: &DonationRequest) -> Result<RelayResponse> {
        self.requests.write().await.push(request.clone());
        match &self.outcome {
            StubOutcome::Reply(response) => Ok(response.clone()),
            StubOutcome::ConnectionLost => Err(serde_json::from_str::<RelayReply>("")
                .expect_err("empty body never parses")
                .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TopupError;

    #[tokio::test]
    async fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();

        notifier.notify(Notification::info("first", "one")).await;
        notifier
            .notify(Notification::destructive("second", "two"))
            .await;

        let seen = notifier.notifications().await;
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].title, "first");
        assert_eq!(seen[1].title, "second");
    }

    #[tokio::test]
    async fn test_stub_relay_records_requests() {
        let relay = StubRelayClient::replying(RelayResponse {
            status_ok: true,
            reply: RelayReply {
                success: true,
                ..Default::default()
            },
        });
        let request = DonationRequest {
            nickname: "Player1".to_string(),
            amount: 50,
        };

        let response = relay.submit(&request).await.unwrap();
        assert!(response.reply.success);

        let seen = relay.requests().await;
        assert_eq!(seen, vec![request]);
    }

    #[tokio::test]
    async fn test_unreachable_stub_errors_out() {
        let relay = StubRelayClient::unreachable();
        let request = DonationRequest {
            nickname: "Player1".to_string(),
            amount: 50,
        };

        let err = relay.submit(&request).await.unwrap_err();
        assert!(matches!(err, TopupError::Json(_)));
        // The attempt is still recorded.
        assert_eq!(relay.requests().await.len(), 1);
    }
}
