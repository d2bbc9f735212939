use serde::{Deserialize, Serialize};

/// JSON body POSTed to the relay endpoint.
///
/// Built fresh for every confirmation attempt; the amount is parsed from
/// the raw input right before the request goes out.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct DonationRequest {
    pub nickname: String,
    pub amount: i64,
}

/// JSON body returned by the relay.
///
/// A reply missing the `success` field counts as a rejection.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct RelayReply {
    #[serde(default)]
    pub success: bool,
    pub error: Option<String>,
    pub message: Option<String>,
    pub donation_id: Option<u64>,
}

/// A relay reply paired with the transport-level status of the exchange.
///
/// A request counts as accepted only when the HTTP status was 2xx AND the
/// body reported `success: true`; either signal alone is a rejection, even
/// though a non-2xx body may still carry a usable `error` string.
#[derive(Debug, PartialEq, Clone)]
pub struct RelayResponse {
    pub status_ok: bool,
    pub reply: RelayReply,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = DonationRequest {
            nickname: "Player1".to_string(),
            amount: 100,
        };

        let body = serde_json::to_value(&request).expect("serialize request");

        assert_eq!(body, json!({"nickname": "Player1", "amount": 100}));
    }

    #[test]
    fn test_reply_with_server_error() {
        let reply: RelayReply =
            serde_json::from_str(r#"{"success": false, "error": "Limit exceeded"}"#)
                .expect("deserialize reply");

        assert!(!reply.success);
        assert_eq!(reply.error.as_deref(), Some("Limit exceeded"));
    }

    #[test]
    fn test_reply_missing_fields_defaults_to_rejection() {
        let reply: RelayReply = serde_json::from_str("{}").expect("deserialize reply");

        assert!(!reply.success);
        assert!(reply.error.is_none());
        assert!(reply.donation_id.is_none());
    }

    #[test]
    fn test_reply_keeps_relay_metadata() {
        let reply: RelayReply = serde_json::from_str(
            r#"{"success": true, "donation_id": 42, "message": "Request created"}"#,
        )
        .expect("deserialize reply");

        assert!(reply.success);
        assert_eq!(reply.donation_id, Some(42));
        assert_eq!(reply.message.as_deref(), Some("Request created"));
    }
}
