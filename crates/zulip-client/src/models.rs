// ABOUTME: Data models for zulip-client.
// ABOUTME: Message destinations, typed request structs, and the API response envelope.

use serde::{Deserialize, Serialize};

/// Where an outbound message is delivered.
///
/// Zulip messages go either to a stream (which always carries a subject)
/// or privately to one or more recipients. The two are mutually exclusive,
/// so an ill-formed destination cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Destination {
    /// Stream message: `{"type": "stream", "to": "<stream>", "subject": "<subject>"}`.
    Stream { to: String, subject: String },
    /// Private message: `{"type": "private", "to": ["<email>", ...]}`.
    Private { to: Vec<String> },
}

impl Destination {
    /// Check if this is a stream destination.
    pub fn is_stream(&self) -> bool {
        matches!(self, Destination::Stream { .. })
    }
}

/// A message ready to be sent. Immutable once built; sent at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    #[serde(flatten)]
    pub destination: Destination,
    pub content: String,
}

/// Request body for editing a previously sent message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateMessageRequest {
    #[serde(skip)]
    pub message_id: u64,
    pub content: String,
}

/// Request body for adding or removing an emoji reaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionRequest {
    #[serde(skip)]
    pub message_id: u64,
    pub emoji_name: String,
}

/// The response envelope every Zulip endpoint returns.
///
/// `result` is "success" or "error"; `msg` carries the server-provided
/// error text. Endpoint-specific data (message ids, subscriptions, edit
/// history) lands in `extra`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse {
    pub result: String,
    #[serde(default)]
    pub msg: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stream_message_payload_shape() {
        let message = OutboundMessage {
            destination: Destination::Stream {
                to: "general".to_string(),
                subject: "intro".to_string(),
            },
            content: "hi".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "type": "stream",
                "to": "general",
                "subject": "intro",
                "content": "hi",
            })
        );
    }

    #[test]
    fn test_private_message_payload_shape() {
        let message = OutboundMessage {
            destination: Destination::Private {
                to: vec!["a@x.com".to_string(), "b@x.com".to_string()],
            },
            content: "hi".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            json!({
                "type": "private",
                "to": ["a@x.com", "b@x.com"],
                "content": "hi",
            })
        );
    }

    #[test]
    fn test_update_request_body_omits_message_id() {
        let request = UpdateMessageRequest {
            message_id: 42,
            content: "edited".to_string(),
        };
        // The id goes in the URL path, not the body.
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "content": "edited" })
        );
    }

    #[test]
    fn test_reaction_request_body() {
        let request = ReactionRequest {
            message_id: 42,
            emoji_name: "octopus".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "emoji_name": "octopus" })
        );
    }

    #[test]
    fn test_api_response_success() {
        let resp: ApiResponse =
            serde_json::from_value(json!({ "result": "success", "msg": "", "id": 134 })).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.extra.get("id"), Some(&json!(134)));
    }

    #[test]
    fn test_api_response_error() {
        let resp: ApiResponse =
            serde_json::from_value(json!({ "result": "error", "msg": "boom" })).unwrap();
        assert!(!resp.is_success());
        assert_eq!(resp.msg, "boom");
    }

    #[test]
    fn test_api_response_missing_msg_defaults_empty() {
        let resp: ApiResponse = serde_json::from_value(json!({ "result": "success" })).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.msg, "");
        assert!(resp.extra.is_empty());
    }

    #[test]
    fn test_destination_is_stream() {
        let stream = Destination::Stream {
            to: "general".to_string(),
            subject: "intro".to_string(),
        };
        let private = Destination::Private {
            to: vec!["a@x.com".to_string()],
        };
        assert!(stream.is_stream());
        assert!(!private.is_stream());
    }
}
