// ABOUTME: Async HTTP client for the Zulip messaging REST API.
// ABOUTME: One method per endpoint, all returning the standard response envelope.

use crate::config::ZulipConfig;
use crate::error::{ClientError, Result};
use crate::models::{ApiResponse, OutboundMessage, ReactionRequest, UpdateMessageRequest};
use std::time::Duration;

/// Async client for the Zulip REST API.
///
/// Holds one `reqwest::Client` and the credential pair for the lifetime of
/// a single CLI invocation. Every method performs exactly one round trip
/// and returns the server's response envelope; the caller decides what a
/// non-success result means.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    email: String,
    api_key: String,
}

impl Client {
    /// Create a client from a loaded configuration.
    pub fn new(config: &ZulipConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url: format!("{}/api/v1", normalize_site_url(&config.api.site)),
            email: config.api.email.clone(),
            api_key: config.api.key.clone(),
        })
    }

    /// Send a message to a stream or a set of private recipients.
    pub async fn send_message(&self, message: &OutboundMessage) -> Result<ApiResponse> {
        self.execute(self.http.post(self.endpoint("messages")).json(message))
            .await
    }

    /// Edit the content of a previously sent message.
    pub async fn update_message(&self, request: &UpdateMessageRequest) -> Result<ApiResponse> {
        let url = self.endpoint(&format!("messages/{}", request.message_id));
        self.execute(self.http.patch(url).json(request)).await
    }

    /// Permanently delete a message.
    pub async fn delete_message(&self, message_id: u64) -> Result<ApiResponse> {
        let url = self.endpoint(&format!("messages/{}", message_id));
        self.execute(self.http.delete(url)).await
    }

    /// Add an emoji reaction to a message.
    pub async fn add_reaction(&self, request: &ReactionRequest) -> Result<ApiResponse> {
        let url = self.endpoint(&format!("messages/{}/reactions", request.message_id));
        self.execute(self.http.post(url).json(request)).await
    }

    /// Remove an emoji reaction from a message.
    pub async fn remove_reaction(&self, request: &ReactionRequest) -> Result<ApiResponse> {
        let url = self.endpoint(&format!("messages/{}/reactions", request.message_id));
        self.execute(self.http.delete(url).json(request)).await
    }

    /// Fetch the edit history of a previously edited message.
    pub async fn get_message_history(&self, message_id: u64) -> Result<ApiResponse> {
        let url = self.endpoint(&format!("messages/{}/history", message_id));
        self.execute(self.http.get(url)).await
    }

    /// Mark all of the current user's unread messages as read.
    pub async fn mark_all_as_read(&self) -> Result<ApiResponse> {
        self.execute(self.http.post(self.endpoint("mark_all_as_read")))
            .await
    }

    /// Get all streams that the user is subscribed to.
    pub async fn list_subscriptions(&self) -> Result<ApiResponse> {
        self.execute(self.http.get(self.endpoint("users/me/subscriptions")))
            .await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Attach credentials, perform the round trip, and parse the envelope.
    ///
    /// Zulip reports application errors inside the envelope with 4xx
    /// statuses, so the envelope is returned whenever the body parses as
    /// one, regardless of HTTP status.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<ApiResponse> {
        let response = request
            .basic_auth(&self.email, Some(&self.api_key))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        serde_json::from_str::<ApiResponse>(&body).map_err(|_| {
            ClientError::UnexpectedResponse {
                status: status.as_u16(),
                body,
            }
        })
    }
}

/// Normalizes a Zulip site URL to an HTTP(S) base URL.
fn normalize_site_url(site: &str) -> String {
    let url = site.trim_end_matches('/');

    // If it's already a full URL, use it
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }

    // If it looks like host:port, add http://
    if url.contains(':') {
        return format!("http://{}", url);
    }

    // Otherwise assume https
    format!("https://{}", url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn test_client(site: &str) -> Client {
        let config = ZulipConfig {
            api: ApiConfig {
                email: "iago@zulip.com".to_string(),
                key: "abcd1234".to_string(),
                site: site.to_string(),
            },
        };
        Client::new(&config).unwrap()
    }

    #[test]
    fn test_normalize_site_url_keeps_https() {
        assert_eq!(
            normalize_site_url("https://chat.example.com"),
            "https://chat.example.com"
        );
    }

    #[test]
    fn test_normalize_site_url_keeps_http() {
        assert_eq!(
            normalize_site_url("http://localhost:9991"),
            "http://localhost:9991"
        );
    }

    #[test]
    fn test_normalize_site_url_host_port_gets_http() {
        assert_eq!(normalize_site_url("localhost:9991"), "http://localhost:9991");
    }

    #[test]
    fn test_normalize_site_url_bare_host_gets_https() {
        assert_eq!(
            normalize_site_url("chat.example.com"),
            "https://chat.example.com"
        );
    }

    #[test]
    fn test_normalize_site_url_strips_trailing_slash() {
        assert_eq!(
            normalize_site_url("https://chat.example.com/"),
            "https://chat.example.com"
        );
    }

    #[test]
    fn test_base_url_includes_api_version() {
        let client = test_client("https://chat.example.com");
        assert_eq!(client.base_url, "https://chat.example.com/api/v1");
    }

    #[test]
    fn test_endpoint_paths_embed_message_id() {
        let client = test_client("https://chat.example.com");
        assert_eq!(
            client.endpoint("messages/42/reactions"),
            "https://chat.example.com/api/v1/messages/42/reactions"
        );
        assert_eq!(
            client.endpoint("users/me/subscriptions"),
            "https://chat.example.com/api/v1/users/me/subscriptions"
        );
    }
}
