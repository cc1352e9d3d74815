// ABOUTME: Error types for zulip-client.
// ABOUTME: Defines ClientError covering config, transport, response, and IO failures.

use thiserror::Error;

/// Errors that can occur while talking to the Zulip server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP transport error from reqwest.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server replied with something that is not a Zulip response envelope.
    #[error("Unexpected response from server (HTTP {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },

    /// IO error for file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using ClientError.
pub type Result<T> = std::result::Result<T, ClientError>;
