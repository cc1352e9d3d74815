// ABOUTME: Typed async client library for the Zulip messaging REST API.
// ABOUTME: Exposes Client, configuration loading, request/response models, and errors.

//! # zulip-client
//!
//! Typed async client for the Zulip messaging REST API.
//!
//! The [`Client`] wraps one `reqwest::Client` plus the credentials from a
//! [`ZulipConfig`] and exposes one method per endpoint. Every call performs
//! a single round trip and returns the standard Zulip response envelope
//! ([`ApiResponse`]) so callers can inspect `result`/`msg` themselves.
//!
//! ```no_run
//! use zulip_client::{Client, Destination, OutboundMessage, ZulipConfig};
//!
//! # async fn example() -> zulip_client::Result<()> {
//! let config = ZulipConfig::load(None)?;
//! let client = Client::new(&config)?;
//! let message = OutboundMessage {
//!     destination: Destination::Stream {
//!         to: "general".into(),
//!         subject: "intro".into(),
//!     },
//!     content: "hi".into(),
//! };
//! let response = client.send_message(&message).await?;
//! assert!(response.is_success());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::Client;
pub use config::ZulipConfig;
pub use error::{ClientError, Result};
pub use models::{
    ApiResponse, Destination, OutboundMessage, ReactionRequest, UpdateMessageRequest,
};
