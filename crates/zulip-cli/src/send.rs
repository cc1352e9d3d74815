// ABOUTME: The message dispatcher: validates send arguments and builds the payload.
// ABOUTME: Exactly one well-formed stream or private destination per invocation.

use thiserror::Error;
use tracing::{error, info};
use zulip_client::{ApiResponse, Client, Destination, OutboundMessage};

/// Contradictory or incomplete destination arguments for `msg send`.
///
/// Reported to the user with exit code 1; no config is loaded and no
/// network call is made.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UsageError {
    #[error("cannot specify both a recipient list and a stream")]
    RecipientsAndStream,

    #[error("a stream destination requires both a stream and a subject")]
    IncompleteStreamDestination,

    #[error("must specify either a stream+subject or at least one recipient")]
    NoDestination,
}

/// Outcome of one send attempt. `detail` holds the server-provided error
/// text on failure and is empty on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendResult {
    pub ok: bool,
    pub detail: String,
}

impl SendResult {
    /// Interpret the server's response envelope.
    pub fn from_response(response: &ApiResponse) -> Self {
        if response.is_success() {
            Self {
                ok: true,
                detail: String::new(),
            }
        } else {
            Self {
                ok: false,
                detail: response.msg.clone(),
            }
        }
    }
}

/// Validate the caller-supplied destination arguments and build the payload.
///
/// Rules, in order (the first failure wins):
/// 1. recipients and a stream together are contradictory;
/// 2. a stream destination needs both a stream and a subject;
/// 3. with no recipients and no stream there is nothing to send to.
///
/// Empty-string option values count as unset. Content is not validated
/// here; emptiness and size limits are the server's concern.
pub fn build_message(
    recipients: &[String],
    stream: Option<&str>,
    subject: Option<&str>,
    content: &str,
) -> Result<OutboundMessage, UsageError> {
    let stream = stream.filter(|s| !s.is_empty());
    let subject = subject.filter(|s| !s.is_empty());

    if !recipients.is_empty() && stream.is_some() {
        return Err(UsageError::RecipientsAndStream);
    }
    if recipients.is_empty() && (stream.is_some() != subject.is_some()) {
        return Err(UsageError::IncompleteStreamDestination);
    }
    if recipients.is_empty() && stream.is_none() {
        return Err(UsageError::NoDestination);
    }

    let destination = match stream {
        Some(stream) => Destination::Stream {
            to: stream.to_string(),
            // Rule 2 guarantees a subject whenever a stream is set.
            subject: subject.unwrap_or_default().to_string(),
        },
        None => Destination::Private {
            to: recipients.to_vec(),
        },
    };

    Ok(OutboundMessage {
        destination,
        content: content.to_string(),
    })
}

/// Send a built message: one round trip, pass/fail, no retries.
pub async fn send(client: &Client, message: &OutboundMessage) -> zulip_client::Result<SendResult> {
    match &message.destination {
        Destination::Stream { to, subject } => {
            info!(stream = %to, subject = %subject, "Sending message to stream");
        }
        Destination::Private { to } => {
            info!(recipients = ?to, "Sending message");
        }
    }

    let response = client.send_message(message).await?;
    let result = SendResult::from_response(&response);

    if result.ok {
        info!("Message sent.");
    } else {
        error!("{}", result.detail);
    }

    Ok(result)
}
