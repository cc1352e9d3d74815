// ABOUTME: CLI library components for the zulip command-line client.
// ABOUTME: Hosts the message dispatcher shared by the binary and integration tests.

//! # zulip-cli
//!
//! Command-line front end for the Zulip messaging API.
//!
//! This crate provides the `zulip` binary which groups commands under
//! `msg` and `stream`:
//!
//! ```text
//! zulip
//! ├── msg
//! │   ├── send [recipients...]      # Send a stream or private message
//! │   ├── upload                    # (not yet implemented)
//! │   ├── edit <id>                 # Edit a message's content
//! │   ├── delete <id>               # Permanently delete a message
//! │   ├── add_emoji <id> <name>     # Add an emoji reaction
//! │   ├── remove_emoji <id> <name>  # Remove an emoji reaction
//! │   ├── get_edit_history <id>     # Fetch a message's edit history
//! │   └── mark_all_as_read          # Mark all unread messages as read
//! └── stream
//!     └── list_subscriptions        # List subscribed streams
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Send to a stream
//! zulip msg send --stream general --subject intro -m "hi"
//!
//! # Send privately
//! zulip msg send a@x.com b@x.com -m "hi"
//!
//! # React to a message
//! zulip msg add_emoji 134 octopus
//! ```

pub mod send;

/// Version of the zulip CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
