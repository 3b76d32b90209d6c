//! Centralized user-facing messages.
//!
//! Every string the client shows to a user is a [`Message`] variant; its text
//! lives in [`display`]. The `msg_*` macros in [`macros`] route messages to
//! the console or to `tracing` depending on debug mode.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
