//! Notifications Module
//!
//! Real-time, best-effort notification delivery.
//!
//! # Architecture
//!
//! - **`groups`** - the per-user group registry (one broadcast channel per
//!   user id, one receiver per live connection)
//! - **`subscription`** - the SSE endpoint connections subscribe through
//!
//! Publishing is fire-and-forget: a user with no live connections simply
//! misses the message. No delivery state is persisted anywhere.

/// Per-user group registry
pub mod groups;

/// SSE subscription handler
pub mod subscription;

pub use groups::NotificationGroups;
pub use subscription::{notification_stream, NOTIFICATION_EVENT};
