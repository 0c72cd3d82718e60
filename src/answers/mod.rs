//! Answers Module
//!
//! Answer creation plus the best-effort notification to the question
//! owner. Answers are append-only.

/// Database operations
pub mod db;

/// HTTP handlers and the notification side effect
pub mod handlers;

pub use handlers::{create_answer, test_notification};
