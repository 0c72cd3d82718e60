//! Questions Module
//!
//! Append-only Q&A threads: questions are created and read, never edited.
//! The detail view embeds every answer with its author's username.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_question, get_question, list_questions};
