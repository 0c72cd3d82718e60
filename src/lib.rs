//! StudyHub Backend
//!
//! A small Q&A and study-notes platform: users register, post questions,
//! answer them, attach notes, and receive real-time notifications when
//! someone answers their question.
//!
//! # Overview
//!
//! The crate provides a complete Axum HTTP server:
//! - Axum HTTP server setup and configuration
//! - User registration, login, and JWT token management
//! - CRUD services for notes, questions, and answers (PostgreSQL)
//! - Per-user notification groups with SSE delivery
//! - Route configuration and middleware
//!
//! # Architecture
//!
//! The backend is organized into focused modules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Authentication, JWT tokens, user management
//! - **`notes`** - Study notes CRUD
//! - **`questions`** - Questions CRUD (read-heavy, append-only)
//! - **`answers`** - Answer creation and notification fan-out
//! - **`notifications`** - Per-user group registry and SSE subscriptions
//! - **`middleware`** - Request processing middleware
//! - **`error`** - Error taxonomy and HTTP mapping
//! - **`pagination`** - Shared list query parameters
//!
//! # State Management
//!
//! Shared state (`AppState`) contains the PostgreSQL pool, the notification
//! group registry, and the server configuration. State is shared across all
//! request handlers using `Arc` internally; the group registry uses
//! `tokio::sync::broadcast` channels for multi-subscriber delivery.
//!
//! # Error Handling
//!
//! All handlers return `Result<_, ApiError>`. The error type maps onto the
//! HTTP taxonomy (400/401/403/404/500) and renders a uniform JSON body;
//! internal error details are only exposed in development mode.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Study notes CRUD
pub mod notes;

/// Questions CRUD
pub mod questions;

/// Answer creation and notification fan-out
pub mod answers;

/// Per-user notification groups and SSE delivery
pub mod notifications;

/// Middleware for request processing
pub mod middleware;

/// Error taxonomy and HTTP mapping
pub mod error;

/// Shared pagination/filter query parameters
pub mod pagination;

// Re-export commonly used types
pub use error::ApiError;
pub use notifications::NotificationGroups;
pub use server::config::ServerConfig;
pub use server::state::AppState;
