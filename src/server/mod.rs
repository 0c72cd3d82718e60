//! Server Setup Module
//!
//! Initialization, application state, and configuration for the HTTP server.

/// Explicit startup configuration
pub mod config;

/// Server initialization
pub mod init;

/// Application state and `FromRef` extraction
pub mod state;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
