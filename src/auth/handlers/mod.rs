//! HTTP handlers for authentication endpoints.

/// Request/response types
pub mod types;

/// User registration handler
pub mod register;

/// User authentication handler
pub mod login;

/// Protected greeting handler
pub mod test_auth;

pub use login::login;
pub use register::register;
pub use test_auth::test_auth;
