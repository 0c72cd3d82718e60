//! Authentication Module
//!
//! User registration, login, and identity token management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - Salted password hashing
//! ├── tokens.rs       - JWT creation and verification
//! └── handlers/       - HTTP handlers
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - Registration handler
//!     ├── login.rs    - Login handler
//!     └── test_auth.rs- Protected greeting handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username/email/password → salted hash → user created
//! 2. **Login**: credentials verified → signed token (24-hour expiry)
//! 3. **Protected requests**: bearer token verified by the auth middleware
//!
//! # Security
//!
//! - Per-user random salts; hashes recomputed with the stored salt at login
//! - Invalid credentials always return 401 with one fixed message
//! - The token secret comes from the server configuration, not globals

/// User model and database operations
pub mod users;

/// Salted password hashing
pub mod password;

/// Identity token creation and verification
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
pub use handlers::{login, register, test_auth};
