//! Study Notes Module
//!
//! CRUD over the notes table. Reads are public; creation requires an
//! authenticated caller and mutation is restricted to the owner.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_note, delete_note, get_note, list_notes, update_note};
