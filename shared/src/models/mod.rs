//! Data models
//!
//! Mirrors of the backend's JSON shapes. Field names match the wire format
//! exactly; the frontend enforces nothing beyond type shape.

pub mod dish;
pub mod menu;
pub mod order;
pub mod table;
pub mod user;

// Re-exports
pub use dish::*;
pub use menu::*;
pub use order::*;
pub use table::*;
pub use user::*;
