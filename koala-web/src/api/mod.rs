//! JSON endpoints

pub mod health;
pub mod session;
