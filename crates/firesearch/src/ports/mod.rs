//! Ports (Interfaces)
//!
//! Abstract interfaces the rest of an application searches through.
//! Implementations live in `services/`.

pub mod services;

// Re-exports
pub use services::*;
