//! Domain Layer
//!
//! Search entities, value objects and errors. No HTTP or environment access here.

pub mod entities;
pub mod errors;
pub mod value_objects;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use value_objects::*;
