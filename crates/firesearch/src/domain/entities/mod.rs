//! Domain Entities

mod search_item;
mod search_request;

pub use search_item::*;
pub use search_request::*;
