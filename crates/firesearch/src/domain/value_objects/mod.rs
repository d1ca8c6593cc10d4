//! Value Objects

mod category;
mod date_filter;

pub use category::*;
pub use date_filter::*;
