//! Service Ports

mod web_search;

pub use web_search::*;
