//! SearchItem - Normalized search result

use serde::{Deserialize, Serialize};

/// A single normalized search result.
///
/// Every field is always text; values the provider did not supply are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl SearchItem {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}
