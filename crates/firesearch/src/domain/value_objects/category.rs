//! Category - Provider result partitions

use serde::{Deserialize, Serialize};

/// One of the provider's result partitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    News,
    Images,
}

impl Category {
    /// All categories in the order their results are flattened.
    pub const ALL: [Category; 3] = [Category::Web, Category::News, Category::Images];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::News => "news",
            Category::Images => "images",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "web" => Ok(Category::Web),
            "news" => Ok(Category::News),
            "images" => Ok(Category::Images),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}
