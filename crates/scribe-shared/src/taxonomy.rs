//! Closed enumerations for blog categories and tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A string did not name any variant of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// The single category a blog is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Tech,
    Lifestyle,
    Travel,
    Food,
    Health,
    Education,
    Business,
    Entertainment,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Tech,
        Category::Lifestyle,
        Category::Travel,
        Category::Food,
        Category::Health,
        Category::Education,
        Category::Business,
        Category::Entertainment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tech => "TECH",
            Category::Lifestyle => "LIFESTYLE",
            Category::Travel => "TRAVEL",
            Category::Food => "FOOD",
            Category::Health => "HEALTH",
            Category::Education => "EDUCATION",
            Category::Business => "BUSINESS",
            Category::Entertainment => "ENTERTAINMENT",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("category", s))
    }
}

/// A label attached to a blog. A blog carries a set of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tag {
    Java,
    Rust,
    Python,
    Javascript,
    Backend,
    Frontend,
    Database,
    Devops,
    Cloud,
    Ai,
    Tutorial,
    News,
}

impl Tag {
    pub const ALL: [Tag; 12] = [
        Tag::Java,
        Tag::Rust,
        Tag::Python,
        Tag::Javascript,
        Tag::Backend,
        Tag::Frontend,
        Tag::Database,
        Tag::Devops,
        Tag::Cloud,
        Tag::Ai,
        Tag::Tutorial,
        Tag::News,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Java => "JAVA",
            Tag::Rust => "RUST",
            Tag::Python => "PYTHON",
            Tag::Javascript => "JAVASCRIPT",
            Tag::Backend => "BACKEND",
            Tag::Frontend => "FRONTEND",
            Tag::Database => "DATABASE",
            Tag::Devops => "DEVOPS",
            Tag::Cloud => "CLOUD",
            Tag::Ai => "AI",
            Tag::Tutorial => "TUTORIAL",
            Tag::News => "NEWS",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("tag", s))
    }
}
