use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use scribe_shared::taxonomy::{Category, Tag, UnknownVariant};

/// Lifecycle flag of a blog. `Deleted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlogStatus {
    Active,
    Deleted,
}

impl BlogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlogStatus::Active => "ACTIVE",
            BlogStatus::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for BlogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlogStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(BlogStatus::Active),
            "DELETED" => Ok(BlogStatus::Deleted),
            other => Err(UnknownVariant::new("status", other)),
        }
    }
}

/// Which blogs a read path is allowed to surface.
///
/// Every query touching visible data states its visibility explicitly
/// instead of relying on the store to hide deleted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Only blogs whose status is `Active`.
    ActiveOnly,
    /// Every persisted blog, deleted ones included.
    All,
}

impl Visibility {
    pub fn admits(&self, blog: &Blog) -> bool {
        match self {
            Visibility::ActiveOnly => blog.is_active(),
            Visibility::All => true,
        }
    }
}

/// Blog entity - a persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub tags: BTreeSet<Tag>,
    pub status: BlogStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    pub fn is_active(&self) -> bool {
        self.status == BlogStatus::Active
    }

    /// Replace the tag set wholesale. No merge with the previous tags.
    pub fn replace_tags(&mut self, tags: BTreeSet<Tag>) {
        self.tags = tags;
    }

    /// Soft-delete: the record stays, but no read path will show it again.
    pub fn mark_deleted(&mut self) {
        self.status = BlogStatus::Deleted;
    }

    /// Record a modification at `now`, never moving `updated_at` before
    /// `created_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }
}

/// A blog that has not been stored yet: no id, no timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub category: Category,
    pub tags: BTreeSet<Tag>,
    pub status: BlogStatus,
}

impl NewBlog {
    /// Assign the identity and audit timestamps a store hands out on insert.
    pub fn into_blog(self, id: Uuid, now: DateTime<Utc>) -> Blog {
        Blog {
            id,
            title: self.title,
            content: self.content,
            category: self.category,
            tags: self.tags,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}
