//! Data Transfer Objects - request/response types for the blog API.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::taxonomy::{Category, Tag};

pub const MSG_TITLE_REQUIRED: &str = "Title is required!";
pub const MSG_CONTENT_REQUIRED: &str = "Content is required!";
pub const MSG_CATEGORY_REQUIRED: &str = "Category is required!";

/// Request to create a blog, or to replace one on update.
///
/// A missing or null `category` is reported by [`BlogRequest::validate`];
/// an unknown one is rejected while decoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl BlogRequest {
    pub fn new(title: impl Into<String>, content: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: Some(category),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Check the required fields, collecting every violation.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(MSG_TITLE_REQUIRED.to_string());
        }
        if self.content.trim().is_empty() {
            errors.push(MSG_CONTENT_REQUIRED.to_string());
        }
        if self.category.is_none() {
            errors.push(MSG_CATEGORY_REQUIRED.to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// A blog as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub tags: BTreeSet<Tag>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of results plus the pagination metadata reported by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page_no: u64,
    pub page_size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub last: bool,
}
