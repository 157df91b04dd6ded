//! Paging and sorting parameters for store queries.

use std::cmp::Ordering;

use crate::domain::Blog;
use crate::error::DomainError;

/// Sort order requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// `"asc"` in any letter case sorts ascending; every other value,
    /// including garbage, sorts descending.
    pub fn parse_lenient(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("asc") {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}

/// A blog field that results can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Content,
    Category,
    Status,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Map a wire field name (camelCase or snake_case) to a field.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(SortField::Id),
            "title" => Some(SortField::Title),
            "content" => Some(SortField::Content),
            "category" => Some(SortField::Category),
            "status" => Some(SortField::Status),
            "createdAt" | "created_at" => Some(SortField::CreatedAt),
            "updatedAt" | "updated_at" => Some(SortField::UpdatedAt),
            _ => None,
        }
    }

    /// Ascending comparison of two blogs on this field. Enumerations compare
    /// by their stored names.
    pub fn compare(&self, a: &Blog, b: &Blog) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Content => a.content.cmp(&b.content),
            SortField::Category => a.category.as_str().cmp(b.category.as_str()),
            SortField::Status => a.status.as_str().cmp(b.status.as_str()),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

/// Ordering for a query. `field == None` keeps the store's natural order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl Sort {
    pub fn from_params(sort_by: &str, sort_dir: &str) -> Self {
        Self {
            field: SortField::parse(sort_by),
            direction: SortDirection::parse_lenient(sort_dir),
        }
    }

    pub fn unsorted() -> Self {
        Self {
            field: None,
            direction: SortDirection::Asc,
        }
    }

    /// Compare two blogs under this sort. Ties (and an absent field) compare
    /// equal so a stable sort keeps natural order.
    pub fn compare(&self, a: &Blog, b: &Blog) -> Ordering {
        match self.field {
            None => Ordering::Equal,
            Some(field) => match self.direction {
                SortDirection::Asc => field.compare(a, b),
                SortDirection::Desc => field.compare(b, a),
            },
        }
    }
}

/// A zero-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Sort,
}

impl PageRequest {
    pub fn new(page: u64, size: u64, sort: Sort) -> Result<Self, DomainError> {
        if size == 0 {
            return Err(DomainError::Validation(
                "Page size must be greater than zero".to_string(),
            ));
        }
        Ok(Self { page, size, sort })
    }

    /// Number of matching items that precede this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

/// A page of results and the metadata of the query that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(self.size)
    }

    pub fn is_last(&self) -> bool {
        self.number.saturating_add(1) >= self.total_pages()
    }

    /// Keep only the items matching `keep`, leaving the metadata untouched.
    pub fn retain(mut self, keep: impl FnMut(&T) -> bool) -> Self {
        self.content.retain(keep);
        self
    }
}
