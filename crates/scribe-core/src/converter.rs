//! Mapping between wire shapes and the persisted blog entity.

use scribe_shared::dto::{BlogRequest, BlogResponse, MSG_CATEGORY_REQUIRED, PageResponse};

use crate::domain::{Blog, BlogStatus, NewBlog};
use crate::error::DomainError;
use crate::pagination::Page;

/// Build an unsaved blog from a request. New blogs always start active.
pub fn to_entity(request: BlogRequest) -> Result<NewBlog, DomainError> {
    let category = request
        .category
        .ok_or_else(|| DomainError::Validation(MSG_CATEGORY_REQUIRED.to_string()))?;

    Ok(NewBlog {
        title: request.title,
        content: request.content,
        category,
        tags: request.tags,
        status: BlogStatus::Active,
    })
}

pub fn to_response(blog: Blog) -> BlogResponse {
    BlogResponse {
        id: blog.id,
        title: blog.title,
        content: blog.content,
        category: blog.category,
        tags: blog.tags,
        created_at: blog.created_at,
        updated_at: blog.updated_at,
    }
}

/// Convert a sequence of blogs, keeping their order.
pub fn to_responses(blogs: impl IntoIterator<Item = Blog>) -> Vec<BlogResponse> {
    blogs.into_iter().map(to_response).collect()
}

pub fn to_page_response(page: Page<Blog>) -> PageResponse<BlogResponse> {
    let total_pages = page.total_pages();
    let last = page.is_last();
    PageResponse {
        content: to_responses(page.content),
        page_no: page.number,
        page_size: page.size,
        total_elements: page.total_elements,
        total_pages,
        last,
    }
}
