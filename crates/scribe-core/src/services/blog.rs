use std::collections::BTreeSet;
use std::sync::Arc;

use scribe_shared::dto::{BlogRequest, BlogResponse, PageResponse};
use uuid::Uuid;

use crate::converter;
use crate::domain::{Blog, Tag, Visibility};
use crate::error::DomainError;
use crate::pagination::{PageRequest, Sort};
use crate::ports::BlogRepository;

/// Blog lifecycle operations: create, read, update, tag, soft-delete, search.
///
/// Each call is one unit of work against the store. Read-modify-write
/// sequences (tag update, delete) are two store calls and are not atomic
/// together; concurrent writers to one blog resolve as last-writer-wins.
#[derive(Clone)]
pub struct BlogService {
    repo: Arc<dyn BlogRepository>,
}

impl BlogService {
    pub fn new(repo: Arc<dyn BlogRepository>) -> Self {
        Self { repo }
    }

    /// Every stored blog, deleted ones included.
    pub async fn list_all(&self) -> Result<Vec<BlogResponse>, DomainError> {
        let blogs = self.repo.find_all(Visibility::All).await?;
        Ok(converter::to_responses(blogs))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<BlogResponse, DomainError> {
        let blog = self.find_active(id).await?;
        Ok(converter::to_response(blog))
    }

    /// Search titles, then drop inactive blogs from the returned page.
    ///
    /// Filtering happens after paging, so the totals and page boundaries are
    /// those of the unfiltered match set and `content` may hold fewer than
    /// `size` entries.
    pub async fn search_by_title(
        &self,
        title: &str,
        page: u64,
        size: u64,
        sort_by: &str,
        sort_dir: &str,
    ) -> Result<PageResponse<BlogResponse>, DomainError> {
        let request = PageRequest::new(page, size, Sort::from_params(sort_by, sort_dir))?;
        tracing::debug!(title, page, size, sort = ?request.sort, "Searching blogs by title");

        let page = self
            .repo
            .search_by_title(title, &request)
            .await?
            .retain(|b| Visibility::ActiveOnly.admits(b));

        Ok(converter::to_page_response(page))
    }

    pub async fn create(&self, request: BlogRequest) -> Result<BlogResponse, DomainError> {
        let saved = self.repo.insert(converter::to_entity(request)?).await?;
        tracing::info!(blog_id = %saved.id, "Blog created");
        Ok(converter::to_response(saved))
    }

    /// Soft-delete `id` and store the request as a brand-new blog.
    ///
    /// The returned blog has a new id and fresh timestamps; `id` is no
    /// longer readable afterwards.
    pub async fn update(
        &self,
        id: Uuid,
        request: BlogRequest,
    ) -> Result<BlogResponse, DomainError> {
        let draft = converter::to_entity(request)?;
        self.delete(id).await?;
        let replacement = self.repo.insert(draft).await?;
        tracing::info!(
            previous_id = %id,
            blog_id = %replacement.id,
            "Blog replaced by new revision"
        );
        Ok(converter::to_response(replacement))
    }

    /// Overwrite the tag set of an active blog in place.
    pub async fn update_tags(
        &self,
        id: Uuid,
        tags: BTreeSet<Tag>,
    ) -> Result<BlogResponse, DomainError> {
        let mut blog = self.find_active(id).await?;
        blog.replace_tags(tags);
        let saved = self.repo.save(blog).await?;
        tracing::info!(blog_id = %saved.id, tags = saved.tags.len(), "Blog tags replaced");
        Ok(converter::to_response(saved))
    }

    /// Mark an active blog as deleted. The record is kept.
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let mut blog = self.find_active(id).await?;
        blog.mark_deleted();
        self.repo.save(blog).await?;
        tracing::info!(blog_id = %id, "Blog soft-deleted");
        Ok(())
    }

    async fn find_active(&self, id: Uuid) -> Result<Blog, DomainError> {
        tracing::debug!(blog_id = %id, "Looking up active blog");
        self.repo
            .find_active_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Blog",
                id,
            })
    }
}
