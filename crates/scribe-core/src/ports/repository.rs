use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Blog, NewBlog, Visibility};
use crate::error::RepoError;
use crate::pagination::{Page, PageRequest};

/// Generic repository trait defining the lookup and replace operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID, whatever its state.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Replace the stored entity with the same ID (inserting it if absent).
    /// Atomic per entity; stamps the modification time.
    async fn save(&self, entity: T) -> Result<T, RepoError>;
}

/// Blog store with the queries the blog lifecycle needs.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    /// Find a blog by ID only if it is active.
    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError>;

    /// Every stored blog `visibility` admits, in natural storage order.
    async fn find_all(&self, visibility: Visibility) -> Result<Vec<Blog>, RepoError>;

    /// Case-insensitive substring match on the title, sorted and paged.
    /// Status is not filtered here; totals count every match.
    async fn search_by_title(
        &self,
        title: &str,
        request: &PageRequest,
    ) -> Result<Page<Blog>, RepoError>;

    /// Store a new blog, assigning its ID and audit timestamps.
    async fn insert(&self, blog: NewBlog) -> Result<Blog, RepoError>;
}
