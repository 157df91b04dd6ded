//! In-memory blog store - used when no database is configured.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use scribe_core::domain::{Blog, NewBlog, Visibility};
use scribe_core::error::RepoError;
use scribe_core::pagination::{Page, PageRequest};
use scribe_core::ports::{BaseRepository, BlogRepository};

/// In-memory blog store backed by a `Vec` behind an async RwLock.
///
/// Insertion order is the natural storage order; a replace keeps the
/// blog's position. Data is lost on process restart.
pub struct InMemoryBlogRepository {
    blogs: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            blogs: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        let blogs = self.blogs.read().await;
        Ok(blogs.iter().find(|b| b.id == id).cloned())
    }

    async fn save(&self, mut blog: Blog) -> Result<Blog, RepoError> {
        blog.touch(Utc::now());

        let mut blogs = self.blogs.write().await;
        match blogs.iter_mut().find(|b| b.id == blog.id) {
            Some(slot) => *slot = blog.clone(),
            None => blogs.push(blog.clone()),
        }

        Ok(blog)
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        let blogs = self.blogs.read().await;
        Ok(blogs
            .iter()
            .find(|b| b.id == id && Visibility::ActiveOnly.admits(b))
            .cloned())
    }

    async fn find_all(&self, visibility: Visibility) -> Result<Vec<Blog>, RepoError> {
        let blogs = self.blogs.read().await;
        Ok(blogs.iter().filter(|b| visibility.admits(b)).cloned().collect())
    }

    async fn search_by_title(
        &self,
        title: &str,
        request: &PageRequest,
    ) -> Result<Page<Blog>, RepoError> {
        let needle = title.to_lowercase();

        let mut matches: Vec<Blog> = {
            let blogs = self.blogs.read().await;
            blogs
                .iter()
                .filter(|b| b.title.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        };
        // Stable: ties keep insertion order.
        matches.sort_by(|a, b| request.sort.compare(a, b));

        let total = matches.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);
        let content = matches.into_iter().skip(offset).take(size).collect();

        Ok(Page::new(content, request, total))
    }

    async fn insert(&self, blog: NewBlog) -> Result<Blog, RepoError> {
        let blog = blog.into_blog(Uuid::new_v4(), Utc::now());
        self.blogs.write().await.push(blog.clone());
        tracing::debug!(blog_id = %blog.id, "Inserted blog into memory store");
        Ok(blog)
    }
}
