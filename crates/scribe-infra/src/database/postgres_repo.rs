//! PostgreSQL blog store.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func, LikeExpr, OnConflict};
use sea_orm::{
    ColumnTrait, DbConn, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use scribe_core::domain::{Blog, BlogStatus, NewBlog, Visibility};
use scribe_core::error::RepoError;
use scribe_core::pagination::{Page, PageRequest, SortDirection, SortField};
use scribe_core::ports::{BaseRepository, BlogRepository};

use super::entity::blog::{ActiveModel, Column, Entity as BlogEntity, Model};

/// Largest LIMIT/OFFSET PostgreSQL accepts (a signed bigint).
const MAX_SQL_ROWS: u64 = i64::MAX as u64;

/// PostgreSQL blog repository.
pub struct PostgresBlogRepository {
    db: DbConn,
}

impl PostgresBlogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    #[cfg(test)]
    pub(crate) fn into_connection(self) -> DbConn {
        self.db
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

fn decode_all(models: Vec<Model>) -> Result<Vec<Blog>, RepoError> {
    models.into_iter().map(Blog::try_from).collect()
}

fn sort_column(field: SortField) -> Column {
    match field {
        SortField::Id => Column::Id,
        SortField::Title => Column::Title,
        SortField::Content => Column::Content,
        SortField::Category => Column::Category,
        SortField::Status => Column::Status,
        SortField::CreatedAt => Column::CreatedAt,
        SortField::UpdatedAt => Column::UpdatedAt,
    }
}

/// `%q%` with LIKE wildcards in `q` escaped, lowercased for matching
/// against `lower(title)`.
fn contains_pattern(title: &str) -> String {
    let mut escaped = String::with_capacity(title.len() + 2);
    escaped.push('%');
    for c in title.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for PostgresBlogRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        BlogEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(Blog::try_from)
            .transpose()
    }

    async fn save(&self, mut blog: Blog) -> Result<Blog, RepoError> {
        blog.touch(Utc::now());

        // Single-statement upsert keeps the replace atomic per document.
        let model: ActiveModel = blog.clone().into();
        BlogEntity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns([
                        Column::Title,
                        Column::Content,
                        Column::Category,
                        Column::Tags,
                        Column::Status,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(blog_id = %blog.id, status = %blog.status, "Saved blog");
        Ok(blog)
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn find_active_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        BlogEntity::find_by_id(id)
            .filter(Column::Status.eq(BlogStatus::Active.as_str()))
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .map(Blog::try_from)
            .transpose()
    }

    async fn find_all(&self, visibility: Visibility) -> Result<Vec<Blog>, RepoError> {
        let mut query = BlogEntity::find();
        if visibility == Visibility::ActiveOnly {
            query = query.filter(Column::Status.eq(BlogStatus::Active.as_str()));
        }

        let models = query
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        decode_all(models)
    }

    async fn search_by_title(
        &self,
        title: &str,
        request: &PageRequest,
    ) -> Result<Page<Blog>, RepoError> {
        tracing::debug!(title, page = request.page, size = request.size, "Searching blogs");

        let pattern = LikeExpr::new(contains_pattern(title)).escape('\\');
        let mut query = BlogEntity::find()
            .filter(Expr::expr(Func::lower(Expr::col(Column::Title))).like(pattern));
        if let Some(field) = request.sort.field {
            let order = match request.sort.direction {
                SortDirection::Asc => Order::Asc,
                SortDirection::Desc => Order::Desc,
            };
            query = query.order_by(sort_column(field), order);
        }
        // Ties fall back to insertion order.
        query = query
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id);

        let total = query.clone().count(&self.db).await.map_err(map_db_err)?;

        // An offset past what Postgres can address cannot hold any rows.
        let Some(offset) = request
            .page
            .checked_mul(request.size)
            .filter(|offset| *offset <= MAX_SQL_ROWS)
        else {
            return Ok(Page::new(Vec::new(), request, total));
        };

        let models = query
            .limit(request.size.min(MAX_SQL_ROWS))
            .offset(offset)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Page::new(decode_all(models)?, request, total))
    }

    async fn insert(&self, draft: NewBlog) -> Result<Blog, RepoError> {
        let blog = draft.into_blog(Uuid::new_v4(), Utc::now());
        let model: ActiveModel = blog.clone().into();

        BlogEntity::insert(model)
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(blog_id = %blog.id, "Inserted blog");
        Ok(blog)
    }
}
