//! Blog handlers.

use std::collections::BTreeSet;

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use scribe_shared::dto::BlogRequest;
use scribe_shared::taxonomy::Tag;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Query string for GET /api/v1/blogs/search
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub title: String,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_size")]
    pub size: u64,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_sort_dir")]
    pub sort_dir: String,
}

fn default_size() -> u64 {
    10
}

fn default_sort_by() -> String {
    "title".to_string()
}

fn default_sort_dir() -> String {
    "desc".to_string()
}

fn validated(body: web::Json<BlogRequest>) -> AppResult<BlogRequest> {
    let req = body.into_inner();
    req.validate().map_err(AppError::Validation)?;
    Ok(req)
}

/// GET /api/v1/blogs
pub async fn list_blogs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.list_all().await?;
    Ok(HttpResponse::Ok().json(blogs))
}

/// GET /api/v1/blogs/{id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let blog = state.blogs.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(blog))
}

/// GET /api/v1/blogs/search?title=&page=&size=&sortBy=&sortDir=
pub async fn search_blogs(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let q = query.into_inner();
    let page = state
        .blogs
        .search_by_title(&q.title, q.page, q.size, &q.sort_by, &q.sort_dir)
        .await?;
    Ok(HttpResponse::Ok().json(page))
}

/// POST /api/v1/blogs
pub async fn create_blog(
    state: web::Data<AppState>,
    body: web::Json<BlogRequest>,
) -> AppResult<HttpResponse> {
    let req = validated(body)?;
    let blog = state.blogs.create(req).await?;
    Ok(HttpResponse::Created().json(blog))
}

/// PUT /api/v1/blogs/{id}
///
/// The response carries the id of the replacement blog, not `{id}`.
pub async fn update_blog(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<BlogRequest>,
) -> AppResult<HttpResponse> {
    let req = validated(body)?;
    let blog = state.blogs.update(path.into_inner(), req).await?;
    Ok(HttpResponse::Accepted().json(blog))
}

/// PATCH /api/v1/blogs/{id} with a JSON array of tags
pub async fn update_blog_tags(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<BTreeSet<Tag>>,
) -> AppResult<HttpResponse> {
    let blog = state
        .blogs
        .update_tags(path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Accepted().json(blog))
}

/// DELETE /api/v1/blogs/{id}
pub async fn delete_blog(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.blogs.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
