//! Blog lifecycle and search behavior against the in-memory store.

use std::sync::Arc;

use scribe_core::domain::{Category, Tag};
use scribe_core::{BlogService, DomainError};
use scribe_infra::InMemoryBlogRepository;
use scribe_shared::BlogRequest;

fn service() -> BlogService {
    BlogService::new(Arc::new(InMemoryBlogRepository::new()))
}

fn request(title: &str) -> BlogRequest {
    BlogRequest::new(title, "Body text", Category::Tech).with_tags([Tag::Rust, Tag::Backend])
}

#[tokio::test]
async fn test_create_and_fetch_round_trip() {
    let svc = service();

    let created = svc.create(request("Ownership explained")).await.unwrap();
    let fetched = svc.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.category, Category::Tech);
    assert_eq!(fetched.tags, [Tag::Rust, Tag::Backend].into_iter().collect());
    assert!(fetched.created_at <= fetched.updated_at);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let err = service().get_by_id(uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity_type: "Blog", .. }));
}

#[tokio::test]
async fn test_second_delete_is_not_found() {
    let svc = service();
    let blog = svc.create(request("Delete me")).await.unwrap();

    svc.delete(blog.id).await.unwrap();

    let err = svc.delete(blog.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    let err = svc.get_by_id(blog.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_list_all_includes_deleted_blogs() {
    let svc = service();
    let kept = svc.create(request("Kept")).await.unwrap();
    let gone = svc.create(request("Gone")).await.unwrap();
    svc.delete(gone.id).await.unwrap();

    let all = svc.list_all().await.unwrap();
    let ids: Vec<_> = all.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![kept.id, gone.id]);
}

#[tokio::test]
async fn test_tag_update_is_a_full_overwrite() {
    let svc = service();
    let blog = svc.create(request("Tagged")).await.unwrap();

    let updated = svc
        .update_tags(blog.id, [Tag::Ai].into_iter().collect())
        .await
        .unwrap();

    assert_eq!(updated.id, blog.id);
    assert_eq!(updated.tags, [Tag::Ai].into_iter().collect());
    assert_eq!(updated.created_at, blog.created_at);
    assert!(updated.updated_at >= blog.updated_at);

    let fetched = svc.get_by_id(blog.id).await.unwrap();
    assert_eq!(fetched.tags, updated.tags);
}

#[tokio::test]
async fn test_tag_update_on_deleted_blog_is_not_found() {
    let svc = service();
    let blog = svc.create(request("Gone")).await.unwrap();
    svc.delete(blog.id).await.unwrap();

    let err = svc
        .update_tags(blog.id, [Tag::News].into_iter().collect())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn test_update_changes_identity() {
    let svc = service();
    let original = svc.create(request("First draft")).await.unwrap();

    let updated = svc
        .update(original.id, request("Second draft"))
        .await
        .unwrap();

    assert_ne!(updated.id, original.id);
    assert_eq!(updated.title, "Second draft");
    assert!(updated.created_at >= original.created_at);

    let err = svc.get_by_id(original.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    assert!(svc.get_by_id(updated.id).await.is_ok());
}

#[tokio::test]
async fn test_update_of_missing_blog_creates_nothing() {
    let svc = service();

    let err = svc
        .update(uuid::Uuid::new_v4(), request("Orphan"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { .. }));
    assert!(svc.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_filters_inactive_after_paging() {
    let svc = service();
    let live = svc.create(request("Intro to Go")).await.unwrap();
    let draft = svc.create(request("Intro to Go Draft")).await.unwrap();
    svc.delete(draft.id).await.unwrap();

    let page = svc
        .search_by_title("Intro", 0, 10, "title", "asc")
        .await
        .unwrap();

    assert_eq!(page.total_elements, 2);
    assert_eq!(page.total_pages, 1);
    assert!(page.last);
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].id, live.id);
}

#[tokio::test]
async fn test_search_totals_count_unfiltered_matches() {
    let svc = service();
    for n in 0..5 {
        let blog = svc.create(request(&format!("Post {n}"))).await.unwrap();
        if n % 2 == 0 {
            svc.delete(blog.id).await.unwrap();
        }
    }

    // Page 0 in ascending order holds "Post 0" (deleted) and "Post 1".
    let page = svc
        .search_by_title("post", 0, 2, "title", "asc")
        .await
        .unwrap();

    assert_eq!(page.total_elements, 5);
    assert_eq!(page.total_pages, 3);
    assert!(!page.last);
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].title, "Post 1");
}

#[tokio::test]
async fn test_sort_direction_is_lenient() {
    let svc = service();
    for title in ["alpha", "beta", "gamma"] {
        svc.create(request(title)).await.unwrap();
    }

    let titles = |page: scribe_shared::PageResponse<scribe_shared::BlogResponse>| {
        page.content.into_iter().map(|b| b.title).collect::<Vec<_>>()
    };

    let asc = svc.search_by_title("a", 0, 10, "title", "ASC").await.unwrap();
    assert_eq!(titles(asc), vec!["alpha", "beta", "gamma"]);

    let fallback = svc.search_by_title("a", 0, 10, "title", "foo").await.unwrap();
    assert_eq!(titles(fallback), vec!["gamma", "beta", "alpha"]);
}

#[tokio::test]
async fn test_search_never_surfaces_deleted_blogs() {
    let svc = service();
    let mut deleted = Vec::new();
    for n in 0..6 {
        let blog = svc.create(request(&format!("Note {n}"))).await.unwrap();
        if n % 3 != 0 {
            svc.delete(blog.id).await.unwrap();
            deleted.push(blog.id);
        }
    }

    for page_no in 0..3 {
        let page = svc
            .search_by_title("note", page_no, 2, "createdAt", "desc")
            .await
            .unwrap();
        assert!(page.content.iter().all(|b| !deleted.contains(&b.id)));
    }
}

#[tokio::test]
async fn test_update_without_category_keeps_original() {
    let svc = service();
    let original = svc.create(request("Keep me")).await.unwrap();

    let mut replacement = request("Lost category");
    replacement.category = None;

    let err = svc.update(original.id, replacement).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    assert_eq!(svc.get_by_id(original.id).await.unwrap().title, "Keep me");
    assert_eq!(svc.list_all().await.unwrap().len(), 1);
}
