#[cfg(test)]
mod tests {
    use crate::database::entity::blog;
    use crate::database::postgres_repo::PostgresBlogRepository;
    use scribe_core::domain::{Blog, BlogStatus, Category, NewBlog, Tag, Visibility};
    use scribe_core::error::RepoError;
    use scribe_core::pagination::{PageRequest, Sort};
    use scribe_core::ports::{BaseRepository, BlogRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    fn model(title: &str, status: &str, tags: serde_json::Value) -> blog::Model {
        let now = chrono::Utc::now();
        blog::Model {
            id: uuid::Uuid::new_v4(),
            title: title.to_owned(),
            content: "Content".to_owned(),
            category: "TECH".to_owned(),
            tags,
            status: status.to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_blog_by_id() {
        let row = model("Test Blog", "ACTIVE", serde_json::json!(["RUST", "BACKEND"]));
        let blog_id = row.id;

        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result: Option<Blog> = repo.find_by_id(blog_id).await.unwrap();

        let blog = result.unwrap();
        assert_eq!(blog.title, "Test Blog");
        assert_eq!(blog.id, blog_id);
        assert_eq!(blog.category, Category::Tech);
        assert_eq!(blog.status, BlogStatus::Active);
        assert_eq!(blog.tags, [Tag::Rust, Tag::Backend].into_iter().collect());
    }

    #[tokio::test]
    async fn test_find_active_by_id_with_no_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog::Model>::new()])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result = repo.find_active_by_id(uuid::Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_all_returns_deleted_rows_too() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model("Live", "ACTIVE", serde_json::json!([])),
                model("Gone", "DELETED", serde_json::json!(["NEWS"])),
            ]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let blogs = repo.find_all(Visibility::All).await.unwrap();
        assert_eq!(blogs.len(), 2);
        assert_eq!(blogs[1].status, BlogStatus::Deleted);

        let sql = executed_sql(repo);
        assert!(!sql[0].contains("WHERE"));
    }

    #[tokio::test]
    async fn test_find_all_active_only_filters_on_status() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("Live", "ACTIVE", serde_json::json!([]))]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let blogs = repo.find_all(Visibility::ActiveOnly).await.unwrap();
        assert_eq!(blogs.len(), 1);

        let sql = executed_sql(repo);
        assert!(sql[0].contains(r#""status" = "#));
    }

    #[tokio::test]
    async fn test_unknown_stored_category_is_a_decode_error() {
        let mut row = model("Odd", "ACTIVE", serde_json::json!([]));
        row.category = "GARDENING".to_owned();
        let blog_id = row.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let err = repo.find_by_id(blog_id).await.unwrap_err();
        assert!(matches!(err, RepoError::Decode(_)));
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
    }

    fn executed_sql(repo: PostgresBlogRepository) -> Vec<String> {
        repo.into_connection()
            .into_transaction_log()
            .iter()
            .flat_map(|txn| txn.statements().iter().map(|stmt| stmt.sql.clone()))
            .collect()
    }

    #[tokio::test]
    async fn test_search_keeps_unfiltered_total() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(5)]])
            .append_query_results(vec![vec![
                model("Rust in Action", "ACTIVE", serde_json::json!(["RUST"])),
                model("Rust Retired", "DELETED", serde_json::json!([])),
            ]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);
        let request = PageRequest::new(1, 2, Sort::from_params("title", "desc")).unwrap();

        let page = repo.search_by_title("rust", &request).await.unwrap();
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[1].status, BlogStatus::Deleted);

        let sql = executed_sql(repo);
        assert_eq!(sql.len(), 2);
        assert!(sql[0].contains("COUNT(*)"));

        let select = &sql[1];
        assert!(select.contains("LOWER("));
        assert!(select.contains("LIKE"));
        assert!(select.contains("ESCAPE"));
        assert!(select.contains("LIMIT"));
        assert!(select.contains("OFFSET"));

        let by_title = select.find(r#""title" DESC"#).unwrap();
        let by_created = select.find(r#""created_at" ASC"#).unwrap();
        let by_id = select.rfind(r#""id" ASC"#).unwrap();
        assert!(by_title < by_created && by_created < by_id);
    }

    #[tokio::test]
    async fn test_search_past_addressable_offset_is_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(3)]])
            .append_query_results(vec![vec![count_row(3)]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let overflowing = PageRequest::new(u64::MAX / 2, 10, Sort::unsorted()).unwrap();
        let page = repo.search_by_title("x", &overflowing).await.unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 3);

        let beyond_bigint = PageRequest::new(1 << 62, 2, Sort::unsorted()).unwrap();
        let page = repo.search_by_title("x", &beyond_bigint).await.unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 3);

        // Only the two count queries reach the database.
        let sql = executed_sql(repo);
        assert_eq!(sql.len(), 2);
        assert!(sql.iter().all(|stmt| stmt.contains("COUNT(*)")));
    }

    #[tokio::test]
    async fn test_save_is_an_upsert() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);
        let mut blog = Blog::try_from(model("Draft", "ACTIVE", serde_json::json!([]))).unwrap();
        blog.mark_deleted();

        let saved = repo.save(blog.clone()).await.unwrap();
        assert_eq!(saved.id, blog.id);
        assert_eq!(saved.status, BlogStatus::Deleted);
        assert!(saved.updated_at >= saved.created_at);

        let sql = executed_sql(repo);
        assert_eq!(sql.len(), 1);
        assert!(sql[0].starts_with(r#"INSERT INTO "blogs""#));
        assert!(sql[0].contains(r#"ON CONFLICT ("id") DO UPDATE"#));
    }

    #[tokio::test]
    async fn test_insert_assigns_identity_and_timestamps() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);
        let draft = NewBlog {
            title: "Hello".to_owned(),
            content: "World".to_owned(),
            category: Category::Tech,
            tags: [Tag::Rust].into_iter().collect(),
            status: BlogStatus::Active,
        };

        let blog = repo.insert(draft).await.unwrap();
        assert!(!blog.id.is_nil());
        assert_eq!(blog.created_at, blog.updated_at);
        assert_eq!(blog.status, BlogStatus::Active);

        let sql = executed_sql(repo);
        assert_eq!(sql.len(), 1);
        assert!(sql[0].starts_with(r#"INSERT INTO "blogs""#));
        assert!(!sql[0].contains("ON CONFLICT"));
    }
}
