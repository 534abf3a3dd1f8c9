//! Tests for SqliteCategoryRepository.

use crate::db::{CategoryRepository, Database, DbError, SqliteDatabase};

async fn setup_db() -> SqliteDatabase {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_category() {
    let db = setup_db().await;
    let repo = db.categories();

    let created = repo.create("Science").await.expect("Create should succeed");
    assert_eq!(created.id, 1);
    assert_eq!(created.kind, "Science");

    let retrieved = repo.get(1).await.expect("Get should succeed");
    assert_eq!(retrieved, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_nonexistent_category_returns_not_found() {
    let db = setup_db().await;

    let result = db.categories().get(100).await;
    match result {
        Err(DbError::NotFound { entity_type, id }) => {
            assert_eq!(entity_type, "Category");
            assert_eq!(id, "100");
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn list_categories_in_id_order() {
    let db = setup_db().await;
    let repo = db.categories();
    repo.create("Science").await.unwrap();
    repo.create("Art").await.unwrap();
    repo.create("Geography").await.unwrap();

    let categories = repo.list().await.unwrap();
    let pairs: Vec<(i64, &str)> = categories
        .iter()
        .map(|c| (c.id, c.kind.as_str()))
        .collect();
    assert_eq!(pairs, vec![(1, "Science"), (2, "Art"), (3, "Geography")]);
}
