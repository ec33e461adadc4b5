//! Integration tests for table creation and the demo seed.

use db::{
    DBService,
    models::{post::Post, product::Product, project::Project, stats::SiteStats},
    seed::seed_if_empty,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_connect_creates_file_and_tables() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("site.db");

    let db = DBService::connect(&db_path).await.expect("connect");
    assert!(db_path.exists());

    let stats = SiteStats::collect(&db.pool).await.expect("stats");
    assert_eq!(
        stats,
        SiteStats {
            products: 0,
            posts: 0,
            projects: 0,
            messages: 0,
            subscribers: 0
        }
    );
    db.close().await;
}

#[tokio::test]
async fn test_reopening_keeps_existing_rows() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("site.db");

    let db = DBService::connect(&db_path).await.expect("first connect");
    let seeded = seed_if_empty(&db.pool).await.expect("seed");
    db.close().await;

    let db = DBService::connect(&db_path).await.expect("second connect");
    let stats = SiteStats::collect(&db.pool).await.expect("stats");
    assert_eq!(stats.products, seeded.products as i64);
    assert_eq!(stats.posts, seeded.posts as i64);
    assert_eq!(stats.projects, seeded.projects as i64);
    assert!(seed_if_empty(&db.pool).await.expect("reseed").is_empty());
    db.close().await;
}

#[tokio::test]
async fn test_seed_populates_empty_tables_once() {
    let db = DBService::in_memory().await.expect("in-memory store");

    let first = seed_if_empty(&db.pool).await.expect("first seed");
    assert_eq!((first.products, first.posts, first.projects), (6, 6, 6));

    let second = seed_if_empty(&db.pool).await.expect("second seed");
    assert!(second.is_empty());

    assert_eq!(Product::count(&db.pool).await.unwrap(), 6);
    assert_eq!(Post::count(&db.pool).await.unwrap(), 6);
    assert_eq!(Project::count(&db.pool).await.unwrap(), 6);
}

#[tokio::test]
async fn test_seed_skips_table_with_any_row() {
    let db = DBService::in_memory().await.expect("in-memory store");

    let id = Product::create(
        &db.pool,
        &db::models::product::ProductPayload {
            name: Some("Only".to_string()),
            description: Some("d".to_string()),
            category: Some("c".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    Product::delete(&db.pool, id).await.unwrap();
    Product::create(
        &db.pool,
        &db::models::product::ProductPayload {
            name: Some("Survivor".to_string()),
            description: Some("d".to_string()),
            category: Some("c".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let report = seed_if_empty(&db.pool).await.unwrap();
    assert_eq!(report.products, 0);
    assert_eq!(report.posts, 6);
    assert_eq!(Product::count(&db.pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_seeded_features_decode_as_lists() {
    let db = DBService::in_memory().await.expect("in-memory store");
    seed_if_empty(&db.pool).await.unwrap();

    let products = Product::find_all(&db.pool, None).await.unwrap();
    let smartflow = products
        .iter()
        .find(|p| p.name == "SmartFlow Pro")
        .expect("seeded product");
    assert_eq!(
        smartflow.features,
        vec![
            "Automated Workflows",
            "Real-time Analytics",
            "Team Collaboration",
            "Enterprise Security"
        ]
    );

    let posts = Post::find_all(&db.pool, None).await.unwrap();
    assert!(posts.iter().all(|p| p.author.as_deref() == Some("GenZ Smart Team")));
}

#[tokio::test]
async fn test_degraded_store_fails_every_call() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    // A directory cannot be opened as a database file.
    let db = DBService::degraded(temp_dir.path());

    assert!(Product::find_all(&db.pool, None).await.is_err());
    assert!(SiteStats::collect(&db.pool).await.is_err());
}
