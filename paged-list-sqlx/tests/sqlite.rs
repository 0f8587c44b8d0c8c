#![cfg(feature = "sqlite")]

use chrono::NaiveDate;
use paged_list::prelude::*;
use paged_list::{DataError, Dialect};
use paged_list_sqlx::SqlxQuery;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Sqlite, SqlitePool};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
struct Article {
    id: i64,
    title: String,
    published_at: String,
}

async fn seeded_pool(rows: i64) -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::query(
        "CREATE TABLE articles \
         (id INTEGER PRIMARY KEY, title TEXT NOT NULL, published_at TEXT NOT NULL)",
    )
    .execute(&pool)
    .await
    .unwrap();
    for id in 1..=rows {
        sqlx::query("INSERT INTO articles (id, title, published_at) VALUES (?, ?, ?)")
            .bind(id)
            .bind(format!("article {id}"))
            .bind(format!("2024-01-{id:02} 00:00:00"))
            .execute(&pool)
            .await
            .unwrap();
    }
    pool
}

fn articles(pool: &SqlitePool, builder: QueryBuilder) -> SqlxQuery<Article, Sqlite> {
    SqlxQuery::new(pool.clone(), builder).columns("id, title, published_at")
}

#[tokio::test]
async fn test_third_page() {
    let pool = seeded_pool(23).await;
    let query = articles(&pool, QueryBuilder::new("articles").order_by("id", true));

    let page = query.to_paged_list_async(3, 10).await.unwrap();
    let ids: Vec<i64> = page.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![21, 22, 23]);
    assert_eq!(page.total_count(), 23);
    assert_eq!(page.total_pages(), 3);
    assert!(page.has_previous());
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_descending_order_is_respected() {
    let pool = seeded_pool(23).await;
    let query = articles(&pool, QueryBuilder::new("articles").order_by("id", false));

    let page = query.to_paged_list_map_async(1, 3, |a| a.id).await.unwrap();
    assert_eq!(page.items(), &[23, 22, 21]);
}

#[tokio::test]
async fn test_pages_cover_table_once() {
    let pool = seeded_pool(23).await;
    let query = articles(&pool, QueryBuilder::new("articles").order_by("id", true));

    let mut ids = Vec::new();
    for page_number in 1..=3 {
        let page = query
            .to_paged_list_map_async(page_number, 10, |a| a.id)
            .await
            .unwrap();
        ids.extend(page.into_items());
    }
    assert_eq!(ids, (1..=23).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_request_parameters_filter_count_and_page() {
    let pool = seeded_pool(23).await;
    let mut params = QueryStringParameters::new();
    params.set_query(Some("article 1".into()));
    params.set_page_size(5);

    let builder = QueryBuilder::new("articles")
        .apply_parameters(&params, "title", "published_at")
        .order_by("id", true);
    let page = articles(&pool, builder)
        .to_paged_list_map_async(params.page_number(), params.page_size(), |a| a.title)
        .await
        .unwrap();

    // "article 1" and "article 10" through "article 19"
    assert_eq!(page.total_count(), 11);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(
        page.items(),
        &["article 1", "article 10", "article 11", "article 12", "article 13"]
    );
}

#[tokio::test]
async fn test_date_range() {
    let pool = seeded_pool(23).await;
    let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).and_then(|date| date.and_hms_opt(0, 0, 0));
    let mut params = QueryStringParameters::new();
    params.set_date_from(day(5));
    params.set_date_to(day(10));

    let builder = QueryBuilder::new("articles")
        .apply_parameters(&params, "title", "published_at")
        .order_by("published_at", true);
    let page = articles(&pool, builder).to_paged_list_async(1, 10).await.unwrap();

    assert_eq!(page.total_count(), 6);
    assert_eq!(page.items().first().map(|a| a.id), Some(5));
    assert_eq!(page.items().last().map(|a| a.id), Some(10));
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_indexed_items_without_metadata() {
    let pool = seeded_pool(23).await;
    let query = articles(&pool, QueryBuilder::new("articles").order_by("id", true));

    let rows = query
        .to_page_items_async(2, 4, |a, index| format!("{index}:{}", a.id))
        .await
        .unwrap();
    assert_eq!(rows, vec!["0:5", "1:6", "2:7", "3:8"]);
}

#[tokio::test]
async fn test_missing_table_propagates_database_error() {
    let pool = seeded_pool(0).await;
    let query = articles(&pool, QueryBuilder::new("missing").order_by("id", true));

    let err = query.to_paged_list_async(1, 10).await.unwrap_err();
    assert!(matches!(err, DataError::Database(_)));
}

#[tokio::test]
async fn test_invalid_identifier_is_rejected_before_running() {
    let pool = seeded_pool(3).await;
    let query = articles(
        &pool,
        QueryBuilder::new("articles").order_by("id; DROP TABLE articles", true),
    );

    let err = query.to_paged_list_async(1, 10).await.unwrap_err();
    assert!(matches!(err, DataError::InvalidQuery(_)));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM articles")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 3);
}

#[tokio::test]
async fn test_backend_sets_placeholder_style() {
    let pool = seeded_pool(23).await;
    let builder = QueryBuilder::new_with_dialect("articles", Dialect::Postgres)
        .where_gte("published_at", "2024-01-20 00:00:00")
        .order_by("id", true);
    let query = articles(&pool, builder);
    assert_eq!(query.builder().current_dialect(), Dialect::Generic);

    let page = query.to_paged_list_map_async(1, 10, |a| a.id).await.unwrap();
    assert_eq!(page.items(), &[20, 21, 22, 23]);
    assert_eq!(page.total_count(), 4);
}

#[tokio::test]
async fn test_search_text_matches_wildcards_literally() {
    let pool = seeded_pool(23).await;
    sqlx::query("INSERT INTO articles (id, title, published_at) VALUES (?, ?, ?)")
        .bind(100_i64)
        .bind("100% rust")
        .bind("2024-02-01 00:00:00")
        .execute(&pool)
        .await
        .unwrap();

    let search = |q: &str| {
        let mut params = QueryStringParameters::new();
        params.set_query(Some(q.to_string()));
        QueryBuilder::new("articles")
            .apply_parameters(&params, "title", "published_at")
            .order_by("id", true)
    };

    let page = articles(&pool, search("_rticle")).to_paged_list_async(1, 10).await.unwrap();
    assert_eq!(page.total_count(), 0);
    assert!(page.is_empty());

    let page = articles(&pool, search("0%"))
        .to_paged_list_map_async(1, 10, |a| a.title)
        .await
        .unwrap();
    assert_eq!(page.total_count(), 1);
    assert_eq!(page.items(), &["100% rust"]);
}
